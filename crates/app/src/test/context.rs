//! Shared state for service integration tests.

use sqlx::{Connection, PgConnection, PgPool, query};

use crate::{
    database::Db,
    domain::{
        carts::PgCartsService,
        schedules::PgSchedulesService,
        users::{
            PgUsersService, UsersService,
            data::NewUser,
            records::{Role, UserUuid},
        },
    },
};

use super::db::{SUPERUSER, SUPERUSER_PASSWORD, TestDb};

/// Login role without superuser rights, so cart row-level security applies.
const APP_ROLE: &str = "setlist_app_test";
const APP_ROLE_PASSWORD: &str = "setlist_app_test_password";

pub(crate) struct TestContext {
    pub db: TestDb,

    /// Fan created for every context; owns the default cart.
    pub user_uuid: UserUuid,

    pub schedules: PgSchedulesService,
    pub carts: PgCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;

        let db = Db::new(Self::app_pool(&test_db).await);

        let user_uuid = UserUuid::new();

        PgUsersService::new(test_db.pool().clone())
            .create_user(NewUser {
                uuid: user_uuid,
                name: "Test Fan".to_string(),
                role: Role::Public,
            })
            .await
            .expect("Failed to create default test user");

        Self {
            schedules: PgSchedulesService::new(db.clone()),
            carts: PgCartsService::new(db),
            user_uuid,
            db: test_db,
        }
    }

    /// Connect as [`APP_ROLE`], creating it on first use.
    ///
    /// Superusers bypass RLS even when it is forced on a table.
    async fn app_pool(test_db: &TestDb) -> PgPool {
        let database_url = &test_db.superuser_url;

        let server_url = database_url
            .rsplit_once('/')
            .map_or(database_url.as_str(), |(server, _)| server);

        let mut server = PgConnection::connect(&format!("{server_url}/postgres"))
            .await
            .expect("Failed to connect for role setup");

        // Tests race to create the role; 42710 and 23505 both mean it exists.
        let created = query(&format!(
            "CREATE ROLE {APP_ROLE} WITH LOGIN PASSWORD '{APP_ROLE_PASSWORD}' \
               NOSUPERUSER NOCREATEDB NOCREATEROLE"
        ))
        .execute(&mut server)
        .await;

        match created {
            Ok(_) => {}
            Err(sqlx::Error::Database(error))
                if matches!(error.code().as_deref(), Some("42710" | "23505")) => {}
            Err(error) => panic!("Failed to create app role: {error}"),
        }

        query(&format!(
            "GRANT CONNECT ON DATABASE \"{}\" TO {APP_ROLE}",
            test_db.name
        ))
        .execute(&mut server)
        .await
        .expect("Failed to grant CONNECT on test database");

        server.close().await.expect("Failed to close connection");

        let mut database = PgConnection::connect(database_url)
            .await
            .expect("Failed to connect for grant setup");

        for grant in [
            format!("GRANT USAGE ON SCHEMA public TO {APP_ROLE}"),
            format!(
                "GRANT SELECT, INSERT, UPDATE, DELETE ON ALL TABLES IN SCHEMA public TO {APP_ROLE}"
            ),
        ] {
            query(&grant)
                .execute(&mut database)
                .await
                .expect("Failed to grant privileges to app role");
        }

        database.close().await.expect("Failed to close connection");

        let app_url = database_url.replacen(
            &format!("{SUPERUSER}:{SUPERUSER_PASSWORD}"),
            &format!("{APP_ROLE}:{APP_ROLE_PASSWORD}"),
            1,
        );

        PgPool::connect(&app_url)
            .await
            .expect("Failed to create app pool")
    }
}
