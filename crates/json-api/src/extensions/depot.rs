//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use setlist_app::auth::Identity;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the authenticated caller for downstream handlers.
    fn insert_identity(&mut self, identity: Identity);

    /// The authenticated caller, or 401 if authentication did not run.
    fn identity_or_401(&self) -> Result<Identity, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.inject(identity);
    }

    fn identity_or_401(&self) -> Result<Identity, StatusError> {
        self.obtain::<Identity>()
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use setlist_app::domain::users::records::{Role, UserUuid};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn identity_round_trips_through_depot() -> TestResult {
        let identity = Identity {
            user: UserUuid::new(),
            role: Role::Admin,
        };

        let mut depot = Depot::new();
        depot.insert_identity(identity);

        assert_eq!(depot.identity_or_401()?, identity);

        Ok(())
    }

    #[test]
    fn missing_identity_is_401() {
        let depot = Depot::new();

        assert_eq!(
            depot.identity_or_401().map_err(|error| error.code),
            Err(StatusCode::UNAUTHORIZED)
        );
    }
}
