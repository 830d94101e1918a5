//! Setlist application services: schedules, users, authentication and
//! server-side carts backed by PostgreSQL.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
