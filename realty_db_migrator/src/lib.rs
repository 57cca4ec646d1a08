//! The sole responsibility of this crate is to expose the statically imported sql migrations for the realty database.
//!
//! Kept separate from realty_db_client so test binaries can embed the migrations without the full client crate.
pub static REALTY_DB_MIGRATIONS: sqlx::migrate::Migrator =
    sqlx::migrate!("../realty_db_client/migrations");
