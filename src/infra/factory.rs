use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::{auth_service::AuthService, facade::HbnbFacade};
use crate::infra::repositories::{
    sqlite_amenity_repo::SqliteAmenityRepo, sqlite_place_repo::SqlitePlaceRepo,
    sqlite_review_repo::SqliteReviewRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    build_state(pool, config)
}

/// Wires the SQLite repositories behind the facade. Used directly by tests.
pub fn build_state(pool: SqlitePool, config: &Config) -> AppState {
    let facade = HbnbFacade::new(
        Arc::new(SqliteUserRepo::new(pool.clone())),
        Arc::new(SqlitePlaceRepo::new(pool.clone())),
        Arc::new(SqliteReviewRepo::new(pool.clone())),
        Arc::new(SqliteAmenityRepo::new(pool)),
    );

    AppState {
        config: config.clone(),
        facade: Arc::new(facade),
        auth_service: Arc::new(AuthService::new(config)),
    }
}

pub async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
