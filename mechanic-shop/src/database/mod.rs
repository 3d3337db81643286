// Data access: one connection, prepared statements, schema creation.

pub mod access;
pub mod schema;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

use crate::settings::DatabaseSettings;

pub use access::{TableRow, execute_update, print_query, query_count, query_rows};
pub use schema::Migrator;

/// Open the single connection the shop works through.
///
/// # Errors
///
/// Returns a `DbErr` if the database cannot be reached.
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let url = settings.url();
    tracing::info!(host = %settings.host, port = settings.port, database = %settings.name, "Connecting to database");

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    tracing::info!("Connected");
    Ok(db)
}
