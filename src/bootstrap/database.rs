use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::task::JoinHandle;

use crate::config::app::AppConfig;

/// Start the database handshake without waiting for it.
///
/// The returned handle completes exactly once: `Some` with the live
/// connection, or `None` after the failure has been logged. A connection
/// failure is not fatal and the server keeps accepting requests.
pub fn connect(config: &AppConfig) -> JoinHandle<Option<DatabaseConnection>> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    tokio::spawn(async move {
        match Database::connect(options).await {
            Ok(connection) => {
                tracing::info!("connected!");

                Some(connection)
            }
            Err(err) => {
                tracing::error!("connection error: {}", err);

                None
            }
        }
    })
}
