
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, migrate};

/// Fresh in-memory database with the full schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&configs::DatabaseConfig::in_memory()).await?;
    migrate(&db).await?;
    Ok(db)
}
