use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr,
    TransactionTrait,
};
use tracing::info;

use crate::types::error::AppError;

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::with_options(ConnectOptions::new(uri.to_owned())).await
    }

    pub async fn with_options(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to PostgreSQL, migrations finished.");
        Ok(Self { database_connection })
    }

    /// Opens a transaction. Dropping it without `commit()` rolls it back.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.database_connection.begin().await
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}

/// Maps a unique-key violation to `mapped`; anything else stays a store error.
pub(crate) fn on_unique_violation(err: DbErr, mapped: AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => mapped,
        _ => err.into(),
    }
}
