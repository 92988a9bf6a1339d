use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Opens the SQLite database and brings its schema up to date.
///
/// Runs every pending migration before returning, so repositories can assume the
/// dispenser tables exist. SQLx statement logging is disabled; repositories log
/// the operations that matter through `tracing`.
///
/// # Arguments
/// - `config` - Application configuration containing `DATABASE_URL`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection pool with migrations applied
/// - `Err(AppError::DbErr)` - The database could not be opened or migrated
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    let pending = Migrator::get_pending_migrations(&db).await?.len();
    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database, applied {} migrations", pending);

    Ok(db)
}
