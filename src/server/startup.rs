use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use entity::enums::UserRole;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParams,
    util::password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up the session store backed by the same Sqlite database.
///
/// Creates the session table if it does not exist and returns a session
/// middleware layer with a 7 day inactivity expiry.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let session_store = SqliteStore::new(pool);
    session_store
        .migrate()
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to migrate session store: {err}")))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Ensures at least one admin account exists.
///
/// If the users table contains no admin, creates one with the username
/// `admin` and a randomly generated password that is logged exactly once at
/// startup. The operator is expected to log in and change it.
pub async fn ensure_admin_user(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.find_by_role(UserRole::Admin).await?.is_empty() {
        let generated_password = password::generate_password();
        let salt = password::generate_salt();
        let password_hash = password::hash_password(&generated_password, &salt);

        user_repo
            .create(CreateUserParams {
                username: "admin".to_string(),
                password_hash,
                password_salt: salt,
                role: UserRole::Admin,
            })
            .await?;

        tracing::warn!(
            "No admin user found; created default admin account with password: {}",
            generated_password
        );
    }

    Ok(())
}
