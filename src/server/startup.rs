use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::user::UserService,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations. This must complete successfully
/// before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled so requests only ever reach the configured hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// CORS for the dashboards.
///
/// With `FRONTEND_URL` set only that origin is allowed and cookies are accepted.
/// Otherwise any origin may call the API without credentials.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let Some(frontend_url) = &config.frontend_url else {
        return Ok(cors.allow_origin(Any));
    };

    let origin = HeaderValue::from_str(frontend_url).map_err(|e| ConfigError::InvalidEnvVar {
        name: "FRONTEND_URL".to_string(),
        reason: e.to_string(),
    })?;

    Ok(cors.allow_origin(origin).allow_credentials(true))
}

/// Seeds the admin account from `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
///
/// Does nothing when an admin already exists or the variables are unset.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD not set, skipping admin seeding");
        return Ok(());
    };

    match UserService::new(db).ensure_admin(email, password).await? {
        Some(admin) => tracing::info!("Created admin account {}", admin.email),
        None => tracing::debug!("Admin account already exists"),
    }

    Ok(())
}
