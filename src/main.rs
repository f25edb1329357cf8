use std::sync::Arc;

use specialty_rebrand::api::{self, app_state::AppState};
use specialty_rebrand::audit::create_audit_log;
use specialty_rebrand::config::config::LoggingConfig;
use specialty_rebrand::config::loader::ConfigLoader;
use specialty_rebrand::models::physician_repository::{
    PhysicianRepository, PhysicianRepositoryImpl,
};
use specialty_rebrand::models::specialty_repository::{
    SpecialtyRepository, SpecialtyRepositoryImpl,
};
use specialty_rebrand::security::auth::NonceAuthenticator;
use specialty_rebrand::services::{create_assignment_service, create_directory_service};
use specialty_rebrand::storage::surrealdb::SurrealPool;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let _guard = init_tracing(&config.logging);
    info!("Starting specialty-rebrand...");
    info!("Configuration loaded successfully");

    let db_pool = SurrealPool::new(config.database.clone()).await?;
    info!("Database connection pool initialized");

    let specialty_repository: Arc<dyn SpecialtyRepository> =
        Arc::new(SpecialtyRepositoryImpl::new(db_pool.clone()));
    let physician_repository: Arc<dyn PhysicianRepository> =
        Arc::new(PhysicianRepositoryImpl::new(db_pool.clone()));
    info!("Repositories initialized");

    let audit_log = create_audit_log(&config.audit.log_path)?;
    info!("Audit log open at {}", config.audit.log_path.display());

    let assignment_service = create_assignment_service(
        physician_repository.clone(),
        specialty_repository.clone(),
        audit_log,
    );
    let directory_service = create_directory_service(
        physician_repository.clone(),
        specialty_repository.clone(),
    );
    info!("Services initialized");

    let authenticator = Box::new(NonceAuthenticator::from_config(&config.security));

    let app_state = AppState::new(
        specialty_repository,
        physician_repository,
        assignment_service,
        directory_service,
        authenticator,
    );
    info!("Application state created");

    let router = api::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Initialize the tracing subscriber; the returned guard keeps the file
/// writer alive for the process lifetime.
fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "specialty-rebrand.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if config.structured {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .init();
            }
            Some(guard)
        }
        None => {
            if config.structured {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            } else {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            None
        }
    }
}
