use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workout_service::config::Config;
use workout_service::domain::token::ports::TokenServicePort;
use workout_service::domain::token::service::TokenService;
use workout_service::domain::user::service::UserService;
use workout_service::domain::workout::service::WorkoutService;
use workout_service::inbound::http::router::create_router;
use workout_service::outbound::repositories::PostgresTokenRepository;
use workout_service::outbound::repositories::PostgresUserRepository;
use workout_service::outbound::repositories::PostgresWorkoutRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "workout-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.token.ttl_hours,
        purge_interval_minutes = config.token.purge_interval_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let token_repository = Arc::new(PostgresTokenRepository::new(pg_pool.clone()));
    let workout_repository = Arc::new(PostgresWorkoutRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let token_service = Arc::new(TokenService::new(
        user_repository,
        token_repository,
        chrono::Duration::hours(config.token.ttl_hours),
    ));
    let workout_service = Arc::new(WorkoutService::new(workout_repository));

    let purge_interval = Duration::from_secs(config.token.purge_interval_minutes.max(1) * 60);
    let purge_service = Arc::clone(&token_service);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(purge_interval);
        loop {
            ticker.tick().await;
            match purge_service.purge_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "Expired tokens purged"),
                Err(e) => tracing::error!(error = %e, "Token purge failed"),
            }
        }
    });

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, token_service, workout_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
