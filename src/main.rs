mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    // Seed an admin account on first boot so the instance is reachable.
    startup::ensure_admin_user(&db).await?;

    let app = router::router(&config.cors_origin)
        .with_state(AppState::new(db))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
