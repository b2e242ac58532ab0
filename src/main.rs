use concurseiro_backend::{
    config::init_config,
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = init_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;

    let app_state = AppState::from_config(pool, config)?;
    info!(
        model = %config.gemini_model,
        available = app_state.ai_service.is_available(),
        "language model configured"
    );

    let app = routes::create_router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
