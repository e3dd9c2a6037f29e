use anyhow::Context;
use clap::Parser;
use edens_menu::cart::AppState;
use edens_menu::router::create_app_router;
use edens_menu::{logger, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logger::init_logger(config.verbose, config.log_json);

    config.validate()?;
    let addr = config.socket_addr()?;

    let state = Arc::new(AppState::from_config(&config));
    tracing::info!("Menu QR code points at {}", state.menu_url());

    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
