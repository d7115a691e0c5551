mod app;
mod apps;
mod config;
mod form;
mod guard;
mod handlers;
mod session;
mod state;
mod views;

use crate::config::Config;
use crate::state::AppState;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting new-app-page");

    let config = Config::from_env()?;
    debug!(listen = %config.listen, base_url = %config.base_url, "configuration");

    let addr = config.listen;
    let router = app::router(AppState::new(config));

    info!(%addr, "binding listener");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listener bound, starting HTTP server");

    axum::serve(listener, router).await?;

    info!("server stopped");
    Ok(())
}
