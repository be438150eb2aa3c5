use anyhow::Context;
use userapi_api::config::{self, ServerConfig};
use userapi_infra::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before logging is set up, so RUST_LOG can come from `.env` too.
    let dotenv = config::load_dotenv();
    userapi_observability::init();
    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    let config = ServerConfig::from_env().context("invalid configuration")?;
    let store = config.store.build_store().context("failed to build user store")?;

    // Connections are opened per request, so an unreachable store at boot is not fatal.
    if let Err(e) = store.ping().await {
        tracing::warn!(error = %e, "user store not reachable at startup");
    }

    let app = userapi_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
