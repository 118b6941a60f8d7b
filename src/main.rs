use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hq_portal::config;
use hq_portal::database::DatabaseManager;
use hq_portal::navigation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, IDENTITY_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!("Starting HQ Portal API in {:?} mode", config.environment);

    check_route_tree(config.navigation.strict_validation)?;

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("HQ Portal API listening on http://{}", bind_addr);

    axum::serve(listener, hq_portal::app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close().await;
    Ok(())
}

fn check_route_tree(strict: bool) -> anyhow::Result<()> {
    let routes = navigation::routes();
    match routes.validate() {
        Ok(()) => {
            tracing::info!("Route tree loaded ({} routes)", routes.iter().count());
            Ok(())
        }
        Err(problems) => {
            for problem in &problems {
                tracing::warn!("Route tree: {}", problem);
            }
            if strict {
                anyhow::bail!("route tree has {} problem(s)", problems.len());
            }
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
