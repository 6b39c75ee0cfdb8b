//! Catalog server. `catalog-server seed` resets the database with sample data and exits.

use catalog_api::{app_router, seed_catalog, AppState, Settings, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_api=info,catalog_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = Store::open(&settings.database_path).await?;

    if std::env::args().nth(1).as_deref() == Some("seed") {
        seed_catalog(store.pool()).await?;
        store.close().await;
        return Ok(());
    }

    let app = app_router(AppState::new(store.clone()), settings.max_body_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
