mod api;
mod cache;
mod middleware;
mod source;
#[cfg(test)]
mod test_support;

use std::{sync::Arc, time::Duration};

use oshare_sheets::{ServiceAccountAuth, SheetsClient, SheetsConfig};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    cache::PageCache,
    source::CatalogSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = oshare_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting oshare-server");

    let auth = ServiceAccountAuth::new(
        &config.google_client_email,
        &config.google_private_key,
        &config.token_uri,
        config.request_timeout_secs,
    )?;
    let client = SheetsClient::new(SheetsConfig::from_app_config(&config), Arc::new(auth))?;
    let source: Arc<dyn CatalogSource> = Arc::new(client);

    let pages = PageCache::new(Duration::from_secs(config.revalidate_secs));
    match pages.prerender_all(&source).await {
        Ok(count) => tracing::info!(count, "pre-rendered landing pages"),
        Err(e) => tracing::warn!(error = %e, "landing page pre-render failed; pages will render on demand"),
    }

    let app = build_app(AppState { source, pages });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
