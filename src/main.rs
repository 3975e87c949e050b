use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;

use callme::{AppConfig, AppState, MessageBirdClient, config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load configuration")?;
    config::init_tracing(&cfg.log_level, cfg.log_json);

    let mut builder = MessageBirdClient::builder(cfg.access_key.clone());
    if let Some(endpoint) = cfg.messagebird_endpoint.as_deref() {
        builder = builder.endpoint(endpoint);
    }
    if let Some(timeout) = cfg.messagebird_timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder
        .build()
        .context("failed to build MessageBird client")?;

    info!(
        "Relaying leads from {} to {} sales agent(s)",
        cfg.originator.as_str(),
        cfg.roster.len()
    );

    let app = router(AppState {
        messenger: Arc::new(client),
        originator: cfg.originator.clone(),
        roster: cfg.roster.clone(),
    });

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {} ({})", addr, cfg.environment);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
