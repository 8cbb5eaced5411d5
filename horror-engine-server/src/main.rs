//! Horror Engine Server - Main entry point.

use std::sync::Arc;

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use horror_engine::StoryGenerator;
use horror_engine_server::config::ServerConfig;
use horror_engine_server::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "horror_engine_server=debug,horror_engine=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Horror Engine server");

    let config = ServerConfig::from_env();

    let mut builder = StoryGenerator::builder();
    for path in &config.lexicon_paths {
        builder = builder.lexicon_path(path);
    }
    let generator = builder.build().context("load story lexicon")?;

    let app = Arc::new(App::new(generator));
    let router = horror_engine_server::router(app, config.cors_allowed_origins.as_deref());

    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
