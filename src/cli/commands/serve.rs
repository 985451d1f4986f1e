//! Serve command - run the HTTP FAQ service

use std::sync::Arc;

use clap::Args;

use crate::cli::commands::CorpusArgs;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::tokenizer::Tokenizer;
use crate::http;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Seconds between corpus reloads
    #[arg(long)]
    pub interval: Option<u64>,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut Config) {
        self.corpus.apply(config);
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(interval) = self.interval {
            config.refresh.interval_secs = interval;
        }
    }
}

/// Execute the serve command
///
/// Starts the background refresher, then serves until Ctrl-C.
pub async fn execute(
    config: Config,
    tokenizer: Arc<dyn Tokenizer>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting Tadpole FAQ service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    config.log_config();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let interval = config.refresh.interval();

    let services = Arc::new(Services::new(config, tokenizer)?);
    let refresher = tokio::spawn(Arc::clone(&services.refresher).run(interval));

    let app = http::router(services);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresher.abort();
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
