//! Tadpole - FAQ search over note files
//!
//! # Examples
//!
//! ```bash
//! # Serve the query API over a notes directory, reloading every 30s
//! tadpole serve -d ~/notes --interval 30
//!
//! # Segment Chinese text with a local dictionary
//! tadpole serve -d ~/notes -i /usr/share/dict/zh.txt
//!
//! # One-off query
//! tadpole search "git 乱码" -d ~/notes
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tadpole::cli::{output, run, Cli};
use tadpole::core::tokenizer::build_tokenizer;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = start(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tadpole=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn start(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.resolve_config()?;

    // Built before the runtime: the remote backend's blocking client
    // must not be created or dropped on an async thread
    let tokenizer = build_tokenizer(&config.tokenizer)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli.command, cli.format, config, Arc::clone(&tokenizer)));

    drop(runtime);
    drop(tokenizer);

    result
}
