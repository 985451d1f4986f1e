//! Search command - one-shot query against a freshly loaded corpus

use crate::cli::commands::CorpusArgs;
use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::TadpoleError;
use crate::core::services::Services;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{FaqEntry, QueryResponse};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Show headings only (no answers)
    #[arg(long)]
    pub titles_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    config: Config,
    tokenizer: Arc<dyn Tokenizer>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let services = Services::new(config, tokenizer)?;
    services.refresher.refresh_once().await?;

    let query = args.query.clone();
    let faqs = tokio::task::spawn_blocking(move || services.query(&query))
        .await
        .map_err(|e| TadpoleError::TaskFailed(format!("Query task failed: {e}")))??;

    match format {
        OutputFormat::Human => print_human(&args, &faqs),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&QueryResponse::from(faqs))?);
        }
    }

    Ok(())
}

fn print_human(args: &SearchArgs, faqs: &[FaqEntry]) {
    if faqs.is_empty() {
        println!("No entries found for '{}'", colors::label(&args.query));
        return;
    }

    println!(
        "Found {} entr{} for '{}':\n",
        colors::number(&faqs.len().to_string()),
        if faqs.len() == 1 { "y" } else { "ies" },
        colors::label(&args.query)
    );

    for faq in faqs {
        println!(
            "{} {}",
            colors::file_path(&format!("{}:{}", faq.path, faq.question_line_num)),
            colors::question(&faq.question)
        );
        if !args.titles_only {
            for line in faq.answer.lines() {
                println!("    {}", colors::dim(line));
            }
            println!();
        }
    }
}
