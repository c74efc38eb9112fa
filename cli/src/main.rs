use anyhow::Result;
use clap::Parser;
use lexfind_core::{InvertedIndex, SearchServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

mod answers;
mod config;
mod requests;

#[derive(Parser)]
#[command(name = "lexfind")]
#[command(about = "Index a document corpus and answer ranked free-text queries", long_about = None)]
struct Cli {
    /// Engine configuration (document list, response limit)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
    /// Query list
    #[arg(long, default_value = "requests.json")]
    requests: PathBuf,
    /// Output path for ranked answers
    #[arg(long, default_value = "answers.json")]
    answers: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = config::Config::load(&cli.config)?;
    let documents = config.read_documents();
    let queries = requests::read_requests(&cli.requests);

    let index = Arc::new(InvertedIndex::new());
    index.update_document_base(documents);

    let server = SearchServer::new(index);
    let results = server.search(&queries);

    answers::write_answers(&cli.answers, &results, config.max_responses)?;
    tracing::info!(path = %cli.answers.display(), "answers written");
    Ok(())
}
