use clap::Parser;
use ringview::{FileSink, GraphStore, HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Overlay topology aggregator
///
/// Accepts neighbor reports from peers and serves the merged ring as a
/// force-graph JSON feed.
#[derive(Parser, Debug)]
#[command(name = "ringview", version)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    address: String,

    /// Listen port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Mirror the merged graph to this JSON file after every accepted write
    #[arg(long)]
    persist: Option<PathBuf>,

    /// Truncate node names to this many characters for display
    #[arg(long)]
    name_limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = match cli.name_limit {
        Some(limit) => GraphStore::with_name_limit(limit),
        None => GraphStore::new(),
    };
    let store = Arc::new(RwLock::new(store));
    let sink = cli.persist.map(FileSink::new);

    let server = HttpServer::new(store, sink, cli.address, cli.port);
    server.start().await?;

    Ok(())
}
