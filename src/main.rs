use anyhow::Result;
use clap::Parser;
use paperdex::{create_router, PaperStore};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Read-only metadata/search API over an arXiv paper corpus", long_about = None)]
struct Args {
    /// TCP port to listen on
    #[arg(value_parser = clap::value_parser!(u16).range(1024..=65535), default_value_t = 8080)]
    port: u16,

    /// Path to the corpus JSON file
    #[arg(short, long, default_value = "sample_data/papers.json")]
    data: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // The corpus is loaded exactly once; an unreadable file still starts
    // the server, which then reports 500 on every request.
    let store = Arc::new(PaperStore::load(&args.data));
    if store.exists() {
        tracing::info!("loaded {} papers from {}", store.len(), args.data.display());
    } else {
        tracing::warn!(
            "no corpus at {}, serving 500 for all requests",
            args.data.display()
        );
    }

    let app = create_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;

    println!("Starting arXiv API server on port {}", args.port);
    println!("Access at: http://localhost:{}", args.port);
    println!("Available endpoints:");
    println!("  GET /papers");
    println!("  GET /papers/{{arxiv_id}}");
    println!("  GET /search?q=...");
    println!("  GET /stats");

    axum::serve(listener, app).await?;
    Ok(())
}
