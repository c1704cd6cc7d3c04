//! taskboard-server binary

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard::store::FsBoardStore;
use taskboard::BoardContext;
use taskboard_server::router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// REST server for the taskboard kanban engine
#[derive(Debug, Parser)]
#[command(name = "taskboard-server", version)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Directory holding the board documents
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let store = FsBoardStore::new(&args.data_dir);
    let ctx = BoardContext::new(Arc::new(store));
    let app = router(ctx);

    let listener = TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        data_dir = %args.data_dir.display(),
        "taskboard server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
