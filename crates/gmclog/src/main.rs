mod pages;
mod routes;
mod store;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gmclog_parser::{parse_log, ParserConfig};
use store::LogStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "GMC log viewer CLI and API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the log viewer HTTP server
    Serve(ServeArgs),
    /// Parse a local export and print the chart payload as JSON
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,

    /// Directory holding stored log pairs (falls back to GMCLOG_DATA_DIR,
    /// then ./data)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Path to the exported data file
    data: PathBuf,

    /// Optional path to the flags file
    #[arg(long)]
    flags: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Render(args) => render(args),
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(|| {
        std::env::var("GMCLOG_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"))
    });

    let state = Arc::new(routes::AppState::new(
        LogStore::new(&data_dir),
        ParserConfig::default(),
    ));
    let router = routes::router(state);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

fn render(args: RenderArgs) -> Result<()> {
    let data_text = std::fs::read_to_string(&args.data)
        .with_context(|| format!("failed to read {}", args.data.display()))?;
    let flags_text = args
        .flags
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .transpose()?;

    let payload = parse_log(&data_text, flags_text.as_deref(), &ParserConfig::default())?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
