use std::net::SocketAddr;
use std::path::PathBuf;

use ai_move::{router, AppConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classical_engine::MoveSelector;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with [server] and [engine] sections
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the move API over HTTP
    Serve {
        /// Listen address, overrides the config file
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Print the FEN after the engine's reply to FEN
    Pick {
        fen: String,

        /// Search depth in plies, overrides the config file
        #[arg(short, long)]
        depth: Option<u8>,

        /// Play a uniformly random legal move instead of searching
        #[arg(long)]
        random: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Command::Serve { addr } => {
            if let Some(addr) = addr {
                config.server.addr = addr;
            }
            serve(config).await
        }
        Command::Pick { fen, depth, random } => {
            if let Some(depth) = depth {
                config.engine = config.engine.with_depth(depth);
                config.engine.validate()?;
            }
            let next = if random {
                random_engine::play_random(&fen)
            } else {
                MoveSelector::new(config.engine).choose_move(&fen)
            }
            .with_context(|| format!("no move for {fen}"))?;
            println!("{next}");
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let addr = config.server.addr;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, depth = config.engine.depth, "API listening");
    axum::serve(listener, router(config.engine))
        .await
        .context("server error")?;
    Ok(())
}
