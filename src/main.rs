use anyhow::Result;
use clap::{Parser, Subcommand};
use recursion_scan::app::engine::RecursionEngine;
use recursion_scan::cli::run_analysis;
use recursion_scan::domain::analysis::DEFAULT_PATH_CAP;
use recursion_scan::server::http;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rscan",
    version,
    about = "Detect direct and indirect recursion in a program's call graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a module (.ll textual IR or .json summary) and report
    /// recursive functions with witness call paths
    Analyze {
        /// Input module: textual LLVM IR (.ll) or module summary (.json)
        input: PathBuf,
        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit findings as JSON instead of the text report
        #[arg(long)]
        json: bool,
        /// Witness paths recorded per recursive function
        #[arg(long, default_value_t = DEFAULT_PATH_CAP)]
        max_paths: usize,
    },
    /// Serve the analysis over HTTP
    Serve {
        /// Input module to load at startup
        input: PathBuf,
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
        /// Witness paths recorded per recursive function
        #[arg(long, default_value_t = DEFAULT_PATH_CAP)]
        max_paths: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            input,
            output,
            json,
            max_paths,
        } => run_analysis(&input, output.as_deref(), json, max_paths),
        Command::Serve {
            input,
            addr,
            max_paths,
        } => {
            let engine = RecursionEngine::load_from_path(&input, max_paths)?;
            tracing::info!(%addr, "serving recursion analysis");
            tokio::runtime::Runtime::new()?.block_on(http::serve(engine, addr))
        }
    }
}
