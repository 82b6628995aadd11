mod serve;

use std::process;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Largest value accepted for `--history-capacity`.
const MAX_HISTORY_CAPACITY: u64 = 100_000;

/// Four-function calculator HTTP API with bounded history.
#[derive(Parser)]
#[command(
    name = "calc",
    version,
    about = "Four-function calculator HTTP API with bounded history"
)]
struct Cli {
    /// Only log warnings and errors (RUST_LOG overrides)
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the calculator HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,
        /// Allowed CORS origin; repeat for several. Default: any origin
        #[arg(long = "cors-origin", value_name = "ORIGIN")]
        cors_origins: Vec<String>,
        /// Number of calculations kept in history (1..=100000)
        #[arg(
            long,
            default_value_t = calc_core::HISTORY_CAPACITY,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTORY_CAPACITY)
        )]
        history_capacity: usize,
    },
}

fn init_tracing(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
            history_capacity,
        } => {
            let config = serve::ServeConfig {
                host,
                port,
                cors_origins,
                history_capacity,
            };
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!(error = %e, "failed to create tokio runtime");
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(config)) {
                tracing::error!(error = %e, "server error");
                process::exit(1);
            }
        }
    }
}
