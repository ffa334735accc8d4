use anyhow::Result;
use clap::{Parser, Subcommand};

/// weekbasket - Household meal planning backend
#[derive(Parser)]
#[command(name = "weekbasket")]
#[command(about = "Household meal planning and grocery list backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Seed an in-memory demo household at startup
        #[arg(long)]
        demo: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = weekbasket::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    weekbasket::observability::init_observability(
        "weekbasket",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port, demo } => {
            weekbasket::server::serve(config, host, port, demo).await
        }
    }
}
