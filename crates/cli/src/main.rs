mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sensor_gateway_core::GatewayConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sensor-gateway")]
#[command(about = "REST/HTML gateway over IoT sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP gateway
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Create missing tables before serving
        #[arg(long)]
        migrate: bool,
    },
    /// Create the readings and devices tables if missing
    Migrate,
    /// Print the distinct sensor ids as JSON
    Devices,
    /// Print the latest reading of one sensor as JSON
    Latest { sensor_id: i32 },
}

fn load_config() -> Result<GatewayConfig> {
    GatewayConfig::from_env()
        .map_err(|e| anyhow::anyhow!("{e} (set it in the environment or a .env file)"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env loaded: {e}");
    }

    let cli = Cli::parse();
    let config = load_config()?;

    match cli.command {
        Commands::Serve { port, host, migrate } => {
            commands::serve::run(config.with_bind(host, port), migrate).await?;
        },
        Commands::Migrate => commands::migrate::run(config).await?,
        Commands::Devices => commands::query::devices(config).await?,
        Commands::Latest { sensor_id } => commands::query::latest(config, sensor_id).await?,
    }

    Ok(())
}
