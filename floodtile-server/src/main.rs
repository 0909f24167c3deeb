//! FloodTile server - HTTP flood hazard tile server
//!
//! This binary loads configuration, initializes logging, and runs the
//! tile service until shutdown.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use floodtile::config::Config;
use floodtile::log::TracingLogger;
use floodtile::logging::init_logging_full;
use floodtile::panic as panic_handler;
use floodtile::service::TileService;

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "floodtile-server")]
#[command(version = floodtile::VERSION)]
#[command(about = "Serve flood hazard map tiles over HTTP", long_about = None)]
struct Args {
    /// Configuration file path (defaults to ./floodtile.ini when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(long)]
    port: Option<u16>,

    /// Flood zone dataset to serve, overriding the config file
    #[arg(long)]
    source: Option<String>,

    /// Directory for log files, overriding the config file
    #[arg(long)]
    log_dir: Option<String>,

    /// Suppress console log output (file logging stays on)
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        err.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut config = load_config(&args)?;
    apply_overrides(&mut config, &args);

    let _logging_guard =
        init_logging_full(&config.logging.directory, &config.logging.file, !args.quiet)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    panic_handler::init();

    info!("FloodTile v{}", floodtile::VERSION);

    let logger = Arc::new(TracingLogger::new());
    let service = TileService::new(config, logger).map_err(CliError::ServiceCreation)?;
    service.serve().await.map_err(CliError::Serve)
}

/// Load configuration, treating an explicitly named file that does not
/// exist as an error rather than silently falling back to defaults.
fn load_config(args: &Args) -> Result<Config, CliError> {
    match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Config::load_from(path).map_err(|e| CliError::Config(e.to_string()))
        }
        None => Config::load().map_err(|e| CliError::Config(e.to_string())),
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(source) = &args.source {
        config.data.source = source.clone();
    }
    if let Some(dir) = &args.log_dir {
        config.logging.directory = dir.clone();
    }
}
