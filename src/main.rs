use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dockdeck::app::App;
use dockdeck::config::{Config, ServerConfig};
use dockdeck::core::ConnectionInfo;
use dockdeck::docker::DockerClient;

/// Dockdeck - Docker dashboard TUI
#[derive(Parser, Debug)]
#[command(name = "dockdeck")]
#[command(about = "A terminal dashboard for Docker containers, images, networks and volumes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<std::path::PathBuf>,

    /// Docker host to connect to
    #[arg(short = 'H', long, value_name = "HOST", global = true)]
    host: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the TUI (default)
    #[command(alias = "tui")]
    Run,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        _ => run_tui(cli).await,
    }
}

fn print_version() {
    println!("dockdeck {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

async fn run_tui(cli: Cli) -> Result<()> {
    // Initialize logging (file only, not stdout to avoid polluting TUI)
    let log_level = if cli.debug { "debug" } else { &cli.log_level };

    // Write logs to file instead of stdout
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/dockdeck.log")
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(format!("dockdeck={}", log_level))
            .with_writer(std::sync::Arc::new(file))
            .init();
    } else {
        // If can't open log file, disable logging
        tracing_subscriber::fmt().with_env_filter("off").init();
    }

    info!("Starting Dockdeck v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI arguments
    let config = apply_cli_overrides(config, &cli);

    info!("Configuration loaded successfully");

    // Probe the daemon before entering the alternate screen
    match check_docker_connection(&config).await {
        Ok(info) => {
            info!(
                "Connected to Docker: {} (API: {})",
                info.version, info.api_version
            );
        }
        Err(e) => {
            warn!("Could not connect to Docker: {}", e);
            eprintln!("⚠️  Warning: Could not connect to Docker daemon.");
            eprintln!("   Please ensure Docker is running and you have permissions.");
            eprintln!("   Error: {}", e);
        }
    }

    // Run the TUI application
    let mut app = App::new(config).await?;
    app.run().await?;

    info!("Dockdeck shutting down gracefully");
    Ok(())
}

/// A `--host` on the command line becomes the selected server
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(host) = &cli.host {
        config.servers.insert(
            0,
            ServerConfig {
                id: "cli".to_string(),
                name: host.clone(),
                host: Some(host.clone()),
            },
        );
    }
    config
}

async fn check_docker_connection(config: &Config) -> anyhow::Result<ConnectionInfo> {
    let servers = config.servers();
    let server = &servers[0];

    let client = DockerClient::for_server(server).await?;
    client.ping().await?;
    Ok(client.connection_info().clone())
}
