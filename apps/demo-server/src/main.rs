use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use demo_api::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// DevOps Demo API - stateless demo service behind a hosted CI pipeline
#[derive(Parser)]
#[command(name = "demo-server")]
#[command(about = "DevOps Demo API - stateless demo service behind a hosted CI pipeline")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (DEMO_API__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    // Dump before logging starts so stdout stays parseable.
    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    demo_api::logging::init_logging(&config.logging);
    tracing::info!("DevOps Demo API starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => demo_api::server::run(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("checking configuration");
    config.server.bind_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}
