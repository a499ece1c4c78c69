//! Net Failover Manager console
//!
//! Polls the failover backend for the active default gateway and interface
//! statuses, and serves a status page from which an operator can force an
//! interface to become the default gateway.
//!
//! Usage:
//! ```bash
//! # Serve the status page (default command)
//! netfailover --backend http://127.0.0.1:8000
//!
//! # With config file
//! netfailover --config netfailover.yaml serve
//!
//! # One-shot status, or watch the default gateway
//! netfailover status
//! netfailover watch --interval-secs 5
//!
//! # Force an interface to be the default gateway
//! netfailover set-default wan1
//! ```

mod config;

use clap::{Parser, Subcommand};
use config::ConsoleConfig;
use netfailover_client::HttpBackend;
use netfailover_ui::{Console, UiServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Net Failover Manager console
#[derive(Parser)]
#[command(name = "netfailover")]
#[command(about = "Status console for the net failover manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file (YAML or TOML)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "NETFAILOVER_CONFIG",
        global = true
    )]
    config: Option<String>,

    /// Base URL of the failover backend
    #[arg(short, long, value_name = "URL", global = true)]
    backend: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the backend and serve the status page (default if no command specified)
    Serve,
    /// Fetch gateway and interface status once and print them
    Status,
    /// Print the default gateway periodically
    Watch {
        /// Seconds between checks
        #[arg(long, default_value = "5")]
        interval_secs: u64,
    },
    /// Force an interface to become the default gateway
    SetDefault {
        /// Interface name, e.g. wan1
        interface: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    };

    // Merge environment variables (they override config file)
    config.merge_env();

    // CLI flags have the highest precedence
    if let Some(url) = cli.backend {
        config.backend.base_url = url;
    }

    config.validate()?;
    init_tracing(&config.logging.level)?;

    if let Some(path) = &cli.config {
        info!("📁 Loaded configuration from: {}", path);
    }

    let backend = Arc::new(HttpBackend::new(&config.backend.client_config())?);
    let console = Console::new(backend, config.poll.response_ordering);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, console).await,
        Commands::Status => {
            let (gateway, interfaces) = tokio::join!(
                console.gateway.refresh_default_gateway(),
                console.interfaces.refresh_interface_status()
            );
            if let Err(e) = gateway {
                warn!("Could not read default gateway: {}", e);
            }
            if let Err(e) = interfaces {
                warn!("Could not read interface status: {}", e);
            }
            print!("{}", console.render_text());
            Ok(())
        }
        Commands::Watch { interval_secs } => watch(console, interval_secs).await,
        Commands::SetDefault { interface } => {
            console.gateway.set_default_gateway(&interface).await?;
            println!("{}", console.gateway.text());
            Ok(())
        }
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Connection pool chatter is never useful here
    let mut filter = EnvFilter::new(format!("{}", log_level));
    for directive in ["hyper_util=warn", "reqwest=warn"] {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Failed to set log filter {}: {}", directive, e),
        }
    }

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn serve(config: ConsoleConfig, console: Console) -> anyhow::Result<()> {
    info!("Initialized");
    info!("🔌 Backend: {}", config.backend.base_url);
    info!(
        "⏱  Polling gateway every {}ms, interfaces every {}ms ({:?} ordering)",
        config.poll.gateway_interval_ms,
        config.poll.interface_interval_ms,
        config.poll.response_ordering
    );

    // Polling lives as long as the process
    let _poller = console.poller(&config.poll).start();

    UiServer::new(config.ui, console)
        .serve(shutdown_signal())
        .await
}

async fn watch(console: Console, interval_secs: u64) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = console.gateway.refresh_default_gateway().await {
                    warn!("Could not read default gateway: {}", e);
                }
                println!("{}", console.gateway.text());
            }
            _ = &mut shutdown => return Ok(()),
        }
    }
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
