//! Hotel booking service CLI
//!
//! Headless server suitable for deployment as a systemd service, Docker
//! container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/hotel-booking/config.toml)
//! hotel-booking
//!
//! # Custom config path
//! hotel-booking --config /etc/hotel-booking/config.toml
//!
//! # Override the port and create missing tables
//! hotel-booking --port 8080 --create-schema
//!
//! # Validate config without starting
//! hotel-booking --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use hotel_booking::config::{redact_credentials, AppConfig};
use hotel_booking::server::{init_tracing, ServerHandle, ServerOptions};

/// Hotel booking service: hotels, rooms, bookings and customers over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "hotel-booking",
    version,
    about = "Hotel booking REST service",
    long_about = "Hotel booking REST service backed by PostgreSQL.\n\n\
                  Default config: ~/.config/hotel-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "HOTEL_BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Create missing tables on startup.
    #[arg(long)]
    create_schema: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(hotel_booking::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            if cli.check {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if cli.create_schema {
        info!("CLI override: create_schema = true");
        config.database.create_schema = true;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!(
            "   Database    : {}",
            redact_credentials(&config.database.connection_url())
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions { config }).await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.stop().await?;

    Ok(())
}
