//! talkroom terminal client entry point.

use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use rand::Rng;
use talkroom_tui::{ClientConfig, Exit, Identity, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Multi-room chat in the terminal
#[derive(Parser, Debug)]
#[command(name = "talkroom")]
#[command(about = "Terminal client for talkroom multi-room chat")]
#[command(version)]
struct Args {
    /// Server host and port
    #[arg(short, long, default_value = "localhost:8080")]
    server: String,

    /// Display name shown next to your messages
    #[arg(short, long)]
    name: String,

    /// Session identifier
    ///
    /// A random one is generated if not given.
    #[arg(long)]
    sender_id: Option<String>,

    /// Write logs to this file
    ///
    /// The terminal is taken over by the UI, so nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let sender_id = args.sender_id.unwrap_or_else(random_sender_id);
    let config = ClientConfig::new(args.server, Identity::new(sender_id, args.name));
    tracing::info!(server = %config.server, sender_id = config.identity.sender_id(), "starting");

    let driver = TerminalDriver::new()?;
    let exit = Runtime::new(driver, config).run().await?;

    if let Exit::LoggedOut { logout_url } = exit {
        writeln!(io::stdout(), "Logged out. Continue at {logout_url}")?;
    }
    Ok(())
}

fn init_logging(path: &Path, log_level: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn random_sender_id() -> String {
    format!("{:016x}", rand::rng().random::<u64>())
}
