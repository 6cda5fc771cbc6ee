//! sharemon - prints the status of all shares managed by the daemon.
//!
//! One fetch-then-render cycle: resolve the daemon target, issue a
//! single status request over TCP, render the color-coded table.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

use sharemon_core::config::{self, DaemonConfig, RemoteSpec, RemoteTarget};
use sharemon_core::render::render_report;
use sharemon_core::rpc::{DaemonClient, RpcError};
use sharemon_core::view::build_share_row;

/// Prints the status of all managed shares.
#[derive(Parser)]
#[command(name = "sharemon", about = "Prints the status of all managed shares", version)]
struct Args {
    /// Hostname and optional port of the daemon (host[:port]).
    #[arg(short, long, value_parser = RemoteSpec::parse)]
    remote: Option<RemoteSpec>,

    /// Path to the daemon config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to stderr so the report stays clean on stdout.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sharemon={}", level).parse().unwrap())
        .add_directive(format!("sharemon_core={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the daemon config. An explicit `--config` path must be
/// readable; the default location quietly falls back to defaults.
fn load_config(path: Option<&PathBuf>) -> Result<DaemonConfig, config::ConfigError> {
    if let Some(path) = path {
        return DaemonConfig::load(path);
    }
    match config::default_config_path() {
        Some(path) if path.exists() => match DaemonConfig::load(&path) {
            Ok(loaded) => Ok(loaded),
            Err(e) => {
                warn!("ignoring config at {}: {}", path.display(), e);
                Ok(DaemonConfig::default())
            }
        },
        _ => {
            debug!("no daemon config file, using defaults");
            Ok(DaemonConfig::default())
        }
    }
}

/// One fetch-then-render cycle against the daemon.
fn run(target: &RemoteTarget) -> Result<String, RpcError> {
    let mut client = DaemonClient::connect(target)?;
    let shares = client.status()?;
    client.close()?;

    debug!("rendering {} shares", shares.len());
    let rows: Vec<_> = shares.iter().map(build_share_row).collect();
    let color = std::io::stdout().is_terminal();
    Ok(render_report(&rows, color))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sharemon: {}", e);
            process::exit(2);
        }
    };

    let target = RemoteTarget::resolve(args.remote.as_ref(), &config);
    info!("querying daemon at {}", target);

    match run(&target) {
        Ok(report) => println!("\n{}", report),
        Err(e) => {
            eprintln!("sharemon: {}", e);
            process::exit(1);
        }
    }
}
