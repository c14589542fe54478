//! glusterctl
//!
//! Read-only inspection of a GlusterFS cluster. Every command prints its
//! result as pretty JSON on stdout; logs go to stderr.

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gluster_cli_client::{
    retry_on_busy, ClientConfig, Error, GeoRepSessionRef, GlusterClient, RemoveBrickRequest,
    ReplaceBrickRequest, Result, RetryPolicy,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// glusterctl - Inspect GlusterFS volumes, peers and replication sessions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the gluster tool (defaults to /usr/sbin/gluster, else PATH)
    #[arg(long, env = "GLUSTER_PATH")]
    gluster_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,

    /// Retry busy responses for up to this many seconds (0 disables)
    #[arg(long, env = "RETRY_BUSY", default_value = "0")]
    retry_busy: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Volume queries
    #[command(subcommand)]
    Volume(VolumeCommand),

    /// Rebalance progress
    #[command(subcommand)]
    Rebalance(RebalanceCommand),

    /// Remove-brick progress
    #[command(subcommand)]
    RemoveBrick(RemoveBrickCommand),

    /// Replace-brick progress
    #[command(subcommand)]
    ReplaceBrick(ReplaceBrickCommand),

    /// Cluster membership
    #[command(subcommand)]
    Peer(PeerCommand),

    /// Profiling statistics
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Geo-replication sessions
    #[command(subcommand)]
    Georep(GeoRepCommand),
}

#[derive(Subcommand, Debug)]
enum VolumeCommand {
    /// Describe one or all volumes
    Info {
        volume: Option<String>,
        /// Ask the daemon of another peer
        #[arg(long)]
        remote_host: Option<String>,
    },
    /// Runtime status of a volume
    Status(StatusArgs),
    /// Running tasks of one or all volumes
    Tasks { volume: Option<String> },
    /// Settable options and their defaults
    Options,
}

#[derive(ClapArgs, Debug)]
struct StatusArgs {
    volume: String,
    /// Restrict to one brick (host:/path)
    brick: Option<String>,
    #[arg(long, conflicts_with_all = ["clients", "mem"])]
    detail: bool,
    #[arg(long, conflicts_with = "mem")]
    clients: bool,
    #[arg(long)]
    mem: bool,
}

#[derive(Subcommand, Debug)]
enum RebalanceCommand {
    Status { volume: String },
}

#[derive(Subcommand, Debug)]
enum RemoveBrickCommand {
    Status {
        volume: String,
        #[arg(required = true)]
        bricks: Vec<String>,
        #[arg(long)]
        replica: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
enum ReplaceBrickCommand {
    Status {
        volume: String,
        existing_brick: String,
        new_brick: String,
    },
}

#[derive(Subcommand, Debug)]
enum PeerCommand {
    Status,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    Info {
        volume: String,
        /// Report NFS servers instead of bricks
        #[arg(long)]
        nfs: bool,
    },
}

#[derive(Subcommand, Debug)]
enum GeoRepCommand {
    /// Sessions of one or all master volumes
    Status {
        volume: Option<String>,
        /// Remote session as host::volume
        #[arg(long)]
        remote: Option<String>,
        #[arg(long)]
        detail: bool,
    },
    /// Effective configuration of one session
    Config {
        volume: String,
        remote_host: String,
        remote_volume: String,
    },
}

// =============================================================================
// Main
// =============================================================================

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);

    info!("Starting glusterctl {}", gluster_cli_client::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.gluster_path {
        Some(path) => ClientConfig::with_gluster_path(path.clone()),
        None => ClientConfig::default(),
    };
    let client = GlusterClient::new(config)?;
    info!("Using gluster at {}", client.config().gluster_path);

    let policy = (args.retry_busy > 0)
        .then(|| RetryPolicy::with_max_elapsed(Duration::from_secs(args.retry_busy)));

    match &args.command {
        Commands::Volume(cmd) => run_volume(&client, policy, cmd),
        Commands::Rebalance(RebalanceCommand::Status { volume }) => {
            print_json(&with_retry(policy, || client.rebalance_status(volume))?)
        }
        Commands::RemoveBrick(RemoveBrickCommand::Status {
            volume,
            bricks,
            replica,
        }) => {
            let request = RemoveBrickRequest {
                volume: volume.clone(),
                bricks: bricks.clone(),
                replica_count: *replica,
            };
            print_json(&with_retry(policy, || client.remove_brick_status(&request))?)
        }
        Commands::ReplaceBrick(ReplaceBrickCommand::Status {
            volume,
            existing_brick,
            new_brick,
        }) => {
            let request = ReplaceBrickRequest {
                volume: volume.clone(),
                existing_brick: existing_brick.clone(),
                new_brick: new_brick.clone(),
            };
            print_json(&with_retry(policy, || client.replace_brick_status(&request))?)
        }
        Commands::Peer(PeerCommand::Status) => {
            print_json(&with_retry(policy, || client.peer_status())?)
        }
        Commands::Profile(ProfileCommand::Info { volume, nfs }) => {
            print_json(&with_retry(policy, || client.profile_info(volume, *nfs))?)
        }
        Commands::Georep(cmd) => run_georep(&client, policy, cmd),
    }
}

fn run_volume(
    client: &GlusterClient,
    policy: Option<RetryPolicy>,
    cmd: &VolumeCommand,
) -> Result<()> {
    match cmd {
        VolumeCommand::Info {
            volume,
            remote_host,
        } => print_json(&with_retry(policy, || {
            client.volume_info(volume.as_deref(), remote_host.as_deref())
        })?),
        VolumeCommand::Status(status) => {
            let volume = status.volume.as_str();
            let brick = status.brick.as_deref();
            if status.detail {
                print_json(&with_retry(policy, || client.volume_status_detail(volume, brick))?)
            } else if status.clients {
                print_json(&with_retry(policy, || client.volume_status_clients(volume, brick))?)
            } else if status.mem {
                print_json(&with_retry(policy, || client.volume_status_mem(volume, brick))?)
            } else {
                print_json(&with_retry(policy, || client.volume_status(volume, brick))?)
            }
        }
        VolumeCommand::Tasks { volume } => {
            print_json(&with_retry(policy, || client.volume_tasks(volume.as_deref()))?)
        }
        VolumeCommand::Options => print_json(&with_retry(policy, || client.volume_set_help())?),
    }
}

fn run_georep(
    client: &GlusterClient,
    policy: Option<RetryPolicy>,
    cmd: &GeoRepCommand,
) -> Result<()> {
    match cmd {
        GeoRepCommand::Status {
            volume,
            remote,
            detail,
        } => {
            let remote = remote.as_deref().map(parse_remote).transpose()?;
            print_json(&with_retry(policy, || {
                client.geo_rep_status(volume.as_deref(), remote, *detail)
            })?)
        }
        GeoRepCommand::Config {
            volume,
            remote_host,
            remote_volume,
        } => {
            let session = GeoRepSessionRef::new(volume, remote_host, remote_volume);
            print_json(&with_retry(policy, || client.geo_rep_config(&session))?)
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn with_retry<T, F>(policy: Option<RetryPolicy>, mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    match policy {
        Some(policy) => retry_on_busy(&policy, op),
        None => op(),
    }
}

/// Split a `host::volume` session endpoint
fn parse_remote(remote: &str) -> Result<(&str, &str)> {
    match remote.split_once("::") {
        Some((host, volume)) if !host.is_empty() && !volume.is_empty() => Ok((host, volume)),
        _ => Err(Error::Configuration(format!(
            "remote session must be host::volume, got {:?}",
            remote
        ))),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
