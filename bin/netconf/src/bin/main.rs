//! CLI to inspect the resolved network registry.
//!
//! - `list`: every network with its RPC URL, default gas price and fork block
//! - `rpc-url <NETWORK>`: the RPC URL of one network
//! - `fork`: the fork descriptor built from `FORK` and `FORK_BLOCK_NUMBER`

use clap::{Parser, Subcommand};
use netconf::{config::Config, render_fork, render_networks, render_networks_json};
use networks::{NetworkId, NetworkRegistry, ProcessEnv};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "netconf")]
#[command(about = "Inspect network RPC endpoints, gas defaults and fork settings")]
struct Cli {
    /// Dotenv file loaded into the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Optional settings file whose [env] table fills unset variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every supported network
    List,

    /// Print the RPC URL of a network
    RpcUrl {
        /// Network name, e.g. `main` or `bsctestnet`
        network: NetworkId,
    },

    /// Print the fork descriptor, or `null` when FORK is unset
    Fork,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dotenvy::from_path(&cli.env_file) {
        Ok(()) => info!("Loaded environment from {}", cli.env_file.display()),
        Err(e) if e.not_found() => debug!("No dotenv file at {}", cli.env_file.display()),
        Err(e) => return Err(e.into()),
    }

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let env = config.layered(ProcessEnv);

    let registry = NetworkRegistry::from_env(&env);
    info!(provider = ?registry.rpc_urls().provider(), "Built network registry");

    match cli.command {
        Command::List => {
            if cli.json {
                println!("{}", render_networks_json(&registry)?);
            } else {
                print!("{}", render_networks(&registry)?);
            }
        }
        Command::RpcUrl { network } => {
            println!("{}", registry.rpc_url(network));
        }
        Command::Fork => {
            let fork = registry.build_fork_config(&env)?;
            match &fork {
                Some(fork) => info!(block = ?fork.block_number, "Fork enabled"),
                None => info!("Forking disabled"),
            }
            println!("{}", render_fork(fork.as_ref())?);
        }
    }

    Ok(())
}
