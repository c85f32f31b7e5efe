//! Flow name resolution command line interface
//!
//! Resolves Flowns (`.fn`) and FIND (`.find`) names through a Flow Access node.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use membership_flow_access::FlowAccessClient;
use membership_names::{compute_node, NameLookupError, NameResolver, Network};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod settings;

use settings::AppConfig;

#[derive(Parser)]
#[command(name = "membership-names")]
#[command(about = "Resolve Flowns and FIND names to addresses and profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Flow network: mainnet, testnet or emulator
    #[arg(long)]
    network: Option<Network>,

    /// Flow Access REST endpoint, overrides the network default
    #[arg(long, alias = "rpc")]
    access_node: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Flowns namehash of a name
    Namehash {
        /// Dotted name, e.g. alice.fn
        name: String,
    },
    /// Resolve a name to its owner address
    Resolve {
        /// Name ending in .fn or .find
        name: String,
    },
    /// Show the unified profile of a name
    Info {
        /// Name ending in .fn or .find
        name: String,
    },
    /// Show each registry's raw lookup outcome
    Raw {
        /// Name ending in .fn or .find
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.network, cli.access_node);
    init_logging(&config)?;

    match cli.command {
        Commands::Namehash { name } => println!("{}", compute_node(&name)),
        Commands::Resolve { name } => {
            let resolver = build_resolver(&config)?;
            match resolver.resolve_name_to_address(&name).await {
                Some(address) => println!("{address}"),
                None => bail!("name not resolved: {name}"),
            }
        }
        Commands::Info { name } => {
            let resolver = build_resolver(&config)?;
            match resolver.get_name_info(&name).await {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => bail!("name not resolved: {name}"),
            }
        }
        Commands::Raw { name } => {
            let outcomes = build_resolver(&config)?.lookup_outcomes(&name).await;
            let report = json!({
                "flowns": outcome_json(outcomes.flowns)?,
                "find": outcome_json(outcomes.find)?,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn build_resolver(config: &AppConfig) -> Result<NameResolver> {
    let access_node = config.access_node_url();
    let addresses = config.contract_addresses();
    debug!(network = %config.network, access_node, ?addresses, "building resolver");

    let client = FlowAccessClient::new(access_node)
        .with_context(|| format!("invalid access node {access_node}"))?;
    Ok(NameResolver::new(Arc::new(client), &addresses))
}

fn outcome_json<T: Serialize>(outcome: Result<T, NameLookupError>) -> Result<Value> {
    Ok(match outcome {
        Ok(record) => json!({ "record": serde_json::to_value(record)? }),
        Err(err) => json!({ "error": err.to_string() }),
    })
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "pretty" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
