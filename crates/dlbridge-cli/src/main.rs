//! dlbridge command-line front end.
//!
//! Decodes host tagged values, looks up the capability catalogs and runs the
//! sample scenarios against the mock hosts.
//!
//! # Usage
//!
//! ```text
//! dlbridge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   decode   Decode host tagged values
//!   catalog  List catalog entries
//!   demo     Run a sample scenario against the mock hosts
//!
//! Options:
//!   --config <FILE>    SDK configuration file (JSON)
//!   --no-host <HOST>   Leave a host slot empty [barcode, cradle, keyboard]
//!   -v, --verbose      Log at debug level
//! ```
//!
//! The log level can also be set with `RUST_LOG`; `--verbose` wins.

mod demo;
mod listing;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dlbridge_core::SdkConfig;
use dlbridge_hardware::{Environment, mock};
use dlbridge_protocol::codec::decode;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::demo::Scenario;
use crate::listing::CatalogKind;

#[derive(Debug, Parser)]
#[command(
    name = "dlbridge",
    about = "Typed access to the Datalogic device SDK hosts",
    version
)]
struct Cli {
    /// SDK configuration file (JSON); missing fields take their defaults.
    #[arg(long, global = true, env = "DLBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Leave a host slot empty to observe the missing-host behaviour.
    #[arg(long, global = true, value_enum)]
    no_host: Vec<HostKind>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode host tagged values such as `INT:42` or `BOL:true`.
    Decode {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List catalog entries.
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,

        /// Only show entries whose name contains this text (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },

    /// Run a sample scenario against the mock hosts.
    Demo {
        #[arg(value_enum)]
        scenario: Scenario,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HostKind {
    Barcode,
    Cradle,
    Keyboard,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SdkConfig> {
    match path {
        Some(path) => SdkConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(SdkConfig::default()),
    }
}

/// Build an environment with every mock host installed except `missing`.
fn build_environment(config: SdkConfig, missing: &[HostKind]) -> (Environment, mock::MockHosts) {
    let env = Environment::with_config(config);
    let hosts = mock::install(&env);

    for kind in missing {
        match kind {
            HostKind::Barcode => env.barcode_slot().eject(),
            HostKind::Cradle => env.cradle_slot().eject(),
            HostKind::Keyboard => env.keyboard_slot().eject(),
        };
    }

    (env, hosts)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Decode { text } => {
            for text in &text {
                println!("{text} => {:?}", decode(text));
            }
        }
        Command::Catalog { kind, filter } => {
            for line in listing::list(kind, filter.as_deref()) {
                println!("{line}");
            }
        }
        Command::Demo { scenario } => {
            let config = load_config(cli.config.as_ref())?;
            info!("Running '{}' demo", scenario.name());

            let (env, hosts) = build_environment(config, &cli.no_host);
            for line in demo::run(scenario, &env, &hosts)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
