//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{Config, config_path};
use crate::error::CommandError;
use crate::version::comparator::{Policy, ordering_to_int};
use crate::version::select::{latest_version, sort_versions};

#[derive(Debug, Parser)]
#[command(name = "version-cmp")]
#[command(version, about = "Compare loose semver and Go module versions")]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/version-cmp/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print -1, 0 or 1 as A is lower than, equal to or greater than B
    Compare {
        a: String,
        b: String,
        /// generic or golang (defaults to the configured policy)
        #[arg(long)]
        policy: Option<Policy>,
    },
    /// Print versions in ascending order, one per line
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(long)]
        policy: Option<Policy>,
        /// Descending order instead
        #[arg(long)]
        reverse: bool,
    },
    /// Print the greatest version
    Latest {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(long)]
        policy: Option<Policy>,
    },
}

/// Load the config named by `--config`, or the default config file.
pub fn load_config(cli: &Cli) -> Result<Config, CommandError> {
    let path = cli.config.clone().unwrap_or_else(config_path);
    Ok(Config::load(&path)?)
}

/// Run a command and return the lines to print.
pub fn execute(command: Command, default_policy: Policy) -> Result<Vec<String>, CommandError> {
    match command {
        Command::Compare { a, b, policy } => {
            let policy = policy.unwrap_or(default_policy);
            let ordering = policy.comparator().compare(&a, &b);
            debug!(%policy, "compare '{}' '{}': {:?}", a, b, ordering);
            Ok(vec![ordering_to_int(ordering).to_string()])
        }
        Command::Sort {
            mut versions,
            policy,
            reverse,
        } => {
            if versions.is_empty() {
                return Err(CommandError::NoVersions);
            }
            let policy = policy.unwrap_or(default_policy);
            sort_versions(policy.comparator(), &mut versions);
            if reverse {
                versions.reverse();
            }
            Ok(versions)
        }
        Command::Latest { versions, policy } => {
            let policy = policy.unwrap_or(default_policy);
            let latest =
                latest_version(policy.comparator(), &versions).ok_or(CommandError::NoVersions)?;
            Ok(vec![latest.to_string()])
        }
    }
}
