// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::telemetry::setup_simple_tracing;
use crate::helpers::VERSION;
use crate::{client, serve};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use polyrpc_config::validation::ValidUrl;
use polyrpc_config::{load_config, ClientOverrides, CliOverrides, ServerOverrides};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyrpc")]
#[command(version = VERSION)]
#[command(about = "Polynomial arithmetic over a remote procedure call service", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyrpc -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve Add, Sub and Mul to remote callers
    Serve {
        /// TCP port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to listen on
        #[arg(long)]
        host: Option<String>,

        /// Number of http workers
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Build two polynomials interactively and combine them on a server
    Client {
        /// Server url. Eg. http://localhost:6090
        #[arg(short, long = "server")]
        server: Option<ValidUrl>,

        /// Dial timeout in seconds
        #[arg(short, long = "timeout")]
        timeout: Option<u64>,
    },
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    /// Values given on the command line take precedence over file and environment
    pub fn overrides(&self) -> CliOverrides {
        match &self.command {
            Commands::Serve {
                port,
                host,
                workers,
            } => CliOverrides {
                server: ServerOverrides {
                    host: host.clone(),
                    port: *port,
                    workers: *workers,
                },
                ..Default::default()
            },
            Commands::Client { server, timeout } => CliOverrides {
                client: ClientOverrides {
                    server_url: server.clone().map(Into::into),
                    dial_timeout_secs: *timeout,
                },
                ..Default::default()
            },
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());
        info!("polyrpc {}", VERSION);

        let config = load_config(self.config.clone(), self.overrides())?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Serve { .. } => serve::execute(&config).await?,
            Commands::Client { .. } => client::execute(&config).await?,
        }

        Ok(())
    }
}
