// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigSource};
use crate::yaml::load_yaml_with_env;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "polyrpc.config.yaml";
pub const ENV_PREFIX: &str = "POLYRPC_";

/// Settings for `polyrpc serve`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to listen on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Number of http workers, defaults to the number of physical cores
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6090,
            workers: None,
        }
    }
}

/// Settings for `polyrpc client`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base url of the polyrpc server
    pub server_url: String,
    /// How long to wait for the initial connection
    pub dial_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:6090".to_string(),
            dial_timeout_secs: 5,
        }
    }
}

impl ClientConfig {
    pub fn dial_timeout(&self) -> Duration {
        Duration::from_secs(self.dial_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    server: ServerConfig,
    client: ClientConfig,
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    /// The yaml file the configuration was read from, if any
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    pub server: ServerOverrides,
    pub client: ClientOverrides,
}

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct ServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct ClientOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_timeout_secs: Option<u64>,
}

/// Load the config at the config_file or the default location if not provided
pub fn load_config(config_file: Option<String>, overrides: CliOverrides) -> Result<AppConfig> {
    let source = resolve_config_path(
        find_in_parent,                  // finding strategy
        env::current_dir()?,             // cwd
        OsDirs::config_dir(),            // default config folder
        DEFAULT_CONFIG_NAME,             // hardcoded to polyrpc.config.yaml
        config_file.map(PathBuf::from), // config file passed on the cli
    );

    load_config_from(source, overrides)
}

/// Layer defaults, the yaml file, `POLYRPC_*` environment variables and cli overrides
pub fn load_config_from(source: ConfigSource, overrides: CliOverrides) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    let config_file = match &source {
        ConfigSource::Default(path) if !path.exists() => {
            debug!("No configuration file at {:?}, using defaults", path);
            None
        }
        _ => {
            let loaded_yaml =
                load_yaml_with_env(source.path()).context("Configuration file not found")?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
            Some(source.path().clone())
        }
    };

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = config_file;
    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polyrpc")
    }
}
