//! # Vitotrol Configuration Module
//!
//! This module provides the configuration of the Vitotrol client:
//! - Embedded default configuration
//! - Merging with an optional external `config.yaml`
//! - Environment variable overrides
//! - A typed, read-only view handed to each `Session`
//!
//! There is no process-wide configuration: callers load a [`Config`] and
//! pass it explicitly, which lets tests point a session at a local server.
//!
//! ## Usage
//!
//! ```no_run
//! use vitoconfig::Config;
//!
//! let config = Config::load("")?;
//! println!("Endpoint: {}", config.client.endpoint);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{
    env, fmt, fs,
    path::PathBuf,
    time::Duration,
};
use tracing::{debug, info};

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("vitotrol.yaml");

const ENV_CONFIG_DIR: &str = "VITOTROL_CONFIG";
const ENV_PREFIX: &str = "VITOTROL_CONFIG__";
const CONFIG_DIR_NAME: &str = ".vitotrol";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// URL du web service Vitotrol
pub const DEFAULT_ENDPOINT: &str =
    "http://www.viessmann.com/app_vitodata/VIIWebService-1.16.0.0/iPhoneWebService.asmx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 30;

/// Typed configuration of the Vitotrol client
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub credentials: Option<Credentials>,
}

/// Transport settings of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the SOAP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Global timeout of one HTTP exchange, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Logs full request and response bodies
    #[serde(default)]
    pub debug: bool,
}

/// Polling of asynchronous refresh/write operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_poll_max_attempts")]
    pub max_attempts: u32,
}

/// Account used to log in
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_poll_max_attempts() -> u32 {
    DEFAULT_POLL_MAX_ATTEMPTS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at another endpoint (mock server, proxy...)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

// Le mot de passe ne doit jamais apparaître dans les logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Config {
    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external config.yaml file if present
    /// 4. Applies environment variable overrides
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `VITOTROL_CONFIG` environment variable
    /// 3. `.vitotrol` in the current directory
    /// 4. `.vitotrol` in the user's home directory
    pub fn load(directory: &str) -> Result<Self> {
        let config_dir = Self::find_config_dir(directory);
        let path = config_dir.join(CONFIG_FILE_NAME);

        let external = match fs::read(&path) {
            Ok(data) => {
                info!(config_file=%path.display(), "Loaded config file");
                Some(serde_yaml::from_slice::<Value>(&data)?)
            }
            Err(_) => {
                info!(config_file=%path.display(), "Config file not found, using default embedded config");
                None
            }
        };

        Self::from_layers(external, env::vars())
    }

    /// Builds a configuration from a YAML document merged over the defaults.
    ///
    /// Environment variables are not consulted.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let external: Value = serde_yaml::from_str(yaml)?;
        Self::from_layers(Some(external), std::iter::empty())
    }

    /// Returns the configured credentials
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match &self.credentials {
            Some(c) if !c.username.is_empty() => Ok((&c.username, &c.password)),
            _ => Err(anyhow!("No Vitotrol credentials configured (credentials.username)")),
        }
    }

    fn from_layers<I>(external: Option<Value>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut value = lower_keys_value(serde_yaml::from_str(DEFAULT_CONFIG)?);
        if let Some(external) = external {
            merge_yaml(&mut value, &lower_keys_value(external));
        }
        apply_env_overrides(&mut value, vars);

        let config: Config = serde_yaml::from_value(value)?;
        debug!(endpoint=%config.client.endpoint, "Configuration ready");
        Ok(config)
    }

    /// Argument, then `$VITOTROL_CONFIG`, then the first existing of
    /// `./.vitotrol` and `~/.vitotrol`.
    fn find_config_dir(directory: &str) -> PathBuf {
        if !directory.is_empty() {
            return PathBuf::from(directory);
        }

        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var=ENV_CONFIG_DIR, path=%env_path, "Trying to load config from env");
            return PathBuf::from(env_path);
        }

        let local = PathBuf::from(CONFIG_DIR_NAME);
        let home = home_dir().map(|home| home.join(CONFIG_DIR_NAME));

        std::iter::once(local.clone())
            .chain(home)
            .find(|candidate| candidate.exists())
            .unwrap_or(local)
    }
}

fn apply_env_overrides<I>(config: &mut Value, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        if let Some(path) = key.strip_prefix(ENV_PREFIX) {
            let key_path = path.split("__").collect::<Vec<_>>();
            debug!(variable=%key, "Applying environment override");
            if let Err(e) = set_value(config, &key_path, convert_env_value(&value)) {
                debug!(variable=%key, error=%e, "Ignoring environment override");
            }
        }
    }
}

fn convert_env_value(value: &str) -> Value {
    serde_yaml::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

fn set_value(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
    let Some((first, rest)) = path.split_first() else {
        *data = value;
        return Ok(());
    };

    if data.is_null() {
        *data = Value::Mapping(Mapping::new());
    }

    let Value::Mapping(map) = data else {
        return Err(anyhow!("Current node is not a map"));
    };

    let key = Value::String(first.to_lowercase());
    if rest.is_empty() {
        map.insert(key, value);
        Ok(())
    } else {
        let entry = map.entry(key).or_insert(Value::Mapping(Mapping::new()));
        set_value(entry, rest, value)
    }
}

fn lower_keys_value(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| match k {
                    Value::String(s) => (Value::String(s.to_lowercase()), lower_keys_value(v)),
                    k => (k, lower_keys_value(v)),
                })
                .collect(),
        ),
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(lower_keys_value).collect()),
        _ => value,
    }
}

/// Overlays the user file onto the embedded defaults
///
/// `client`, `poll` and `credentials` are merged key by key: a file that only
/// sets `client.endpoint` keeps the default timeout and polling policy. A key
/// left empty in the file (`timeout_secs:`) keeps its default; any other
/// scalar replaces it.
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (_, Value::Null) => {}
        (Value::Mapping(section), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                if let Some(current) = section.get_mut(key) {
                    merge_yaml(current, value);
                } else {
                    section.insert(key.clone(), value.clone());
                }
            }
        }
        (current, value) => *current = value.clone(),
    }
}
