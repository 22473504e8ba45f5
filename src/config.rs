use crate::error::{AdbxError, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PROGRAM: &str = "adb";
const DEFAULT_WAIT_TIMEOUT: i64 = 10;

/// Process-wide settings, read once at start-up and never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Extra or overriding operation templates, e.g. `ls = "shell ls {}"`
    #[serde(default)]
    pub templates: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Bridge executable, looked up on PATH unless it contains a separator
    #[serde(default = "default_program")]
    pub program: String,

    /// Seconds `wait-for-device` may block; -1 disables the limit
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout: i64,

    /// Kill the whole process group when a timed invocation expires
    #[serde(default = "default_true")]
    pub kill_tree: bool,

    /// Run per-target invocations concurrently
    #[serde(default)]
    pub parallel: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            wait_timeout: default_wait_timeout(),
            kill_tree: true,
            parallel: false,
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_wait_timeout() -> i64 {
    DEFAULT_WAIT_TIMEOUT
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load from `~/.adbxconfig`, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        match Config::get_config_path() {
            Some(path) => Config::load_from_path(&path),
            None => {
                debug!("No home directory, using default config");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file found at {:?}", path);
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut config = Config::parse(&content)
            .map_err(|e| AdbxError::Config(format!("{}: {}", path.display(), e)))?;
        config.bridge.program = expand_program(&config.bridge.program);
        debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".adbxconfig"))
    }

    /// Override the bridge executable (from the command line)
    pub fn with_program(mut self, program: impl AsRef<str>) -> Self {
        self.bridge.program = expand_program(program.as_ref());
        self
    }
}

fn expand_program(program: &str) -> String {
    shellexpand::tilde(program).into_owned()
}
