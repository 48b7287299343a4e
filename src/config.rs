//! Runtime settings read from the environment (a `.env` file is loaded first by the binary).

use crate::error::SubnetError;
use crate::models::MAX_HOST_PREFIX;
use std::collections::HashMap;

pub const ENV_MAX_PREFIX: &str = "SUBNET_TREE_MAX_PREFIX";
pub const ENV_OUTPUT: &str = "SUBNET_TREE_OUTPUT";
pub const ENV_INDENT: &str = "SUBNET_TREE_INDENT";
pub const ENV_PRINT: &str = "SUBNET_TREE_PRINT";

pub const DEFAULT_OUTPUT: &str = "subnets.csv";
/// Spaces per tree level in the Subnet ID column.
pub const DEFAULT_INDENT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest prefix to decompose to, never above /30.
    pub max_prefix: u8,
    /// Destination used when none is given on the command line.
    pub default_output: String,
    pub indent_width: usize,
    /// Also print the tree to the terminal.
    pub print_tree: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_prefix: MAX_HOST_PREFIX,
            default_output: DEFAULT_OUTPUT.to_string(),
            indent_width: DEFAULT_INDENT,
            print_tree: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, SubnetError> {
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("SUBNET_TREE_"))
            .collect();
        Config::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Config, SubnetError> {
        let mut config = Config::default();

        if let Some(value) = vars.get(ENV_MAX_PREFIX) {
            let max_prefix: u8 = value.trim().parse().map_err(|_| invalid(ENV_MAX_PREFIX, value))?;
            if max_prefix > MAX_HOST_PREFIX {
                log::warn!("{ENV_MAX_PREFIX}={max_prefix} clamped to {MAX_HOST_PREFIX}");
            }
            config.max_prefix = max_prefix.min(MAX_HOST_PREFIX);
        }
        if let Some(value) = vars.get(ENV_OUTPUT) {
            if value.trim().is_empty() {
                return Err(invalid(ENV_OUTPUT, value));
            }
            config.default_output = value.trim().to_string();
        }
        if let Some(value) = vars.get(ENV_INDENT) {
            config.indent_width = value.trim().parse().map_err(|_| invalid(ENV_INDENT, value))?;
        }
        if let Some(value) = vars.get(ENV_PRINT) {
            config.print_tree = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(invalid(ENV_PRINT, value)),
            };
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str) -> SubnetError {
    SubnetError::InvalidConfig {
        key,
        value: value.to_string(),
    }
}
