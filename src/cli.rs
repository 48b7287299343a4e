//! Command line arguments: `IP/LEN[,IP/LEN...] [FILENAME]`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ipv4-subnet-tree", version)]
#[command(about = "Resolve every subnet of the given IPv4 networks and save them as an indented table")]
#[command(after_help = "If FILENAME is not given, will write to a default file in the current directory.\n\
                        A FILENAME ending in .json writes JSON, anything else writes CSV.")]
pub struct Args {
    /// Comma separated networks, e.g. 192.168.0.0/24,201.100.20.0/24
    #[arg(
        value_name = "IP_ADDRESS/SubnetMaskLength",
        value_delimiter = ',',
        action = ArgAction::Set,
        num_args = 1,
        required = true
    )]
    pub ips: Vec<String>,

    /// Report destination
    #[arg(value_name = "FILENAME")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Networks in the order given, whitespace trimmed and empty entries dropped.
    pub fn networks(&self) -> Vec<String> {
        self.ips
            .iter()
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .collect()
    }

    pub fn output_or(&self, default_output: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output))
    }
}
