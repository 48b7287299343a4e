//! Enumerate every subnet below an IPv4 network, one prefix bit at a time,
//! and report the tree as an indented table.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{describe_subnet, Ipv4Network, SubnetDetails, SubnetRecord};
pub use processing::{resolve_multiple, split_network, walk_subnets, Resolution};

use config::Config;
use std::path::Path;

/// Resolve `ips` and save the report to `output`, optionally echoing it to the terminal.
pub fn subnet_and_save(ips: &[String], output: &Path, config: &Config) -> Result<Resolution, SubnetError> {
    let resolution = resolve_multiple(ips, config.max_prefix)?;

    if config.print_tree {
        let mut writer = output::TerminalWriter::stdout(config.indent_width);
        if let Err(e) = output::render_report(&resolution, &mut writer) {
            log::warn!("terminal output failed: {e}");
        }
    }

    output::save_report(&resolution, output, config.indent_width)?;
    Ok(resolution)
}
