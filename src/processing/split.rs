//! Splitting a network into its two halves.

use crate::error::SubnetError;
use crate::models::{Ipv4Network, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Split `network` into its lower and upper half, each one bit longer.
///
/// The lower half keeps the newly significant bit at 0, the upper half sets it.
/// /31 and /32 are never split.
pub fn split_network(network: &Ipv4Network) -> Result<(Ipv4Network, Ipv4Network), SubnetError> {
    if network.prefix() >= MAX_LENGTH - 1 {
        return Err(SubnetError::InvalidPrefix {
            input: network.to_string(),
            reason: "cannot split a /31 or /32",
        });
    }
    let child_prefix = network.prefix() + 1;
    let half = 1u32 << (MAX_LENGTH - child_prefix);

    let lower = Ipv4Network::new(network.addr(), child_prefix)?;
    let upper = Ipv4Network::new(Ipv4Addr::from(u32::from(network.addr()) | half), child_prefix)?;

    log::trace!("split {network} -> {lower} + {upper}");
    Ok((lower, upper))
}
