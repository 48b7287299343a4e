//! Recursive subnet tree walk.
//!
//! Produces the pre-order (parent, lower half, upper half) flattening of the
//! binary subnet tree below a network. Each level returns its own rows and the
//! caller concatenates them, so no accumulator is shared between siblings.
//! Recursion depth is bounded by 30 levels (/0 down to /30).

use super::split::split_network;
use crate::error::SubnetError;
use crate::models::{describe_subnet, Ipv4Network, SubnetRecord, MAX_HOST_PREFIX};
use std::net::Ipv4Addr;

/// Trees bigger than this get a warning before the walk starts.
const LARGE_TREE_WARNING: u64 = (1 << 20) - 2;

/// Number of rows a walk from `prefix` down to `max_prefix` produces: 2^(k+1) - 2.
pub fn record_count(prefix: u8, max_prefix: u8) -> u64 {
    let max_prefix = max_prefix.min(MAX_HOST_PREFIX);
    if prefix >= max_prefix {
        return 0;
    }
    let levels = (max_prefix - prefix) as u32;
    (1u64 << (levels + 1)) - 2
}

/// Walk every subnet below `start_addr/start_prefix` down to `max_prefix`.
///
/// The start address is normalised to its network address. `max_prefix` above
/// 30 is clamped to 30, since /31 and /32 have no usable hosts to report.
/// A start prefix of 30 or more yields no rows.
pub fn walk_subnets(
    start_addr: Ipv4Addr,
    start_prefix: u8,
    max_prefix: u8,
) -> Result<Vec<SubnetRecord>, SubnetError> {
    let network = Ipv4Network::new(start_addr, start_prefix)?;

    let max_prefix = if max_prefix > MAX_HOST_PREFIX {
        log::warn!("max prefix /{max_prefix} clamped to /{MAX_HOST_PREFIX}");
        MAX_HOST_PREFIX
    } else {
        max_prefix
    };

    let expected = record_count(network.prefix(), max_prefix);
    if expected > LARGE_TREE_WARNING {
        log::warn!("{network} down to /{max_prefix} produces {expected} rows, this will take a while");
    }
    log::debug!("walk_subnets({network}, max=/{max_prefix}) expecting {expected} rows");

    walk_from(&network, 1, max_prefix)
}

fn walk_from(
    network: &Ipv4Network,
    depth: u8,
    max_prefix: u8,
) -> Result<Vec<SubnetRecord>, SubnetError> {
    if network.prefix() >= max_prefix {
        return Ok(Vec::new());
    }

    let (lower, upper) = split_network(network)?;
    let mut rows = Vec::new();
    for child in [lower, upper] {
        let details = describe_subnet(&child)?;
        rows.push(SubnetRecord::from_details(&details, depth));
        rows.extend(walk_from(&child, depth + 1, max_prefix)?);
    }
    Ok(rows)
}
