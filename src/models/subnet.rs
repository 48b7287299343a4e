//! Subnet detail view and the report record produced by the tree walk.

use super::ipv4::{binary_form, num_usable_hosts, Ipv4Network, MAX_HOST_PREFIX};
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from a network that has usable hosts (prefix 0-30).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDetails {
    pub network: Ipv4Network,
    pub subnet_id: Ipv4Addr,
    pub subnet_id_bin: String,
    pub netmask: Ipv4Addr,
    pub netmask_bin: String,
    pub broadcast: Ipv4Addr,
    pub broadcast_bin: String,
    pub first_host: Ipv4Addr,
    pub first_host_bin: String,
    pub last_host: Ipv4Addr,
    pub last_host_bin: String,
    pub usable_hosts: u64,
}

/// Compute the details of `network`.
///
/// Fails with [`SubnetError::InvalidPrefix`] for /31 and /32, which have no
/// usable hosts.
pub fn describe_subnet(network: &Ipv4Network) -> Result<SubnetDetails, SubnetError> {
    if network.prefix() > MAX_HOST_PREFIX {
        return Err(SubnetError::InvalidPrefix {
            input: network.to_string(),
            reason: "no usable hosts beyond /30",
        });
    }
    let usable_hosts = num_usable_hosts(network.prefix())?;

    let subnet_id = network.addr();
    let netmask = network.netmask();
    let broadcast = network.broadcast();
    let first_host = Ipv4Addr::from(u32::from(subnet_id) + 1);
    let last_host = Ipv4Addr::from(u32::from(broadcast) - 1);

    Ok(SubnetDetails {
        network: *network,
        subnet_id,
        subnet_id_bin: binary_form(subnet_id),
        netmask,
        netmask_bin: binary_form(netmask),
        broadcast,
        broadcast_bin: binary_form(broadcast),
        first_host,
        first_host_bin: binary_form(first_host),
        last_host,
        last_host_bin: binary_form(last_host),
        usable_hosts,
    })
}

/// One row of the subnet tree. `depth` starts at 1 for the children of the
/// requested network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    pub depth: u8,
    pub subnet_id: Ipv4Addr,
    pub prefix: u8,
    pub netmask: Ipv4Addr,
    pub usable_hosts: u64,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
}

impl SubnetRecord {
    pub fn from_details(details: &SubnetDetails, depth: u8) -> SubnetRecord {
        SubnetRecord {
            depth,
            subnet_id: details.subnet_id,
            prefix: details.network.prefix(),
            netmask: details.netmask,
            usable_hosts: details.usable_hosts,
            first_host: details.first_host,
            last_host: details.last_host,
        }
    }

    /// "address/prefix" form used in the Subnet ID column.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.subnet_id, self.prefix)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_describe_subnet_relations(bits: u32, prefix in 0u8..=30) {
            let net = Ipv4Network::new(Ipv4Addr::from(bits), prefix).unwrap();
            let d = describe_subnet(&net).unwrap();
            let host_bits = (1u64 << (32 - prefix)) - 1;

            prop_assert_eq!(d.usable_hosts, host_bits - 1);
            prop_assert_eq!(u32::from(d.broadcast) as u64, u32::from(d.subnet_id) as u64 | host_bits);
            prop_assert_eq!(u32::from(d.first_host), u32::from(d.subnet_id) + 1);
            prop_assert_eq!(u32::from(d.last_host), u32::from(d.broadcast) - 1);
            prop_assert_eq!(u32::from(d.netmask) as u64, !host_bits & 0xFFFF_FFFF);
        }

        #[test]
        fn test_describe_subnet_rejects_hostless(bits: u32, prefix in 31u8..=32) {
            let net = Ipv4Network::new(Ipv4Addr::from(bits), prefix).unwrap();
            prop_assert!(describe_subnet(&net).is_err());
        }
    }
}
