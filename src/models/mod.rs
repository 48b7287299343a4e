//! Domain models for the subnet tree.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`Ipv4Network`] - canonical IPv4 network (address + prefix length)
//! - [`SubnetDetails`] - derived view of a network with usable hosts
//! - [`SubnetRecord`] - one row of the subnet tree

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    binary_form, binary_form_str, broadcast_addr, cut_addr, get_cidr_mask, num_usable_hosts,
    parse_binary_form, Ipv4Network, BINARY_SEPARATOR, MAX_HOST_PREFIX, MAX_LENGTH,
};
pub use subnet::{describe_subnet, SubnetDetails, SubnetRecord};
