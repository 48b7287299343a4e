//! IPv4 address arithmetic and the canonical [`Ipv4Network`] type.
//!
//! All calculations are plain bit operations on the 32-bit address.

use crate::error::SubnetError;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Longest prefix that still has usable hosts (/30 = 2 hosts).
pub const MAX_HOST_PREFIX: u8 = MAX_LENGTH - 2;

/// Separator between the octets of a binary address, kept distinct from '.'
pub const BINARY_SEPARATOR: &str = "-";

fn prefix_too_long(len: u8) -> SubnetError {
    SubnetError::InvalidPrefix {
        input: format!("/{len}"),
        reason: "network length is too long",
    }
}

/// A signed or unsigned run of digits, whatever its magnitude.
fn is_numeric(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_tree::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(prefix_too_long(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of usable hosts in a subnet: every address except network and broadcast.
///
/// /31 and /32 have no usable hosts in this model and are rejected.
pub fn num_usable_hosts(len: u8) -> Result<u64, SubnetError> {
    if len > MAX_HOST_PREFIX {
        Err(SubnetError::InvalidPrefix {
            input: format!("/{len}"),
            reason: "no usable hosts beyond /30",
        })
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// Render an address as four zero padded 8-bit groups, most significant first.
///
/// ```
/// use std::net::Ipv4Addr;
/// use ipv4_subnet_tree::models::binary_form;
/// assert_eq!(
///     binary_form(Ipv4Addr::new(192, 168, 0, 1)),
///     "11000000-10101000-00000000-00000001"
/// );
/// ```
pub fn binary_form(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(BINARY_SEPARATOR)
}

/// Same as [`binary_form`] but for textual input: a dotted quad or a plain
/// 32-bit integer.
pub fn binary_form_str(input: &str) -> Result<String, SubnetError> {
    let input = input.trim();
    let addr = match Ipv4Addr::from_str(input) {
        Ok(addr) => addr,
        Err(_) => input
            .parse::<u32>()
            .map(Ipv4Addr::from)
            .map_err(|_| SubnetError::InvalidAddress {
                input: input.to_string(),
            })?,
    };
    Ok(binary_form(addr))
}

/// Parse the output of [`binary_form`] back into an address.
pub fn parse_binary_form(input: &str) -> Result<Ipv4Addr, SubnetError> {
    let invalid = || SubnetError::InvalidAddress {
        input: input.to_string(),
    };

    let groups: Vec<&str> = input.split(BINARY_SEPARATOR).collect();
    if groups.len() != 4 {
        return Err(invalid());
    }
    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(groups) {
        if group.len() != 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(invalid());
        }
        *octet = u8::from_str_radix(group, 2).map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// An IPv4 network in canonical form: host bits of `addr` are always zero.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Network {
    /// Build a network, zeroing any host bits set in `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Network, SubnetError> {
        let addr = cut_addr(addr, prefix)?;
        Ok(Ipv4Network { addr, prefix })
    }

    /// Parse "address/prefix" (e.g. "10.0.0.0/24"). Host bits are zeroed.
    pub fn from_cidr(addr_cidr: &str) -> Result<Ipv4Network, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::InvalidInput {
                input: addr_cidr.to_string(),
                reason: "expected IPADDRESS/PREFIXLENGTH",
            });
        }
        let addr = parts[0]
            .trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| SubnetError::InvalidAddress {
                input: addr_cidr.to_string(),
            })?;

        let prefix = parts[1].trim();
        if !is_numeric(prefix) {
            return Err(SubnetError::InvalidInput {
                input: addr_cidr.to_string(),
                reason: "prefix length is not a number",
            });
        }
        match prefix.parse::<u8>() {
            Ok(len) if len <= MAX_LENGTH => Ipv4Network::new(addr, len),
            _ => Err(SubnetError::InvalidPrefix {
                input: addr_cidr.to_string(),
                reason: "prefix length must be 0-32",
            }),
        }
    }

    /// The network address (all host bits zero).
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Ipv4Addr {
        // prefix is validated on construction
        Ipv4Addr::from(get_cidr_mask(self.prefix).unwrap_or(u32::MAX))
    }

    /// The highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !u32::from(self.netmask()))
    }

    /// Total number of addresses covered, including network and broadcast.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.addr && ip <= self.broadcast()
    }
}

impl FromStr for Ipv4Network {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Network::from_cidr(s)
    }
}

impl std::fmt::Display for Ipv4Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Network {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Network::from_cidr(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);

        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));

        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_num_usable_hosts() {
        assert_eq!(num_usable_hosts(0).unwrap(), 4294967294); // 2^32 - 2
        assert_eq!(num_usable_hosts(24).unwrap(), 254);
        assert_eq!(num_usable_hosts(29).unwrap(), 6);
        assert_eq!(num_usable_hosts(30).unwrap(), 2);
        assert!(num_usable_hosts(31).is_err());
        assert!(num_usable_hosts(32).is_err());
    }

    #[test]
    fn test_binary_form() {
        assert_eq!(
            binary_form(Ipv4Addr::new(255, 255, 255, 0)),
            "11111111-11111111-11111111-00000000"
        );
        assert_eq!(
            binary_form(Ipv4Addr::new(0, 0, 0, 0)),
            "00000000-00000000-00000000-00000000"
        );
        assert_eq!(
            binary_form_str("10.1.2.3").unwrap(),
            "00001010-00000001-00000010-00000011"
        );
        // 3232235521 == 192.168.0.1
        assert_eq!(
            binary_form_str("3232235521").unwrap(),
            binary_form(Ipv4Addr::new(192, 168, 0, 1))
        );
        assert!(binary_form_str("4294967296").is_err());
        assert!(binary_form_str("999.1.1.1").is_err());
        assert!(binary_form_str("hello").is_err());
    }

    #[test]
    fn test_parse_binary_form() {
        for ip in [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(10, 20, 30, 40),
            Ipv4Addr::new(192, 168, 128, 1),
            Ipv4Addr::new(255, 255, 255, 255),
        ] {
            assert_eq!(parse_binary_form(&binary_form(ip)).unwrap(), ip);
        }
        assert!(parse_binary_form("11111111.11111111.11111111.00000000").is_err());
        assert!(parse_binary_form("1111111-11111111-11111111-00000000").is_err());
        assert!(parse_binary_form("11111112-11111111-11111111-00000000").is_err());
        assert!(parse_binary_form("11111111-11111111-11111111").is_err());
    }

    #[test]
    fn test_network_is_canonical() {
        let net = Ipv4Network::from_cidr("10.2.3.4/16").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(net.prefix(), 16);
        assert_eq!(net.to_string(), "10.2.0.0/16");
        assert_eq!(net, Ipv4Network::from_cidr(" 10.2.0.0/16 ").unwrap());
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(net.broadcast(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(net.size(), 65536);
        assert!(net.contains(Ipv4Addr::new(10, 2, 200, 1)));
        assert!(!net.contains(Ipv4Addr::new(10, 3, 0, 0)));
    }

    #[test]
    fn test_network_parse_errors() {
        assert!(matches!(
            Ipv4Network::from_cidr("999.1.1.1/24"),
            Err(SubnetError::InvalidAddress { .. })
        ));
        assert!(matches!(
            Ipv4Network::from_cidr("10.0.0.0"),
            Err(SubnetError::InvalidInput { .. })
        ));
        assert!(matches!(
            Ipv4Network::from_cidr("10.0.0.0/abc"),
            Err(SubnetError::InvalidInput { .. })
        ));
        assert!(Ipv4Network::from_cidr("10.0.0.0/32").is_ok());
        assert!(Ipv4Network::from_cidr("10.0.0.0/+8").is_ok());
    }

    #[test]
    fn test_network_out_of_range_prefix() {
        for cidr in ["10.0.0.0/33", "10.0.0.0/256", "10.0.0.0/4294967296", "10.0.0.0/-1"] {
            match Ipv4Network::from_cidr(cidr) {
                Err(SubnetError::InvalidPrefix { input, .. }) => assert_eq!(input, cidr),
                other => panic!("{cidr}: expected InvalidPrefix, got {other:?}"),
            }
        }
        for cidr in ["10.0.0.0/", "10.0.0.0/x1", "10.0.0.0/-", "10.0.0.0/2 4"] {
            assert!(
                matches!(
                    Ipv4Network::from_cidr(cidr),
                    Err(SubnetError::InvalidInput { .. })
                ),
                "{cidr}"
            );
        }
    }

    #[test]
    fn test_network_serde() {
        let net = Ipv4Network::from_cidr("172.16.0.0/12").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
        let back: Ipv4Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Ipv4Network>("\"172.16.0.0\"").is_err());
    }
}
