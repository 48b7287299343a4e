//! Resolving a batch of "address/prefix" inputs into subnet trees.

use super::tree::walk_subnets;
use crate::error::SubnetError;
use crate::models::{Ipv4Network, SubnetRecord};
use serde::Serialize;

/// One parsed input network, keeping the text the user typed for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub input: String,
    pub network: Ipv4Network,
}

impl ResolutionRequest {
    /// Parse an "IPADDRESS/PREFIXLENGTH" token. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<ResolutionRequest, SubnetError> {
        let input = input.trim();
        let network = Ipv4Network::from_cidr(input)?;
        Ok(ResolutionRequest {
            input: input.to_string(),
            network,
        })
    }
}

/// A resolved input: the original text and its subnet rows.
#[derive(Serialize, Debug, Clone)]
pub struct ResolvedNetwork {
    pub input: String,
    pub network: Ipv4Network,
    pub subnets: Vec<SubnetRecord>,
}

/// Ordered result of [`resolve_multiple`], in input order.
///
/// Kept as a list rather than a map: repeated inputs each keep their own entry.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Resolution {
    pub max_prefix: u8,
    pub networks: Vec<ResolvedNetwork>,
}

impl Resolution {
    /// Rows for the first entry whose input text matches.
    pub fn get(&self, input: &str) -> Option<&[SubnetRecord]> {
        self.networks
            .iter()
            .find(|n| n.input == input.trim())
            .map(|n| n.subnets.as_slice())
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Total number of subnet rows over all inputs.
    pub fn record_count(&self) -> usize {
        self.networks.iter().map(|n| n.subnets.len()).sum()
    }
}

/// Resolve every input, in order, down to `max_prefix`.
///
/// All inputs are parsed before any tree is built, and the first bad entry
/// fails the whole call: no partial result is returned.
pub fn resolve_multiple<S: AsRef<str>>(
    inputs: &[S],
    max_prefix: u8,
) -> Result<Resolution, SubnetError> {
    log::info!("#Start resolve_multiple() {} input(s), max /{}", inputs.len(), max_prefix);

    let requests = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let input: &str = input.as_ref();
            ResolutionRequest::parse(input).map_err(|e| {
                log::error!("input #{} '{}' rejected: {}", i + 1, input, e);
                e
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut resolution = Resolution {
        max_prefix,
        networks: Vec::with_capacity(requests.len()),
    };
    for request in requests {
        let subnets = walk_subnets(
            request.network.addr(),
            request.network.prefix(),
            max_prefix,
        )?;
        log::info!("{} -> {} subnets", request.input, subnets.len());
        resolution.networks.push(ResolvedNetwork {
            input: request.input,
            network: request.network,
            subnets,
        });
    }

    Ok(resolution)
}
