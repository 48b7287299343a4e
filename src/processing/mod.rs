//! Subnet decomposition logic.
//!
//! - [`split`] - splitting a network into its two halves
//! - [`tree`] - recursive pre-order walk of the subnet tree
//! - [`resolve`] - batch resolution of user supplied networks

mod resolve;
mod split;
mod tree;

// Re-export public functions
pub use resolve::{resolve_multiple, Resolution, ResolutionRequest, ResolvedNetwork};
pub use split::split_network;
pub use tree::{record_count, walk_subnets};
