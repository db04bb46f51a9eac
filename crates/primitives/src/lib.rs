#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Primitive types, encoders and constants for building block hash prover inputs.

use alloy_primitives::{B256, BlockNumber};
use derive_more::derive::{Display, From};
use serde::{Deserialize, Serialize};

/// Well-known predeploy addresses and storage slots.
pub mod constants;

/// Canonical block header encoding.
pub mod header;

/// Account and storage proof bundles.
pub mod proof;

/// Transport retries utilities
pub mod retries;

/// The OP-stack output root preimage.
pub mod root_claim;

/// Utility for summarizing objects into a string for logging purposes.
pub mod summary;

/// The role a chain plays in a derivation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainRole {
    /// The chain on which a derivation begins and whose state is read first.
    #[display("home")]
    Home,
    /// The chain whose block hash is being proven.
    #[display("target")]
    Target,
}

/// A reference to a block, either by hash or by number.
///
/// Never a tag like `latest`: every read in a derivation must be pinned to a concrete block.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, From)]
pub enum BlockRef {
    /// A block hash.
    #[display("{_0}")]
    Hash(B256),
    /// A block number.
    #[display("#{_0}")]
    Number(BlockNumber),
}

impl BlockRef {
    /// Returns the block number, if this reference already is one.
    pub const fn as_number(&self) -> Option<BlockNumber> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Hash(_) => None,
        }
    }
}
