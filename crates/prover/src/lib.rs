#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Block hash prover input builders
//!
//! Each builder produces the byte inputs an on-chain block hash prover consumes to:
//! - Read a target chain block hash from the home chain's current state
//! - Verify a target chain block hash against a given home chain block
//! - Verify a storage slot of a target chain account against a given target block

/// Per-chain header and proof fetching.
mod assembler;
pub use assembler::ProofAssembler;

/// The anchor game resolution pipeline of the parent-to-child direction.
pub mod anchor;

/// Input builder for a child chain proving its parent.
mod child_to_parent;
pub use child_to_parent::ChildToParentProverHelper;

/// Input builder for a parent chain proving an OP-stack child.
mod parent_to_child;
pub use parent_to_child::{ParentToChildConfig, ParentToChildProverHelper};

mod error;
pub use error::ProverError;

mod traits;
pub use traits::{BlockHashProverHelper, StorageSlotInput, TargetBlockHashInput};

#[cfg(test)]
mod test_utils;
