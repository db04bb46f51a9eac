//! ABI schemas of the inputs consumed by the on-chain block hash provers.
//!
//! Every input is encoded as a list of function parameters (no outer tuple offset), matching
//! what the provers `abi.decode` from their `bytes input` argument.

use alloy_primitives::Bytes;
use alloy_sol_types::{SolValue, sol};
use bhp_primitives::root_claim::RootClaimPreimage;

sol! {
    /// Input of `verifyStorageSlot`, in either direction.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct VerifyStorageSlotParams {
        bytes rlpBlockHeader;
        address account;
        uint256 slot;
        bytes rlpAccountProof;
        bytes rlpStorageProof;
    }

    /// Input of `ChildToParentProver.verifyTargetBlockHash`: the home header and the proof of
    /// the `L1Block` predeploy's hash slot.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct ChildToParentVerifyParams {
        bytes rlpBlockHeader;
        bytes rlpAccountProof;
        bytes rlpStorageProof;
    }

    /// Input of `ParentToChildProver.verifyTargetBlockHash`.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct ParentToChildVerifyParams {
        bytes rlpBlockHeader;
        bytes asrAccountProof;
        bytes asrStorageProof;
        bytes gameProxyAccountProof;
        bytes gameProxyCode;
        bytes32 version;
        bytes32 stateRoot;
        bytes32 messagePasserStorageRoot;
        bytes32 latestBlockHash;
    }

    /// Input of `ParentToChildProver.getTargetBlockHash`: the anchor game's root claim preimage.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct RootClaimParams {
        bytes32 version;
        bytes32 stateRoot;
        bytes32 messagePasserStorageRoot;
        bytes32 latestBlockHash;
    }
}

macro_rules! impl_encode_input {
    ($($ty:ty),+) => {$(
        impl $ty {
            /// ABI-encodes the input as function parameters.
            pub fn encode_input(&self) -> Bytes {
                self.abi_encode_params().into()
            }
        }
    )+};
}

impl_encode_input!(
    VerifyStorageSlotParams,
    ChildToParentVerifyParams,
    ParentToChildVerifyParams,
    RootClaimParams
);

impl From<RootClaimPreimage> for RootClaimParams {
    fn from(preimage: RootClaimPreimage) -> Self {
        Self {
            version: preimage.version,
            stateRoot: preimage.state_root,
            messagePasserStorageRoot: preimage.message_passer_storage_root,
            latestBlockHash: preimage.latest_block_hash,
        }
    }
}

impl From<RootClaimParams> for RootClaimPreimage {
    fn from(params: RootClaimParams) -> Self {
        Self {
            version: params.version,
            state_root: params.stateRoot,
            message_passer_storage_root: params.messagePasserStorageRoot,
            latest_block_hash: params.latestBlockHash,
        }
    }
}
