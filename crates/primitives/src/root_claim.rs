use alloy_primitives::{B256, Bytes, keccak256};
use alloy_sol_types::SolValue;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// The preimage of an OP-stack output root, i.e. the root claim of a dispute game.
///
/// It commits to an L2 block through its state root, the storage root of the
/// `L2ToL1MessagePasser` predeploy and the block hash itself.
///
/// Ref: <https://specs.optimism.io/protocol/proposals.html#l2-output-commitment-construction>
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(
    "RootClaimPreimage(version={}, state_root={}, message_passer_storage_root={}, latest_block_hash={})",
    version,
    state_root,
    message_passer_storage_root,
    latest_block_hash
)]
#[serde(rename_all = "camelCase")]
pub struct RootClaimPreimage {
    /// The output root version. Always zero.
    pub version: B256,
    /// The state root of the L2 block.
    pub state_root: B256,
    /// The storage root of the `L2ToL1MessagePasser` predeploy at the L2 block.
    pub message_passer_storage_root: B256,
    /// The hash of the L2 block.
    pub latest_block_hash: B256,
}

impl RootClaimPreimage {
    /// Length of the encoded preimage: four 32-byte words.
    pub const ENCODED_LENGTH: usize = 128;

    /// Builds a version 0 preimage.
    pub const fn new(
        state_root: B256,
        message_passer_storage_root: B256,
        latest_block_hash: B256,
    ) -> Self {
        Self { version: B256::ZERO, state_root, message_passer_storage_root, latest_block_hash }
    }

    /// ABI-encodes the preimage as `(bytes32, bytes32, bytes32, bytes32)`.
    pub fn encode(&self) -> Bytes {
        self.words().abi_encode_params().into()
    }

    const fn words(&self) -> (B256, B256, B256, B256) {
        (self.version, self.state_root, self.message_passer_storage_root, self.latest_block_hash)
    }

    /// Returns the output root, the value registered as the dispute game's root claim.
    pub fn hash(&self) -> B256 {
        keccak256(self.encode())
    }

    /// Decodes a version 0 preimage. Returns `None` on a wrong length or a non-zero version.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::ENCODED_LENGTH {
            return None;
        }

        let (version, state_root, message_passer_storage_root, latest_block_hash) =
            <(B256, B256, B256, B256)>::abi_decode_params(bytes).ok()?;
        if !version.is_zero() {
            return None;
        }

        Some(Self::new(state_root, message_passer_storage_root, latest_block_hash))
    }
}
