use alloy_primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;
use serde::Serialize;

use crate::ProverError;

/// The input of `getTargetBlockHash` or `verifyTargetBlockHash`, along with the target block
/// hash the prover is expected to return for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetBlockHashInput {
    /// The ABI-encoded prover input.
    pub input: Bytes,
    /// The target block hash.
    pub target_block_hash: B256,
}

/// The input of `verifyStorageSlot`, along with the slot value the prover is expected to return
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSlotInput {
    /// The ABI-encoded prover input.
    pub input: Bytes,
    /// The value of the slot, left-padded to 32 bytes.
    pub slot_value: B256,
}

/// Builds the inputs of one on-chain block hash prover, for a fixed pair of home and target
/// chains.
#[async_trait]
pub trait BlockHashProverHelper: Send + Sync {
    /// Builds the input of `getTargetBlockHash`, evaluated at the latest home block.
    async fn build_input_for_get_target_block_hash(
        &self,
    ) -> Result<TargetBlockHashInput, ProverError>;

    /// Builds the input of `verifyTargetBlockHash` against the given home block.
    async fn build_input_for_verify_target_block_hash(
        &self,
        home_block_hash: B256,
    ) -> Result<TargetBlockHashInput, ProverError>;

    /// Builds the input of `verifyStorageSlot` for `slot` of `account` at the given target block.
    async fn build_input_for_verify_storage_slot(
        &self,
        target_block_hash: B256,
        account: Address,
        slot: U256,
    ) -> Result<StorageSlotInput, ProverError>;
}
