use alloy_primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;
use bhp_chainio::inputs::ChildToParentVerifyParams;
use bhp_clients::ChainReader;
use bhp_primitives::{
    ChainRole,
    constants::{L1_BLOCK_HASH_SLOT, L1_BLOCK_PREDEPLOY},
};
use tracing::{info, instrument};

use crate::{
    BlockHashProverHelper, ProofAssembler, ProverError, StorageSlotInput, TargetBlockHashInput,
};

/// Input builder for the prover deployed on a child chain, whose target is its parent.
///
/// The child chain mirrors the latest parent block hash in the `L1Block` predeploy, so the
/// target block hash is a single storage slot of the home chain.
#[derive(Debug, Clone)]
pub struct ChildToParentProverHelper<H, T> {
    home: ProofAssembler<H>,
    target: ProofAssembler<T>,
}

impl<H: ChainReader, T: ChainReader> ChildToParentProverHelper<H, T> {
    /// Create a new [`ChildToParentProverHelper`] from the child (home) and parent (target)
    /// chain readers.
    pub const fn new(home: H, target: T) -> Self {
        Self {
            home: ProofAssembler::new(ChainRole::Home, home),
            target: ProofAssembler::new(ChainRole::Target, target),
        }
    }
}

#[async_trait]
impl<H: ChainReader, T: ChainReader> BlockHashProverHelper for ChildToParentProverHelper<H, T> {
    /// The home chain reads the predeploy natively, so the input is empty.
    #[instrument(skip_all, fields(direction = "child-to-parent"))]
    async fn build_input_for_get_target_block_hash(
        &self,
    ) -> Result<TargetBlockHashInput, ProverError> {
        let block_number = self.home.latest_block_number().await?;
        let target_block_hash =
            self.home.storage_at(L1_BLOCK_PREDEPLOY, L1_BLOCK_HASH_SLOT, block_number).await?;

        info!(block_number, %target_block_hash, "built getTargetBlockHash input");
        Ok(TargetBlockHashInput { input: Bytes::new(), target_block_hash })
    }

    #[instrument(skip(self), fields(direction = "child-to-parent"))]
    async fn build_input_for_verify_target_block_hash(
        &self,
        home_block_hash: B256,
    ) -> Result<TargetBlockHashInput, ProverError> {
        let rlp_block_header = self.home.rlp_block_header(home_block_hash).await?;
        let bundle = self
            .home
            .storage_and_account_proof(
                home_block_hash.into(),
                L1_BLOCK_PREDEPLOY,
                L1_BLOCK_HASH_SLOT,
            )
            .await?;

        let input = ChildToParentVerifyParams {
            rlpBlockHeader: rlp_block_header,
            rlpAccountProof: bundle.rlp_account_proof,
            rlpStorageProof: bundle.rlp_storage_proof,
        }
        .encode_input();

        info!(
            target_block_hash = %bundle.slot_value,
            size = input.len(),
            "built verifyTargetBlockHash input"
        );
        Ok(TargetBlockHashInput { input, target_block_hash: bundle.slot_value })
    }

    #[instrument(skip(self), fields(direction = "child-to-parent"))]
    async fn build_input_for_verify_storage_slot(
        &self,
        target_block_hash: B256,
        account: Address,
        slot: U256,
    ) -> Result<StorageSlotInput, ProverError> {
        let output = self.target.storage_slot_input(target_block_hash, account, slot).await?;

        info!(slot_value = %output.slot_value, "built verifyStorageSlot input");
        Ok(output)
    }
}
