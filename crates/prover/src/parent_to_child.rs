use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use bhp_chainio::inputs::{ParentToChildVerifyParams, RootClaimParams};
use bhp_clients::ChainReader;
use bhp_primitives::ChainRole;
use tracing::{info, instrument};

use crate::{
    BlockHashProverHelper, ProofAssembler, ProverError, StorageSlotInput, TargetBlockHashInput,
    anchor::{self, RegistrySlotProof},
};

/// Static configuration of a [`ParentToChildProverHelper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentToChildConfig {
    /// The address of the `ParentToChildProver` on the home chain.
    pub prover: Address,
}

/// Input builder for the prover deployed on a parent chain, whose target is an OP-stack child.
///
/// The target block is the one the registry's anchor game commits to: its hash is recovered from
/// the game's root claim preimage.
#[derive(Debug, Clone)]
pub struct ParentToChildProverHelper<H, T> {
    config: ParentToChildConfig,
    home: ProofAssembler<H>,
    target: ProofAssembler<T>,
}

impl<H: ChainReader, T: ChainReader> ParentToChildProverHelper<H, T> {
    /// Create a new [`ParentToChildProverHelper`] from the parent (home) and child (target)
    /// chain readers.
    pub const fn new(config: ParentToChildConfig, home: H, target: T) -> Self {
        Self {
            config,
            home: ProofAssembler::new(ChainRole::Home, home),
            target: ProofAssembler::new(ChainRole::Target, target),
        }
    }
}

#[async_trait]
impl<H: ChainReader, T: ChainReader> BlockHashProverHelper for ParentToChildProverHelper<H, T> {
    #[instrument(skip_all, fields(direction = "parent-to-child", prover = %self.config.prover))]
    async fn build_input_for_get_target_block_hash(
        &self,
    ) -> Result<TargetBlockHashInput, ProverError> {
        let home_block_number = self.home.latest_block_number().await?;

        let registry =
            anchor::resolve_registry(&self.home, self.config.prover, home_block_number).await?;
        let game = anchor::resolve_anchor_game(&self.home, registry).await?;
        let anchored = anchor::read_l2_block_number(&self.home, game).await?;
        let preimage = anchor::build_root_claim_preimage(&self.target, &anchored).await?;
        anchor::check_root_claim(&self.home, &anchored, &preimage).await?;

        let input = RootClaimParams::from(preimage).encode_input();

        info!(
            home_block_number,
            l2_block_number = anchored.l2_block_number,
            target_block_hash = %preimage.latest_block_hash,
            "built getTargetBlockHash input"
        );
        Ok(TargetBlockHashInput { input, target_block_hash: preimage.latest_block_hash })
    }

    #[instrument(skip(self), fields(direction = "parent-to-child", prover = %self.config.prover))]
    async fn build_input_for_verify_target_block_hash(
        &self,
        home_block_hash: B256,
    ) -> Result<TargetBlockHashInput, ProverError> {
        let rlp_block_header = self.home.rlp_block_header(home_block_hash).await?;
        let home_block_number = self.home.resolve_block_number(home_block_hash.into()).await?;

        let registry =
            anchor::resolve_registry(&self.home, self.config.prover, home_block_number).await?;
        let RegistrySlotProof { game, proof: registry_proof } =
            anchor::prove_registry_slot(&self.home, registry).await?;
        let anchored = anchor::read_l2_block_number(&self.home, game).await?;
        let preimage = anchor::build_root_claim_preimage(&self.target, &anchored).await?;
        anchor::check_root_claim(&self.home, &anchored, &preimage).await?;

        let game_proof = anchor::prove_game_account(&self.home, &game).await?;
        let game_code = anchor::fetch_game_code(&self.home, &game).await?;

        let input = ParentToChildVerifyParams {
            rlpBlockHeader: rlp_block_header,
            asrAccountProof: registry_proof.rlp_account_proof,
            asrStorageProof: registry_proof.rlp_storage_proof,
            gameProxyAccountProof: game_proof.rlp_account_proof,
            gameProxyCode: game_code,
            version: preimage.version,
            stateRoot: preimage.state_root,
            messagePasserStorageRoot: preimage.message_passer_storage_root,
            latestBlockHash: preimage.latest_block_hash,
        }
        .encode_input();

        info!(
            home_block_number,
            game = %game.address,
            l2_block_number = anchored.l2_block_number,
            target_block_hash = %preimage.latest_block_hash,
            size = input.len(),
            "built verifyTargetBlockHash input"
        );
        Ok(TargetBlockHashInput { input, target_block_hash: preimage.latest_block_hash })
    }

    #[instrument(skip(self), fields(direction = "parent-to-child"))]
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
