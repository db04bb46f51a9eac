//! Resolution of the OP-stack anchor game, as a pipeline of small steps.
//!
//! Every home chain read is pinned to the same home block number, carried along in the typed
//! state each step hands to the next. Target chain reads are pinned to the L2 block number the
//! anchor game attests.

use alloy_primitives::{Address, B256, BlockNumber, Bytes, U256};
use bhp_chainio::{
    optimism::{anchor_state_registry::IAnchorStateRegistry, dispute_game::IFaultDisputeGame},
    prover::IParentToChildProver,
};
use bhp_clients::ChainReader;
use bhp_primitives::{
    BlockRef,
    constants::{ACCOUNT_EXISTENCE_SLOT, ANCHOR_GAME_SLOT, L2_TO_L1_MESSAGE_PASSER},
    proof::ProofBundle,
    root_claim::RootClaimPreimage,
    summary::Summary,
};
use tracing::debug;

use crate::{ProofAssembler, ProverError};

/// The `AnchorStateRegistry` a prover reads from, at a pinned home block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    /// The registry address.
    pub address: Address,
    /// The home block every read is pinned to.
    pub home_block_number: BlockNumber,
}

/// The anchor game of a registry, at a pinned home block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorGame {
    /// The registry the game was read from.
    pub registry: Registry,
    /// The dispute game proxy address.
    pub address: Address,
}

impl AnchorGame {
    /// The home block every read is pinned to.
    pub const fn home_block_number(&self) -> BlockNumber {
        self.registry.home_block_number
    }
}

/// An anchor game together with the L2 block its root claim commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredBlock {
    /// The anchor game.
    pub game: AnchorGame,
    /// The L2 block number the game proposes an output root for.
    pub l2_block_number: BlockNumber,
}

/// The proof of a registry's anchor game slot, and the game it decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySlotProof {
    /// The game stored in the slot.
    pub game: AnchorGame,
    /// The account proof of the registry and the storage proof of the slot.
    pub proof: ProofBundle,
}

/// Reads the registry the prover is bound to.
pub async fn resolve_registry<C: ChainReader>(
    home: &ProofAssembler<C>,
    prover: Address,
    home_block_number: BlockNumber,
) -> Result<Registry, ProverError> {
    let address = home
        .read_contract(prover, IParentToChildProver::anchorStateRegistryCall {}, home_block_number)
        .await?;

    debug!(%prover, registry = %address, home_block_number, "resolved anchor state registry");
    Ok(Registry { address, home_block_number })
}

/// Reads the current anchor game of the registry.
pub async fn resolve_anchor_game<C: ChainReader>(
    home: &ProofAssembler<C>,
    registry: Registry,
) -> Result<AnchorGame, ProverError> {
    let address = home
        .read_contract(
            registry.address,
            IAnchorStateRegistry::anchorGameCall {},
            registry.home_block_number,
        )
        .await?;

    debug!(registry = %registry.address, game = %address, "resolved anchor game");
    Ok(AnchorGame { registry, address })
}

/// Reads the L2 block number the anchor game proposes an output root for.
pub async fn read_l2_block_number<C: ChainReader>(
    home: &ProofAssembler<C>,
    game: AnchorGame,
) -> Result<AnchoredBlock, ProverError> {
    let number = home
        .read_contract(
            game.address,
            IFaultDisputeGame::l2BlockNumberCall {},
            game.home_block_number(),
        )
        .await?;
    let l2_block_number =
        u64::try_from(number).map_err(|_| ProverError::L2BlockNumberOverflow(number))?;

    debug!(game = %game.address, l2_block_number, "resolved anchored L2 block");
    Ok(AnchoredBlock { game, l2_block_number })
}

/// Rebuilds the output root preimage of the anchored L2 block from the target chain.
pub async fn build_root_claim_preimage<C: ChainReader>(
    target: &ProofAssembler<C>,
    anchored: &AnchoredBlock,
) -> Result<RootClaimPreimage, ProverError> {
    let header = target.header_by_number(anchored.l2_block_number).await?;
    let message_passer = target
        .storage_and_account_proof(
            BlockRef::Number(anchored.l2_block_number),
            L2_TO_L1_MESSAGE_PASSER,
            U256::ZERO,
        )
        .await?;

    let preimage =
        RootClaimPreimage::new(header.inner.state_root, message_passer.storage_hash, header.hash);

    debug!(preimage = %preimage.summary(), "built root claim preimage");
    Ok(preimage)
}

/// Checks that the anchor game's root claim is the output root of the rebuilt preimage.
///
/// A mismatch means the target chain node is not on the chain the game attests to.
pub async fn check_root_claim<C: ChainReader>(
    home: &ProofAssembler<C>,
    anchored: &AnchoredBlock,
    preimage: &RootClaimPreimage,
) -> Result<(), ProverError> {
    let expected = home
        .read_contract(
            anchored.game.address,
            IFaultDisputeGame::rootClaimCall {},
            anchored.game.home_block_number(),
        )
        .await?;

    let actual = preimage.hash();
    if expected != actual {
        return Err(ProverError::RootClaimMismatch { expected, actual });
    }

    Ok(())
}

/// Proves the registry's anchor game slot and decodes the game address out of it.
pub async fn prove_registry_slot<C: ChainReader>(
    home: &ProofAssembler<C>,
    registry: Registry,
) -> Result<RegistrySlotProof, ProverError> {
    let proof = home
        .storage_and_account_proof(
            BlockRef::Number(registry.home_block_number),
            registry.address,
            ANCHOR_GAME_SLOT,
        )
        .await?;
    let address = decode_address_word(proof.slot_value)?;

    Ok(RegistrySlotProof { game: AnchorGame { registry, address }, proof })
}

/// Proves that the anchor game account exists at the pinned home block.
pub async fn prove_game_account<C: ChainReader>(
    home: &ProofAssembler<C>,
    game: &AnchorGame,
) -> Result<ProofBundle, ProverError> {
    home.storage_and_account_proof(
        BlockRef::Number(game.home_block_number()),
        game.address,
        ACCOUNT_EXISTENCE_SLOT,
    )
    .await
}

/// Fetches the code of the anchor game proxy. Fails if there is none.
pub async fn fetch_game_code<C: ChainReader>(
    home: &ProofAssembler<C>,
    game: &AnchorGame,
) -> Result<Bytes, ProverError> {
    let block_number = game.home_block_number();
    let code = home.code_at(game.address, block_number).await?;
    if code.is_empty() {
        return Err(ProverError::MissingContractCode { address: game.address, block_number });
    }

    Ok(code)
}

/// Interprets a storage word as an address. The upper 12 bytes must be zero.
pub fn decode_address_word(word: B256) -> Result<Address, ProverError> {
    if word[..12].iter().any(|byte| *byte != 0) {
        return Err(ProverError::InvalidAddressWord(word));
    }

    Ok(Address::from_word(word))
}
