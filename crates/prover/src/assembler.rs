use alloy::rpc::types::Header;
use alloy_primitives::{Address, B256, BlockNumber, Bytes, U256};
use alloy_sol_types::SolCall;
use bhp_chainio::inputs::VerifyStorageSlotParams;
use bhp_clients::ChainReader;
use bhp_primitives::{
    BlockRef, ChainRole, header::canonical_header_checked, proof::ProofBundle, summary::Summary,
};
use tracing::debug;

use crate::{ProverError, StorageSlotInput};

/// Fetches headers and proofs from a single chain and turns them into the byte forms the
/// on-chain verifiers consume.
///
/// Holds no state besides its reader: identical calls repeat the same round trips.
#[derive(Debug, Clone)]
pub struct ProofAssembler<C> {
    role: ChainRole,
    reader: C,
}

impl<C: ChainReader> ProofAssembler<C> {
    /// Create a new [`ProofAssembler`] reading from the given chain.
    pub const fn new(role: ChainRole, reader: C) -> Self {
        Self { role, reader }
    }

    const fn not_found(&self, block: BlockRef) -> ProverError {
        ProverError::BlockNotFound { chain: self.role, block }
    }

    /// Returns the number of the latest block of the chain.
    pub async fn latest_block_number(&self) -> Result<BlockNumber, ProverError> {
        let number = self.reader.latest_block_number().await?;
        debug!(chain = %self.role, block_number = number, "resolved latest block");

        Ok(number)
    }

    /// Returns the canonical RLP encoding of the header of the block with the given hash.
    pub async fn rlp_block_header(&self, block_hash: B256) -> Result<Bytes, ProverError> {
        let raw = self
            .reader
            .raw_header(block_hash)
            .await?
            .ok_or_else(|| self.not_found(block_hash.into()))?;

        let encoded = canonical_header_checked(&raw)?;
        debug!(chain = %self.role, %block_hash, size = encoded.len(), "encoded block header");

        Ok(encoded)
    }

    /// Returns the typed header of the given block.
    pub async fn header(&self, block: BlockRef) -> Result<Header, ProverError> {
        self.reader.header(block).await?.ok_or_else(|| self.not_found(block))
    }

    /// Returns the typed header of the block with the given number.
    pub async fn header_by_number(&self, block_number: BlockNumber) -> Result<Header, ProverError> {
        self.header(BlockRef::Number(block_number)).await
    }

    /// Resolves a block reference to a block number. Numbers are returned as-is.
    pub async fn resolve_block_number(&self, block: BlockRef) -> Result<BlockNumber, ProverError> {
        match block {
            BlockRef::Number(number) => Ok(number),
            BlockRef::Hash(_) => Ok(self.header(block).await?.inner.number),
        }
    }

    /// Fetches the account proof of `account` and the storage proof of `slot` at the given block.
    pub async fn storage_and_account_proof(
        &self,
        block: BlockRef,
        account: Address,
        slot: U256,
    ) -> Result<ProofBundle, ProverError> {
        let block_number = self.resolve_block_number(block).await?;

        let response =
            self.reader.account_proof(account, vec![B256::from(slot)], block_number).await?;
        let bundle = ProofBundle::from_response(response)
            .ok_or(ProverError::MissingStorageProof { account })?;

        debug!(
            chain = %self.role,
            block_number,
            %account,
            %slot,
            bundle = %bundle.summary(),
            "fetched storage and account proof"
        );

        Ok(bundle)
    }

    /// Returns the code of `address` at the given block. Empty if there is none.
    pub async fn code_at(
        &self,
        address: Address,
        block_number: BlockNumber,
    ) -> Result<Bytes, ProverError> {
        let code = self.reader.code_at(address, block_number).await?;
        debug!(chain = %self.role, block_number, %address, size = code.len(), "fetched code");

        Ok(code)
    }

    /// Returns the raw word stored at `slot` of `address` at the given block.
    pub async fn storage_at(
        &self,
        address: Address,
        slot: U256,
        block_number: BlockNumber,
    ) -> Result<B256, ProverError> {
        let word = self.reader.storage_at(address, slot, block_number).await?;
        debug!(chain = %self.role, block_number, %address, %slot, %word, "read storage slot");

        Ok(word)
    }

    /// Executes a typed view call against `to` at the given block.
    pub async fn read_contract<T>(
        &self,
        to: Address,
        call: T,
        block_number: BlockNumber,
    ) -> Result<T::Return, ProverError>
    where
        T: SolCall + Send,
    {
        debug!(chain = %self.role, block_number, %to, signature = T::SIGNATURE, "calling contract");
        Ok(self.reader.read_contract(to, call, block_number).await?)
    }

    /// Builds the input of `verifyStorageSlot` for `slot` of `account` at the given block.
    ///
    /// The shape is the same in both directions: the block is always on the chain this assembler
    /// reads from.
    pub async fn storage_slot_input(
        &self,
        block_hash: B256,
        account: Address,
        slot: U256,
    ) -> Result<StorageSlotInput, ProverError> {
        let rlp_block_header = self.rlp_block_header(block_hash).await?;
        let bundle = self.storage_and_account_proof(block_hash.into(), account, slot).await?;

        let input = VerifyStorageSlotParams {
            rlpBlockHeader: rlp_block_header,
            account,
            slot,
            rlpAccountProof: bundle.rlp_account_proof,
            rlpStorageProof: bundle.rlp_storage_proof,
        }
        .encode_input();

        Ok(StorageSlotInput { input, slot_value: bundle.slot_value })
    }
}
