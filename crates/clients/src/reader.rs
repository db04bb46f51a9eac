use alloy::{
    rpc::types::{EIP1186AccountProofResponse, Header},
    transports::{TransportErrorKind, TransportResult},
};
use alloy_primitives::{Address, B256, BlockNumber, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use bhp_primitives::{BlockRef, header::RawHeader};

/// Read-only access to the state of a single chain.
///
/// Every state read takes an explicit block number: a derivation must observe one consistent
/// snapshot of each chain, so implementors must never fall back to `latest` on their own.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Returns the number of the most recent block.
    async fn latest_block_number(&self) -> TransportResult<BlockNumber>;

    /// Returns the header of the block with the given hash as the untyped JSON object served by
    /// the node, with every field preserved. `None` if the block is unknown.
    async fn raw_header(&self, block_hash: B256) -> TransportResult<Option<RawHeader>>;

    /// Returns the typed header of the given block. `None` if the block is unknown.
    async fn header(&self, block: BlockRef) -> TransportResult<Option<Header>>;

    /// Returns the `eth_getProof` response for `account` and `keys` at the given block.
    async fn account_proof(
        &self,
        account: Address,
        keys: Vec<B256>,
        block_number: BlockNumber,
    ) -> TransportResult<EIP1186AccountProofResponse>;

    /// Returns the code deployed at `address` at the given block. Empty if there is none.
    async fn code_at(&self, address: Address, block_number: BlockNumber) -> TransportResult<Bytes>;

    /// Returns the raw 32-byte word stored at `slot` of `address` at the given block.
    async fn storage_at(
        &self,
        address: Address,
        slot: U256,
        block_number: BlockNumber,
    ) -> TransportResult<B256>;

    /// Executes a read-only call against `to` at the given block and returns the raw output.
    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block_number: BlockNumber,
    ) -> TransportResult<Bytes>;

    /// Executes a typed view call at the given block and decodes its return value.
    async fn read_contract<C>(
        &self,
        to: Address,
        call: C,
        block_number: BlockNumber,
    ) -> TransportResult<C::Return>
    where
        C: SolCall + Send,
    {
        let output = self.call(to, call.abi_encode().into(), block_number).await?;
        C::abi_decode_returns(&output).map_err(TransportErrorKind::custom)
    }
}
