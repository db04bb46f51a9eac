use alloy::{
    eips::BlockId,
    providers::{Provider, RootProvider},
    rpc::{
        client::{ClientBuilder, RpcClient},
        types::{BlockNumberOrTag, EIP1186AccountProofResponse, Header, TransactionRequest},
    },
    transports::{TransportResult, layers::RetryBackoffLayer},
};
use alloy_primitives::{Address, B256, BlockNumber, Bytes, U256};
use async_trait::async_trait;
use bhp_primitives::{BlockRef, header::RawHeader, retries::default_retry_layer};
use derive_more::derive::Deref;
use tracing::trace;
use url::Url;

use crate::ChainReader;

/// An HTTP-based JSON-RPC execution client.
///
/// This struct is a wrapper over an inner [`RootProvider`] that implements [`ChainReader`] by
/// pinning every request to an explicit block. Raw requests go through the underlying
/// [`RpcClient`] so that untyped responses can be preserved as served by the node.
#[derive(Clone, Debug, Deref)]
pub struct ExecutionClient {
    /// The RPC client used for requests whose response must not be typed.
    rpc: RpcClient,
    /// The inner provider that implements all the JSON-RPC methods, that can be
    /// easily used via dereferencing this struct.
    #[deref]
    inner: RootProvider,
}

impl ExecutionClient {
    /// Create a new [`ExecutionClient`] with the given HTTP URL and retry policy.
    pub fn new<U: Into<Url>>(http_url: U, retry: RetryBackoffLayer) -> Self {
        let rpc = ClientBuilder::default().layer(retry).http(http_url.into());
        let inner = RootProvider::new(rpc.clone());

        Self { rpc, inner }
    }

    /// Create a new [`ExecutionClient`] with the default retry policy.
    pub fn with_default_retries<U: Into<Url>>(http_url: U) -> Self {
        Self::new(http_url, default_retry_layer())
    }
}

#[async_trait]
impl ChainReader for ExecutionClient {
    async fn latest_block_number(&self) -> TransportResult<BlockNumber> {
        self.inner.get_block_number().await
    }

    async fn raw_header(&self, block_hash: B256) -> TransportResult<Option<RawHeader>> {
        trace!(%block_hash, "eth_getBlockByHash");
        self.rpc.request("eth_getBlockByHash", (block_hash, false)).await
    }

    async fn header(&self, block: BlockRef) -> TransportResult<Option<Header>> {
        trace!(%block, "fetching typed header");
        match block {
            BlockRef::Hash(hash) => self.rpc.request("eth_getBlockByHash", (hash, false)).await,
            BlockRef::Number(number) => {
                let tag = BlockNumberOrTag::Number(number);
                self.rpc.request("eth_getBlockByNumber", (tag, false)).await
            }
        }
    }

    async fn account_proof(
        &self,
        account: Address,
        keys: Vec<B256>,
        block_number: BlockNumber,
    ) -> TransportResult<EIP1186AccountProofResponse> {
        trace!(%account, keys = keys.len(), block_number, "eth_getProof");
        self.inner.get_proof(account, keys).block_id(BlockId::number(block_number)).await
    }

    async fn code_at(&self, address: Address, block_number: BlockNumber) -> TransportResult<Bytes> {
        self.inner.get_code_at(address).block_id(BlockId::number(block_number)).await
    }

    async fn storage_at(
        &self,
        address: Address,
        slot: U256,
        block_number: BlockNumber,
    ) -> TransportResult<B256> {
        let value =
            self.inner.get_storage_at(address, slot).block_id(BlockId::number(block_number)).await?;

        Ok(B256::from(value.to_be_bytes::<32>()))
    }

    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block_number: BlockNumber,
    ) -> TransportResult<Bytes> {
        let tx = TransactionRequest::default().to(to).input(input.into());
        self.inner.call(tx).block(BlockId::number(block_number)).await
    }
}
