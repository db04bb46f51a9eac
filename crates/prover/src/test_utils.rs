use std::collections::HashMap;

use alloy::{
    consensus::Header as ConsensusHeader,
    rpc::types::{EIP1186AccountProofResponse, Header},
    transports::{TransportErrorKind, TransportResult},
};
use alloy_primitives::{
    Address, B64, B256, BlockNumber, Bytes, KECCAK256_EMPTY, Selector, U256, keccak256,
};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use bhp_clients::ChainReader;
use bhp_primitives::{BlockRef, header::RawHeader};
use serde_json::{Value, json};

/// An in-memory chain of Cancun-shaped blocks, serving whatever state the test registers.
///
/// Unregistered storage reads as zero and unregistered code as empty, like on a real node.
/// Proof nodes are deterministic placeholders derived from the request.
#[derive(Debug, Default)]
pub(crate) struct MockChain {
    headers: HashMap<B256, ConsensusHeader>,
    hashes: HashMap<BlockNumber, B256>,
    latest: BlockNumber,
    storage: HashMap<(Address, U256, BlockNumber), B256>,
    storage_roots: HashMap<(Address, BlockNumber), B256>,
    code: HashMap<(Address, BlockNumber), Bytes>,
    calls: HashMap<(Address, Selector, BlockNumber), Bytes>,
}

impl MockChain {
    /// Builds a chain of `count` linked blocks starting at `first`. The last one is the latest.
    pub(crate) fn with_blocks(first: BlockNumber, count: u64) -> Self {
        let mut chain = Self::default();
        let mut parent_hash = B256::repeat_byte(0x0a);

        for number in first..first + count {
            let header = ConsensusHeader {
                parent_hash,
                number,
                state_root: keccak256(number.to_be_bytes()),
                beneficiary: Address::repeat_byte(0xfe),
                gas_limit: 30_000_000,
                gas_used: 12_345_678,
                timestamp: 1_700_000_000 + number * 2,
                nonce: B64::ZERO,
                base_fee_per_gas: Some(7),
                withdrawals_root: Some(B256::repeat_byte(0x56)),
                blob_gas_used: Some(0),
                excess_blob_gas: Some(0),
                parent_beacon_block_root: Some(B256::repeat_byte(0xbe)),
                ..Default::default()
            };

            parent_hash = header.hash_slow();
            chain.hashes.insert(number, parent_hash);
            chain.headers.insert(parent_hash, header);
            chain.latest = number;
        }

        chain
    }

    pub(crate) const fn latest(&self) -> BlockNumber {
        self.latest
    }

    pub(crate) fn block_hash(&self, number: BlockNumber) -> B256 {
        self.hashes[&number]
    }

    pub(crate) fn consensus_header(&self, number: BlockNumber) -> &ConsensusHeader {
        &self.headers[&self.block_hash(number)]
    }

    pub(crate) fn set_storage(
        &mut self,
        address: Address,
        slot: U256,
        block_number: BlockNumber,
        word: B256,
    ) {
        self.storage.insert((address, slot, block_number), word);
    }

    pub(crate) fn set_storage_root(
        &mut self,
        address: Address,
        block_number: BlockNumber,
        root: B256,
    ) {
        self.storage_roots.insert((address, block_number), root);
    }

    pub(crate) fn set_code(&mut self, address: Address, block_number: BlockNumber, code: Bytes) {
        self.code.insert((address, block_number), code);
    }

    /// Registers the value returned by a view call. The value is encoded as a single return.
    pub(crate) fn set_call<C: SolCall>(
        &mut self,
        to: Address,
        block_number: BlockNumber,
        value: impl SolValue,
    ) {
        self.calls.insert((to, C::SELECTOR.into(), block_number), value.abi_encode().into());
    }

    fn resolve(&self, block: BlockRef) -> Option<(B256, &ConsensusHeader)> {
        let hash = match block {
            BlockRef::Hash(hash) => hash,
            BlockRef::Number(number) => *self.hashes.get(&number)?,
        };
        self.headers.get(&hash).map(|header| (hash, header))
    }

    fn check_known(&self, block_number: BlockNumber) -> TransportResult<()> {
        if self.hashes.contains_key(&block_number) {
            Ok(())
        } else {
            Err(TransportErrorKind::custom_str("header not found"))
        }
    }

    fn storage_word(&self, address: Address, slot: U256, block_number: BlockNumber) -> B256 {
        self.storage.get(&(address, slot, block_number)).copied().unwrap_or_default()
    }
}

/// A placeholder trie node, unique per input.
fn node(parts: &[&[u8]]) -> Bytes {
    Bytes::copy_from_slice(keccak256(parts.concat()).as_slice())
}

#[async_trait]
impl ChainReader for MockChain {
    async fn latest_block_number(&self) -> TransportResult<BlockNumber> {
        Ok(self.latest)
    }

    async fn raw_header(&self, block_hash: B256) -> TransportResult<Option<RawHeader>> {
        let Some((hash, header)) = self.resolve(block_hash.into()) else { return Ok(None) };

        let mut value = serde_json::to_value(header).map_err(TransportErrorKind::custom)?;
        if let Value::Object(fields) = &mut value {
            fields.insert("hash".to_owned(), json!(hash));
            fields.insert("transactions".to_owned(), json!([]));
        }

        serde_json::from_value(value).map(Some).map_err(TransportErrorKind::custom)
    }

    async fn header(&self, block: BlockRef) -> TransportResult<Option<Header>> {
        Ok(self.resolve(block).map(|(hash, header)| Header {
            hash,
            inner: header.clone(),
            total_difficulty: None,
            size: None,
        }))
    }

    async fn account_proof(
        &self,
        account: Address,
        keys: Vec<B256>,
        block_number: BlockNumber,
    ) -> TransportResult<EIP1186AccountProofResponse> {
        self.check_known(block_number)?;
        let number = block_number.to_be_bytes();

        let storage_proof: Vec<Value> = keys
            .iter()
            .map(|key| {
                let word = self.storage_word(account, U256::from_be_bytes(key.0), block_number);
                json!({
                    "key": key,
                    "value": U256::from_be_bytes(word.0),
                    "proof": [node(&[account.as_slice(), key.as_slice(), number.as_slice()])],
                })
            })
            .collect();

        let storage_hash = self
            .storage_roots
            .get(&(account, block_number))
            .copied()
            .unwrap_or_else(|| keccak256(account));

        serde_json::from_value(json!({
            "address": account,
            "balance": "0x0",
            "codeHash": KECCAK256_EMPTY,
            "nonce": "0x1",
            "storageHash": storage_hash,
            "accountProof": [
                node(&[b"root".as_slice(), number.as_slice()]),
                node(&[account.as_slice(), number.as_slice()]),
            ],
            "storageProof": storage_proof,
        }))
        .map_err(TransportErrorKind::custom)
    }

    async fn code_at(&self, address: Address, block_number: BlockNumber) -> TransportResult<Bytes> {
        self.check_known(block_number)?;
        Ok(self.code.get(&(address, block_number)).cloned().unwrap_or_default())
    }

    async fn storage_at(
        &self,
        address: Address,
        slot: U256,
        block_number: BlockNumber,
    ) -> TransportResult<B256> {
        self.check_known(block_number)?;
        Ok(self.storage_word(address, slot, block_number))
    }

    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block_number: BlockNumber,
    ) -> TransportResult<Bytes> {
        self.check_known(block_number)?;
        let selector = Selector::try_from(input.get(..4).unwrap_or_default())
            .map_err(TransportErrorKind::custom)?;

        self.calls
            .get(&(to, selector, block_number))
            .cloned()
            .ok_or_else(|| TransportErrorKind::custom_str("execution reverted"))
    }
}
