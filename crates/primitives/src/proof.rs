use alloy::rpc::types::EIP1186AccountProofResponse;
use alloy_primitives::{B256, Bytes};

/// RLP-encodes an ordered list of trie nodes into a single byte string, which is the form the
/// on-chain verifiers expect proofs to be embedded in.
pub fn rlp_encode_nodes(nodes: &[Bytes]) -> Bytes {
    let mut out = Vec::new();
    alloy_rlp::encode_list::<_, Bytes>(nodes, &mut out);
    out.into()
}

/// An account proof and a single storage proof for one `(account, slot, block)` tuple.
///
/// Built from an `eth_getProof` response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofBundle {
    /// The account proof nodes, from the state root down.
    pub account_proof: Vec<Bytes>,
    /// The storage proof nodes of the requested slot, from the account storage root down.
    pub storage_proof: Vec<Bytes>,
    /// The value of the requested slot, left-padded to 32 bytes.
    pub slot_value: B256,
    /// The storage root of the account.
    pub storage_hash: B256,
    /// [`Self::account_proof`] as a single RLP list.
    pub rlp_account_proof: Bytes,
    /// [`Self::storage_proof`] as a single RLP list.
    pub rlp_storage_proof: Bytes,
}

impl ProofBundle {
    /// Builds a bundle from an `eth_getProof` response, using its first storage proof.
    ///
    /// Returns `None` if the response carries no storage proof at all.
    pub fn from_response(response: EIP1186AccountProofResponse) -> Option<Self> {
        let storage = response.storage_proof.into_iter().next()?;

        let rlp_account_proof = rlp_encode_nodes(&response.account_proof);
        let rlp_storage_proof = rlp_encode_nodes(&storage.proof);

        Some(Self {
            account_proof: response.account_proof,
            storage_proof: storage.proof,
            slot_value: B256::from(storage.value.to_be_bytes::<32>()),
            storage_hash: response.storage_hash,
            rlp_account_proof,
            rlp_storage_proof,
        })
    }
}
