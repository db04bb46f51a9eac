use alloy::transports::TransportError;
use alloy_primitives::{Address, B256, BlockNumber, U256};
use bhp_primitives::{BlockRef, ChainRole, header::HeaderError};

/// Errors that can occur while building a prover input.
///
/// None of them is retried: a failed step aborts the whole construction.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum ProverError {
    #[error("Block {block} not found on the {chain} chain")]
    BlockNotFound { chain: ChainRole, block: BlockRef },
    #[error(transparent)]
    MalformedHeader(#[from] HeaderError),
    #[error("No contract code at {address} at block {block_number}")]
    MissingContractCode { address: Address, block_number: BlockNumber },
    #[error("No storage proof returned for account {account}")]
    MissingStorageProof { account: Address },
    #[error("Storage word {0} does not hold an address")]
    InvalidAddressWord(B256),
    #[error("L2 block number {0} does not fit in a u64")]
    L2BlockNumberOverflow(U256),
    #[error("Anchor game claims output root {expected}, target chain yields {actual}")]
    RootClaimMismatch { expected: B256, actual: B256 },
    #[error("RPC error: {0}")]
    Rpc(#[from] TransportError),
}
