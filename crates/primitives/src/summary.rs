use crate::{proof::ProofBundle, root_claim::RootClaimPreimage};

/// A trait for objects that can be summarized into a string for logging purposes.
///
/// Proof bundles carry kilobytes of trie nodes, so their Debug impl is far too verbose for
/// logs. This trait allows us to have our custom verbosity.
pub trait Summary {
    /// Returns a summary of the object.
    fn summary(&self) -> String;
}

impl Summary for ProofBundle {
    fn summary(&self) -> String {
        format!(
            "slot_value={}, storage_hash={}, account_nodes={}, storage_nodes={}, rlp_account_proof_size={}, rlp_storage_proof_size={}",
            self.slot_value,
            self.storage_hash,
            self.account_proof.len(),
            self.storage_proof.len(),
            self.rlp_account_proof.len(),
            self.rlp_storage_proof.len(),
        )
    }
}

impl Summary for RootClaimPreimage {
    fn summary(&self) -> String {
        format!(
            "output_root={}, state_root={}, message_passer_storage_root={}, latest_block_hash={}",
            self.hash(),
            self.state_root,
            self.message_passer_storage_root,
            self.latest_block_hash,
        )
    }
}
