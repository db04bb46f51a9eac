use alloy_primitives::{Address, U256, address};

/// The `L1Block` predeploy on OP-stack chains, which mirrors the latest L1 block attributes
/// into L2 state.
///
/// Ref: <https://specs.optimism.io/protocol/predeploys.html#l1block>
pub const L1_BLOCK_PREDEPLOY: Address = address!("4200000000000000000000000000000000000015");

/// Storage slot of `L1Block.hash`, the hash of the latest known L1 block.
///
/// Layout: slot 0 packs `number` and `timestamp`, slot 1 is `basefee`, slot 2 is `hash`.
pub const L1_BLOCK_HASH_SLOT: U256 = U256::from_limbs([2, 0, 0, 0]);

/// The `L2ToL1MessagePasser` predeploy, whose storage root is part of every output root.
///
/// Ref: <https://specs.optimism.io/protocol/predeploys.html#l2tol1messagepasser>
pub const L2_TO_L1_MESSAGE_PASSER: Address = address!("4200000000000000000000000000000000000016");

/// Storage slot of `AnchorStateRegistry.anchorGame`.
pub const ANCHOR_GAME_SLOT: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Slot used when only an account's existence has to be proven.
pub const ACCOUNT_EXISTENCE_SLOT: U256 = U256::ZERO;
