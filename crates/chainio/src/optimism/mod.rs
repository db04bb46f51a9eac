/// `AnchorStateRegistry.sol` L1 contract bindings
///
/// Ref: <https://github.com/ethereum-optimism/optimism/blob/develop/packages/contracts-bedrock/src/dispute/AnchorStateRegistry.sol>
pub mod anchor_state_registry;

/// `FaultDisputeGame.sol` L1 contract bindings
///
/// Ref: <https://github.com/ethereum-optimism/optimism/blob/develop/packages/contracts-bedrock/src/dispute/FaultDisputeGame.sol>
pub mod dispute_game;
