use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface IFaultDisputeGame {
        /// @notice The L2 block number for which this game is proposing an output root.
        function l2BlockNumber() external view returns (uint256);

        /// @notice The output root claimed by the game creator.
        function rootClaim() external pure returns (bytes32);
    }
}
