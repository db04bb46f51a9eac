use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface IParentToChildProver {
        /// @notice The `AnchorStateRegistry` of the child rollup, on the parent chain.
        function anchorStateRegistry() external view returns (address);
    }
}
