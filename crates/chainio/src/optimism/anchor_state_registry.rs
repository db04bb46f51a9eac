use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface IAnchorStateRegistry {
        /// @notice Returns the current anchor game, the dispute game whose root claim is the
        /// latest trusted output root of the rollup.
        ///
        /// NOTE: stored in slot `ANCHOR_GAME_SLOT`, which is what the verifier proves.
        function anchorGame() external view returns (address);
    }
}
