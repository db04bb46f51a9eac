use alloy::transports::layers::RetryBackoffLayer;
use alloy_primitives::Address;
use bhp_primitives::retries::{
    DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_RATE_LIMIT_RETRIES, retry_layer,
};
use clap::{Parser, ValueEnum};
use derive_more::derive::Display;
use url::Url;

/// Home chain configuration options
#[derive(Debug, Clone, Parser)]
pub struct HomeOpts {
    /// The URL of the home chain execution client HTTP connection
    #[clap(long = "home.rpc-url", env = "BHP_HOME_RPC_URL", id = "home-rpc-url")]
    pub rpc_url: Url,
}

/// Target chain configuration options
#[derive(Debug, Clone, Parser)]
pub struct TargetOpts {
    /// The URL of the target chain execution client HTTP connection
    #[clap(long = "target.rpc-url", env = "BHP_TARGET_RPC_URL", id = "target-rpc-url")]
    pub rpc_url: Url,
}

/// The direction of a derivation, relative to the home chain.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// The home chain is a child (L2) and the target is its parent (L1).
    #[display("child-to-parent")]
    ChildToParent,
    /// The home chain is a parent (L1) and the target is its child (L2).
    #[display("parent-to-child")]
    ParentToChild,
}

/// The contract addresses read on the home chain.
#[derive(Debug, Clone, Parser)]
pub struct ContractAddresses {
    /// The address of the home `ParentToChildProver.sol`. Required when proving a child chain.
    #[clap(
        long = "contracts.prover",
        env = "BHP_PROVER_ADDRESS",
        required_if_eq("direction", "parent-to-child")
    )]
    pub prover: Option<Address>,
}

/// JSON-RPC transport configuration options
#[derive(Debug, Clone, Parser)]
pub struct RpcOpts {
    /// The maximum number of retries on rate-limited responses
    #[clap(
        long = "rpc.max-rate-limit-retries",
        env = "BHP_RPC_MAX_RATE_LIMIT_RETRIES",
        default_value_t = DEFAULT_MAX_RATE_LIMIT_RETRIES
    )]
    pub max_rate_limit_retries: u32,
    /// The initial backoff between retries, in milliseconds
    #[clap(
        long = "rpc.initial-backoff-ms",
        env = "BHP_RPC_INITIAL_BACKOFF_MS",
        default_value_t = DEFAULT_INITIAL_BACKOFF_MS
    )]
    pub initial_backoff_ms: u64,
}

impl RpcOpts {
    /// Returns the transport retry layer configured by these options.
    pub fn retry_layer(&self) -> RetryBackoffLayer {
        retry_layer(self.max_rate_limit_retries, self.initial_backoff_ms)
    }
}
