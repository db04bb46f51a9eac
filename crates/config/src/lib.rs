#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Configuration for the block hash prover helpers.

use alloy_primitives::{Address, B256, U256};
use clap::{
    Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Color, Style},
    },
};

mod chain;
pub use chain::{ContractAddresses, Direction, HomeOpts, RpcOpts, TargetOpts};

mod telemetry;
pub use telemetry::{TelemetryOpts, TryInitError};

/// CLI options for the block hash prover helpers.
#[derive(Debug, Clone, Parser)]
#[command(author, version, styles = cli_styles(), about)]
pub struct Opts {
    /// The direction of the derivation
    #[clap(long, env = "BHP_DIRECTION", value_enum)]
    pub direction: Direction,
    /// Home chain configuration options
    #[clap(flatten)]
    pub home: HomeOpts,
    /// Target chain configuration options
    #[clap(flatten)]
    pub target: TargetOpts,
    /// The contract addresses read on the home chain.
    #[clap(flatten)]
    pub contracts: ContractAddresses,
    /// JSON-RPC transport configuration options
    #[clap(flatten)]
    pub rpc: RpcOpts,
    /// Telemetry-related configuration options
    #[clap(flatten)]
    pub telemetry: TelemetryOpts,
    /// The prover input to build
    #[command(subcommand)]
    pub command: Command,
}

/// The prover inputs that can be built.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Build the input of `getTargetBlockHash` at the latest home block
    GetTargetBlockHash,
    /// Build the input of `verifyTargetBlockHash` for the given home block
    VerifyTargetBlockHash {
        /// The hash of the home block the target block hash is proven against
        #[clap(long)]
        home_block_hash: B256,
    },
    /// Build the input of `verifyStorageSlot` for a slot of a target chain account
    VerifyStorageSlot {
        /// The hash of the target block the slot is read at
        #[clap(long)]
        target_block_hash: B256,
        /// The account whose storage is proven
        #[clap(long)]
        account: Address,
        /// The storage slot to prove
        #[clap(long)]
        slot: U256,
    },
}

/// Styles for the CLI.
const fn cli_styles() -> Styles {
    Styles::styled()
        .usage(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .header(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .valid(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}
