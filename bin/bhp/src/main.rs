#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Builds the inputs of the on-chain block hash provers and prints them as JSON.

use clap::Parser;
use eyre::eyre;
use tracing::info;

use bhp_clients::execution::ExecutionClient;
use bhp_config::{Command, Direction, Opts};
use bhp_prover::{
    BlockHashProverHelper, ChildToParentProverHelper, ParentToChildConfig,
    ParentToChildProverHelper,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        // Try from custom env file, and abort if it fails
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try from default .env file, and ignore if it fails. It might
        // be that the user isn't using it.
        dotenvy::dotenv().ok();
    }

    let opts = Opts::parse();

    opts.telemetry.setup()?;

    info!(
        direction = %opts.direction,
        home = %opts.home.rpc_url,
        target = %opts.target.rpc_url,
        "building prover input"
    );

    let helper = build_helper(&opts)?;

    let output = match opts.command {
        Command::GetTargetBlockHash => {
            serde_json::to_string_pretty(&helper.build_input_for_get_target_block_hash().await?)?
        }
        Command::VerifyTargetBlockHash { home_block_hash } => serde_json::to_string_pretty(
            &helper.build_input_for_verify_target_block_hash(home_block_hash).await?,
        )?,
        Command::VerifyStorageSlot { target_block_hash, account, slot } => {
            serde_json::to_string_pretty(
                &helper.build_input_for_verify_storage_slot(target_block_hash, account, slot).await?,
            )?
        }
    };

    println!("{output}");
    Ok(())
}

/// Builds the input builder for the configured direction.
fn build_helper(opts: &Opts) -> eyre::Result<Box<dyn BlockHashProverHelper>> {
    let home = ExecutionClient::new(opts.home.rpc_url.clone(), opts.rpc.retry_layer());
    let target = ExecutionClient::new(opts.target.rpc_url.clone(), opts.rpc.retry_layer());

    Ok(match opts.direction {
        Direction::ChildToParent => Box::new(ChildToParentProverHelper::new(home, target)),
        Direction::ParentToChild => {
            let prover = opts
                .contracts
                .prover
                .ok_or_else(|| eyre!("--contracts.prover is required for {}", opts.direction))?;

            Box::new(ParentToChildProverHelper::new(ParentToChildConfig { prover }, home, target))
        }
    })
}
