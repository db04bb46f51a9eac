#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Chain I/O module: smart contract interfaces read while building prover inputs, and the ABI
//! schemas of the inputs themselves.

/// OP-stack dispute contract bindings
pub mod optimism;

/// Block hash prover contract bindings
pub mod prover;

pub mod inputs;
