#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Chain reader interface and its JSON-RPC implementation.

/// Execution layer client connection
pub mod execution;

mod reader;
pub use reader::ChainReader;
