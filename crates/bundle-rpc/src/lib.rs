//! Block-engine bundle RPC client.
//!
//! Contains the [`BlockEngineClient`], a thin JSON-RPC client for submitting
//! and querying Solana transaction bundles on a block-engine relay, along with
//! the request and response types it speaks.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// The [`BlockEngineClient`].
pub mod client;
pub use client::BlockEngineClient;

/// Client configuration.
pub mod config;
pub use config::BlockEngineConfig;

/// Well-known block-engine URLs, endpoints and method names.
pub mod constants;

mod error;
pub use error::{BundleRpcError, Result};

/// JSON pretty-printing for diagnostics.
pub mod pretty;
pub use pretty::prettify_json;

/// JSON-RPC envelope types and parameter shaping.
pub mod request;
pub use request::{InflightStatusParams, JsonRpcRequest, JsonRpcResponse, RpcErrorObject};

/// Typed results returned by the [`BlockEngineClient`].
pub mod types;
pub use types::{
    BundleErr, BundleStatus, BundleStatuses, ConfirmationStatus, InflightBundleStatus,
    InflightBundleStatuses, InflightState, RpcContext, TipAccount,
};
