//! A Solana JSON-RPC client that guards the precision of integers and
//! coalesces concurrent identical requests.
//!
//! [`RpcClient`] runs every call through a request transformer, a
//! [`Coalescer`] wrapping the caller-supplied [`RpcTransport`], and a
//! response transformer.

#![warn(missing_docs)]

mod cancellation;
mod client;
mod coalescer;
mod dedup;
mod hasher;
mod payload;
/// Utilities for testing code that uses the client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod transport;

pub use self::{
    cancellation::CancellationToken,
    client::{RpcClient, RpcClientConfig, RpcClientError},
    coalescer::{Coalescer, DedupKeyFn},
    dedup::solana_rpc_payload_dedup_key,
    payload::create_rpc_payload,
    transport::{RpcTransport, TransportError},
};
