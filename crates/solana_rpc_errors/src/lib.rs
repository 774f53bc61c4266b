//! Coded errors of the Solana JSON-RPC client.
//!
//! Errors reported by a node are decoded into a [`SolanaError`] whose
//! [`SolanaErrorCode`] identifies the failure and whose
//! [`SolanaErrorContext`] carries the details specific to that code. Errors
//! of failed transactions are decoded recursively, down to the failing
//! instruction.

mod code;
mod context;
mod error;
mod instruction;
mod json_rpc;
mod overflow;
mod rpc_enum;
mod transaction;

pub use self::{code::SolanaErrorCode, context::SolanaErrorContext, error::SolanaError};
