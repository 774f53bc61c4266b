//! Structural values exchanged with a Solana JSON-RPC node.
//!
//! [`Value`] distinguishes wide integers from host numbers so that the
//! request and response pipelines can reason about precision explicitly.
//! [`walk`] rebuilds a value while applying a chain of [`LeafVisitor`]s to
//! every leaf, tracking the [`KeyPath`] from the root.

#![warn(missing_docs)]

mod json;
mod key_path;
mod value;
mod walk;

pub use self::{
    json::ValueError,
    key_path::{KeyPath, KeyPathSegment},
    value::{Map, Value, MAX_SAFE_INTEGER},
    walk::{walk, walk_infallible, LeafVisitor, TraversalState},
};
