//! Request and response transformers of the Solana JSON-RPC client.
//!
//! The wire format carries every number as a host double. Outgoing
//! parameters are downcast by a [`RequestTransformer`], which reports
//! integers that would lose precision and applies a default commitment.
//! Incoming results are upcast by a [`ResponseTransformer`], except for the
//! fields listed in [`AllowedNumericKeyPaths`].

#![warn(missing_docs)]

mod allowed_numeric;
mod commitment;
mod notification;
mod options_position;
mod overflow;
mod request;
mod response;
mod visitors;

pub use self::{
    allowed_numeric::AllowedNumericKeyPaths,
    commitment::Commitment,
    notification::NotificationTransformer,
    options_position::OptionsObjectPositionConfig,
    overflow::{IntegerOverflow, IntegerOverflowHandler, IntegerOverflowPolicy},
    request::{RequestTransformer, RequestTransformerConfig},
    response::{ResponseTransformer, ResponseTransformerConfig},
};
