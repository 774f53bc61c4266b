use std::sync::Arc;

use auto_impl::auto_impl;
use futures::future::BoxFuture;
use solana_rpc_value::Value;

use crate::cancellation::CancellationToken;

/// Error of an [`RpcTransport`].
#[derive(Clone, Debug, thiserror::Error)]
pub enum TransportError {
    /// The caller cancelled the request.
    #[error("The request was cancelled: {reason}")]
    Cancelled {
        /// The reason supplied by the caller.
        reason: String,
    },
    /// The transport failed to deliver the request or its response.
    #[error(transparent)]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a transport-specific error.
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(error))
    }
}

/// Sends a JSON-RPC payload and produces the response payload.
#[auto_impl(&, Box, Arc)]
pub trait RpcTransport: Send + Sync {
    /// Sends `payload`.
    ///
    /// Implementations should abandon the request and fail with
    /// [`TransportError::Cancelled`] once `cancellation` is cancelled.
    fn send(
        &self,
        payload: Value,
        cancellation: Option<CancellationToken>,
    ) -> BoxFuture<'static, Result<Value, TransportError>>;
}
