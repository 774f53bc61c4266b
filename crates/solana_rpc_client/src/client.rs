use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Debug;
use solana_rpc_errors::SolanaError;
use solana_rpc_transformers::{
    RequestTransformer, RequestTransformerConfig, ResponseTransformer, ResponseTransformerConfig,
};
use solana_rpc_value::Value;

use crate::{
    cancellation::CancellationToken,
    coalescer::{Coalescer, DedupKeyFn},
    dedup::solana_rpc_payload_dedup_key,
    payload::create_rpc_payload,
    transport::{RpcTransport, TransportError},
};

/// Error of an [`RpcClient`].
#[derive(Clone, Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The request could not be prepared or the node returned an error.
    #[error(transparent)]
    Solana(#[from] SolanaError),
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Configuration of an [`RpcClient`].
#[derive(Clone, Debug)]
pub struct RpcClientConfig {
    /// Configuration of the request pipeline.
    pub request: RequestTransformerConfig,
    /// Configuration of the response pipeline.
    pub response: ResponseTransformerConfig,
    /// Key under which identical requests are coalesced.
    #[debug(skip)]
    pub dedup_key: Box<dyn DedupKeyFn>,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            request: RequestTransformerConfig::default(),
            response: ResponseTransformerConfig::default(),
            dedup_key: Box::new(solana_rpc_payload_dedup_key),
        }
    }
}

/// A Solana JSON-RPC client on top of an [`RpcTransport`].
#[derive(Debug)]
pub struct RpcClient<TransportT> {
    coalescer: Coalescer<TransportT>,
    next_id: AtomicU64,
    request_transformer: RequestTransformer,
    response_transformer: ResponseTransformer,
}

impl<TransportT: RpcTransport + 'static> RpcClient<TransportT> {
    /// Constructs a new instance.
    pub fn new(transport: TransportT, config: RpcClientConfig) -> Self {
        let RpcClientConfig {
            request,
            response,
            dedup_key,
        } = config;

        Self {
            coalescer: Coalescer::new(transport, dedup_key),
            next_id: AtomicU64::new(0),
            request_transformer: RequestTransformer::new(request),
            response_transformer: ResponseTransformer::new(response),
        }
    }

    /// Calls `method` with `params` and returns its result.
    ///
    /// Cancelling `cancellation` fails the call with
    /// [`TransportError::Cancelled`], without affecting other callers that
    /// share the same transport call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, params, cancellation))
    )]
    pub async fn request(
        &self,
        method: &str,
        params: &Value,
        cancellation: Option<CancellationToken>,
    ) -> Result<Value, RpcClientError> {
        let params = self.request_transformer.transform(method, params)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = create_rpc_payload(id, method, params);

        let envelope = self.coalescer.send(payload, cancellation).await?;

        let result = self.response_transformer.transform(method, &envelope)?;
        Ok(result)
    }

    /// Ends the current turn of request coalescing.
    pub fn advance_turn(&self) {
        self.coalescer.advance_turn();
    }

    /// The coalescing transport.
    pub fn coalescer(&self) -> &Coalescer<TransportT> {
        &self.coalescer
    }
}
