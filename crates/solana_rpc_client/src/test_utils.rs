use std::sync::Arc;

use derive_more::Debug;
use futures::{FutureExt as _, future::BoxFuture};
use parking_lot::Mutex;
use solana_rpc_value::Value;
use tokio::sync::watch;

use crate::{
    cancellation::CancellationToken,
    transport::{RpcTransport, TransportError},
};

/// A call received by a [`MockTransport`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    /// The payload that was sent.
    pub payload: Value,
    /// The cancellation token supplied with the payload.
    pub cancellation: Option<CancellationToken>,
}

type Responder = dyn Fn(&Value) -> Result<Value, TransportError> + Send + Sync;

/// A transport that records its calls and responds with scripted outcomes.
///
/// Responses can be held back until [`MockTransport::release`] is called,
/// which keeps calls in flight for as long as a test needs.
#[derive(Clone, Debug)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    #[debug(skip)]
    responder: Arc<Responder>,
    released: Arc<watch::Sender<bool>>,
}

impl MockTransport {
    /// Constructs a transport that responds to each payload with the outcome
    /// of `responder`.
    pub fn new(
        responder: impl Fn(&Value) -> Result<Value, TransportError> + Send + Sync + 'static,
    ) -> Self {
        let (released, _receiver) = watch::channel(true);

        Self {
            calls: Arc::default(),
            responder: Arc::new(responder),
            released: Arc::new(released),
        }
    }

    /// Constructs a transport that responds to each request with a JSON-RPC
    /// envelope containing `result`.
    pub fn with_result(result: Value) -> Self {
        Self::new(move |payload| {
            Ok(Value::from_iter([
                ("jsonrpc", Value::from("2.0")),
                ("id", payload.get("id").cloned().unwrap_or(Value::Null)),
                ("result", result.clone()),
            ]))
        })
    }

    /// Holds back responses until [`MockTransport::release`] is called.
    pub fn hold(self) -> Self {
        self.released.send_replace(false);
        self
    }

    /// Delivers held back responses, as well as all future ones.
    pub fn release(&self) {
        self.released.send_replace(true);
    }

    /// The calls received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// The number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl RpcTransport for MockTransport {
    fn send(
        &self,
        payload: Value,
        cancellation: Option<CancellationToken>,
    ) -> BoxFuture<'static, Result<Value, TransportError>> {
        self.calls.lock().push(RecordedCall {
            payload: payload.clone(),
            cancellation: cancellation.clone(),
        });

        let response = (self.responder)(&payload);
        let mut released = self.released.subscribe();

        async move {
            let release = async {
                while !*released.borrow_and_update() {
                    if released.changed().await.is_err() {
                        break;
                    }
                }
            };

            match cancellation {
                Some(cancellation) => tokio::select! {
                    reason = cancellation.cancelled() => Err(TransportError::Cancelled { reason }),
                    () = release => response,
                },
                None => {
                    release.await;
                    response
                }
            }
        }
        .boxed()
    }
}
