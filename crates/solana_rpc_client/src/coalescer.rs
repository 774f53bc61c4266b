use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, AtomicUsize, Ordering},
    },
};

use derive_more::Debug;
use dyn_clone::DynClone;
use futures::{
    FutureExt as _,
    future::{AbortHandle, Abortable, Aborted, BoxFuture, Shared},
};
use parking_lot::Mutex;
use solana_rpc_value::Value;

use crate::{
    cancellation::CancellationToken,
    transport::{RpcTransport, TransportError},
};

/// Computes the key under which identical requests are coalesced. Payloads
/// without a key are never coalesced.
pub trait DedupKeyFn: Fn(&Value) -> Option<String> + DynClone + Send + Sync {}

impl<F> DedupKeyFn for F where F: Fn(&Value) -> Option<String> + DynClone + Send + Sync {}

dyn_clone::clone_trait_object!(DedupKeyFn);

const ABORT_REASON: &str = "All consumers of the coalesced request cancelled";

/// Failure of a shared transport call.
#[derive(Clone, Debug)]
enum SharedFailure {
    Transport(TransportError),
    /// The call was aborted after its last consumer detached. Never observed
    /// by a consumer.
    Aborted,
}

type SharedResponse = Shared<BoxFuture<'static, Result<Value, SharedFailure>>>;

/// A transport call shared by every consumer that requested the same payload
/// within one turn.
struct CoalescedRequest {
    abort_handle: AbortHandle,
    cancellation: CancellationToken,
    /// Mutated only while the table is locked.
    consumers: AtomicUsize,
    generation: u64,
    response: SharedResponse,
}

impl CoalescedRequest {
    /// The transport is called on the first poll of the response.
    fn new<TransportT: RpcTransport + 'static>(
        transport: Arc<TransportT>,
        payload: Value,
        generation: u64,
    ) -> Self {
        let cancellation = CancellationToken::new();
        let (abort_handle, registration) = AbortHandle::new_pair();

        let call = {
            let cancellation = cancellation.clone();
            async move { transport.send(payload, Some(cancellation)).await }
        };
        let response = Abortable::new(call, registration)
            .map(|outcome| match outcome {
                Ok(result) => result.map_err(SharedFailure::Transport),
                Err(Aborted) => Err(SharedFailure::Aborted),
            })
            .boxed()
            .shared();

        Self {
            abort_handle,
            cancellation,
            consumers: AtomicUsize::new(1),
            generation,
            response,
        }
    }
}

#[derive(Default)]
struct Table {
    generation: u64,
    requests: HashMap<String, Arc<CoalescedRequest>>,
}

impl Table {
    /// Removes the entry for `key` if it still refers to `request`.
    fn evict(&mut self, key: &str, request: &Arc<CoalescedRequest>) {
        if self
            .requests
            .get(key)
            .is_some_and(|entry| Arc::ptr_eq(entry, request))
        {
            self.requests.remove(key);
        }
    }
}

/// Awaits the shared response and removes the settled request from the table,
/// so that later requests issue a new call.
async fn await_response(
    table: &Mutex<Table>,
    key: &str,
    request: &Arc<CoalescedRequest>,
) -> Result<Value, SharedFailure> {
    let outcome = request.response.clone().await;
    table.lock().evict(key, request);
    outcome
}

/// A consumer of a [`CoalescedRequest`] that may detach before the response
/// arrives.
struct Consumer {
    key: String,
    request: Arc<CoalescedRequest>,
    settled: bool,
    table: Arc<Mutex<Table>>,
}

impl Drop for Consumer {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let mut table = self.table.lock();
        if self.request.consumers.fetch_sub(1, Ordering::AcqRel) > 1 {
            return;
        }

        self.request.abort_handle.abort();
        self.request.cancellation.cancel(ABORT_REASON);

        table.evict(&self.key, &self.request);

        log::debug!(
            "Aborted coalesced request `{}` of turn {}",
            self.key,
            self.request.generation
        );
    }
}

/// Wraps a transport so that identical requests issued while a call for them
/// is in flight share that call, as long as they belong to the same turn.
///
/// A call is removed from the coalescer once it settles; later requests issue
/// a new call. Every consumer of a shared call observes the same response. A consumer
/// that supplied a [`CancellationToken`] detaches when the token is cancelled
/// or its future is dropped; once all consumers have detached, the shared call
/// is aborted. Consumers without a token remain attached until the response
/// arrives.
#[derive(Debug)]
pub struct Coalescer<TransportT> {
    transport: Arc<TransportT>,
    #[debug(skip)]
    dedup_key: Box<dyn DedupKeyFn>,
    generation: AtomicU64,
    #[debug(skip)]
    table: Arc<Mutex<Table>>,
}

impl<TransportT: RpcTransport + 'static> Coalescer<TransportT> {
    /// Constructs a new instance.
    pub fn new(transport: TransportT, dedup_key: Box<dyn DedupKeyFn>) -> Self {
        Self {
            transport: Arc::new(transport),
            dedup_key,
            generation: AtomicU64::new(0),
            table: Arc::new(Mutex::new(Table::default())),
        }
    }

    /// Ends the current turn. Requests issued afterwards no longer attach to
    /// calls started before.
    pub fn advance_turn(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// The current turn.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Number of calls of the current turn that have not settled yet.
    pub fn pending_requests(&self) -> usize {
        let table = self.table.lock();

        if table.generation == self.generation() {
            table.requests.len()
        } else {
            0
        }
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &TransportT {
        &*self.transport
    }

    /// Attaches to the call for `key` of the current turn, starting one if
    /// needed.
    fn attach(&self, key: &str, payload: Value) -> Arc<CoalescedRequest> {
        let (request, started) = self.attach_or_insert(key, payload);

        // The first poll calls the transport. The table is unlocked by now, so
        // the transport may use this coalescer.
        if started && request.response.clone().now_or_never().is_some() {
            self.table.lock().evict(key, &request);
        }

        request
    }

    /// Returns the call for `key` of the current turn and whether it was just
    /// created.
    fn attach_or_insert(&self, key: &str, payload: Value) -> (Arc<CoalescedRequest>, bool) {
        let mut table = self.table.lock();

        let generation = self.generation.load(Ordering::Acquire);
        if table.generation != generation {
            if !table.requests.is_empty() {
                log::debug!(
                    "Discarding {} coalesced requests of turn {}",
                    table.requests.len(),
                    table.generation
                );
            }

            table.requests.clear();
            table.generation = generation;
        }

        if let Some(request) = table.requests.get(key) {
            request.consumers.fetch_add(1, Ordering::AcqRel);

            #[cfg(feature = "tracing")]
            tracing::trace!("Coalesced request hit: {key}");

            return (request.clone(), false);
        }

        log::debug!("Starting coalesced request `{key}` in turn {generation}");

        let request = Arc::new(CoalescedRequest::new(
            self.transport.clone(),
            payload,
            generation,
        ));
        table.requests.insert(key.to_owned(), request.clone());

        (request, true)
    }
}

impl<TransportT: RpcTransport + 'static> RpcTransport for Coalescer<TransportT> {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    fn send(
        &self,
        payload: Value,
        cancellation: Option<CancellationToken>,
    ) -> BoxFuture<'static, Result<Value, TransportError>> {
        let Some(key) = (self.dedup_key)(&payload) else {
            return self.transport.send(payload, cancellation);
        };

        let request = self.attach(&key, payload);
        let table = self.table.clone();

        let Some(cancellation) = cancellation else {
            return async move { settle(await_response(&table, &key, &request).await) }.boxed();
        };

        // Dropping the future before its first poll must detach as well.
        let mut consumer = Consumer {
            key: key.clone(),
            request: request.clone(),
            settled: false,
            table: table.clone(),
        };

        async move {
            tokio::select! {
                biased;
                reason = cancellation.cancelled() => Err(TransportError::Cancelled { reason }),
                outcome = await_response(&table, &key, &request) => {
                    consumer.settled = true;
                    settle(outcome)
                }
            }
        }
        .boxed()
    }
}

fn settle(outcome: Result<Value, SharedFailure>) -> Result<Value, TransportError> {
    outcome.map_err(|failure| match failure {
        SharedFailure::Transport(error) => error,
        SharedFailure::Aborted => {
            unreachable!("a coalesced request is only aborted once it has no consumers")
        }
    })
}
