use std::sync::{
    Arc, Weak,
    atomic::{AtomicU64, Ordering},
};

use futures::{FutureExt as _, future::BoxFuture};
use solana_rpc_client::{
    CancellationToken, Coalescer, RpcTransport, TransportError, create_rpc_payload,
    solana_rpc_payload_dedup_key, test_utils::MockTransport,
};
use solana_rpc_value::Value;

fn coalescer(transport: &MockTransport) -> Arc<Coalescer<MockTransport>> {
    Arc::new(Coalescer::new(
        transport.clone(),
        Box::new(solana_rpc_payload_dedup_key),
    ))
}

fn get_slot(id: u64) -> Value {
    create_rpc_payload(id, "getSlot", Value::Array(Vec::new()))
}

fn result(envelope: &Value) -> Option<&Value> {
    envelope.get("result")
}

fn shared_cancellation(transport: &MockTransport, call: usize) -> anyhow::Result<CancellationToken> {
    transport
        .calls()
        .get(call)
        .and_then(|call| call.cancellation.clone())
        .ok_or_else(|| anyhow::anyhow!("call {call} has no cancellation token"))
}

#[tokio::test]
async fn identical_requests_share_one_call() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(42)).hold();
    let coalescer = coalescer(&transport);

    let first = coalescer.send(get_slot(1), None);
    let second = coalescer.send(get_slot(2), None);
    assert_eq!(transport.call_count(), 1);

    transport.release();
    let (first, second) = tokio::join!(first, second);

    assert_eq!(result(&first?), Some(&Value::Integer(42)));
    assert_eq!(result(&second?), Some(&Value::Integer(42)));
    assert_eq!(coalescer.pending_requests(), 0);

    Ok(())
}

#[tokio::test]
async fn different_requests_are_not_coalesced() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(42));
    let coalescer = coalescer(&transport);

    let slot = coalescer.send(get_slot(1), None);
    let height = coalescer.send(
        create_rpc_payload(2, "getBlockHeight", Value::Array(Vec::new())),
        None,
    );
    let (slot, height) = tokio::join!(slot, height);
    slot?;
    height?;

    assert_eq!(transport.call_count(), 2);

    Ok(())
}

#[tokio::test]
async fn payloads_without_key_are_sent_directly() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::Null);
    let coalescer = coalescer(&transport);

    let notification = Value::from_iter([("jsonrpc", Value::from("2.0")), ("method", Value::from("ping"))]);
    let (first, second) = tokio::join!(
        coalescer.send(notification.clone(), None),
        coalescer.send(notification, None)
    );
    first?;
    second?;

    assert_eq!(transport.call_count(), 2);
    assert!(
        transport
            .calls()
            .iter()
            .all(|call| call.cancellation.is_none())
    );

    Ok(())
}

#[tokio::test]
async fn settled_requests_are_not_reused() -> anyhow::Result<()> {
    let slot = AtomicU64::new(100);
    let transport = MockTransport::new(move |payload| {
        Ok(Value::from_iter([
            ("jsonrpc", Value::from("2.0")),
            ("id", payload.get("id").cloned().unwrap_or(Value::Null)),
            ("result", Value::from(slot.fetch_add(1, Ordering::Relaxed))),
        ]))
    });
    let coalescer = coalescer(&transport);

    let first = coalescer.send(get_slot(1), None).await?;
    assert_eq!(coalescer.pending_requests(), 0);

    let second = coalescer
        .send(get_slot(2), Some(CancellationToken::new()))
        .await?;
    assert_eq!(coalescer.pending_requests(), 0);

    assert_eq!(result(&first), Some(&Value::Integer(100)));
    assert_eq!(result(&second), Some(&Value::Integer(101)));
    assert_eq!(transport.call_count(), 2);

    Ok(())
}

#[tokio::test]
async fn new_turns_do_not_attach_to_pending_calls() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(1)).hold();
    let coalescer = coalescer(&transport);

    let first = coalescer.send(get_slot(1), None);
    assert_eq!(coalescer.pending_requests(), 1);

    coalescer.advance_turn();
    assert_eq!(coalescer.pending_requests(), 0);

    let second = coalescer.send(get_slot(2), None);
    assert_eq!(transport.call_count(), 2);
    assert_eq!(coalescer.pending_requests(), 1);

    transport.release();
    let (first, second) = tokio::join!(first, second);
    first?;
    second?;
    assert_eq!(coalescer.pending_requests(), 0);

    Ok(())
}

/// Issues a `getBlockHeight` request through the coalescer that wraps it
/// whenever it sends `getSlot`.
struct NestingTransport {
    coalescer: Weak<Coalescer<NestingTransport>>,
    inner: MockTransport,
}

impl RpcTransport for NestingTransport {
    fn send(
        &self,
        payload: Value,
        cancellation: Option<CancellationToken>,
    ) -> BoxFuture<'static, Result<Value, TransportError>> {
        let nested = if payload.get("method") == Some(&Value::from("getSlot")) {
            self.coalescer.upgrade().map(|coalescer| {
                coalescer.send(
                    create_rpc_payload(0, "getBlockHeight", Value::Array(Vec::new())),
                    None,
                )
            })
        } else {
            None
        };
        let call = self.inner.send(payload, cancellation);

        async move {
            if let Some(nested) = nested {
                nested.await?;
            }
            call.await
        }
        .boxed()
    }
}

#[tokio::test]
async fn transports_may_use_their_coalescer() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(5));
    let coalescer = Arc::new_cyclic(|coalescer| {
        Coalescer::new(
            NestingTransport {
                coalescer: coalescer.clone(),
                inner: transport.clone(),
            },
            Box::new(solana_rpc_payload_dedup_key),
        )
    });

    let envelope = coalescer.send(get_slot(1), None).await?;

    assert_eq!(result(&envelope), Some(&Value::Integer(5)));
    assert_eq!(transport.call_count(), 2);
    assert_eq!(coalescer.pending_requests(), 0);

    Ok(())
}

#[tokio::test]
async fn cancelling_one_consumer_keeps_the_call_alive() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(7)).hold();
    let coalescer = coalescer(&transport);

    let first_cancellation = CancellationToken::new();
    let first = tokio::spawn(coalescer.send(get_slot(1), Some(first_cancellation.clone())));
    let second = tokio::spawn(coalescer.send(get_slot(2), Some(CancellationToken::new())));

    first_cancellation.cancel("not interested");
    let first = first.await?;
    assert!(matches!(
        first,
        Err(TransportError::Cancelled { ref reason }) if reason == "not interested"
    ));

    let shared = shared_cancellation(&transport, 0)?;
    assert!(!shared.is_cancelled());

    transport.release();
    assert_eq!(result(&second.await??), Some(&Value::Integer(7)));
    assert!(!shared.is_cancelled());
    assert_eq!(transport.call_count(), 1);

    Ok(())
}

#[tokio::test]
async fn cancelling_every_consumer_aborts_the_call() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(7)).hold();
    let coalescer = coalescer(&transport);

    let first_cancellation = CancellationToken::new();
    let second_cancellation = CancellationToken::new();
    let first = tokio::spawn(coalescer.send(get_slot(1), Some(first_cancellation.clone())));
    let second = tokio::spawn(coalescer.send(get_slot(2), Some(second_cancellation.clone())));

    first_cancellation.cancel("first");
    assert!(matches!(first.await?, Err(TransportError::Cancelled { .. })));
    let shared = shared_cancellation(&transport, 0)?;
    assert!(!shared.is_cancelled());

    second_cancellation.cancel("second");
    assert!(matches!(
        second.await?,
        Err(TransportError::Cancelled { ref reason }) if reason == "second"
    ));
    assert!(shared.is_cancelled());

    // The aborted call is evicted, so a later caller of the same turn starts
    // a new one.
    let third = coalescer.send(get_slot(3), None);
    assert_eq!(transport.call_count(), 2);

    transport.release();
    assert_eq!(result(&third.await?), Some(&Value::Integer(7)));

    Ok(())
}

#[tokio::test]
async fn consumers_without_token_stay_attached() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(3)).hold();
    let coalescer = coalescer(&transport);

    let uncancellable = tokio::spawn(coalescer.send(get_slot(1), None));

    let cancellation = CancellationToken::new();
    let cancellable = tokio::spawn(coalescer.send(get_slot(2), Some(cancellation.clone())));
    cancellation.cancel("bye");
    assert!(matches!(
        cancellable.await?,
        Err(TransportError::Cancelled { .. })
    ));

    assert!(!shared_cancellation(&transport, 0)?.is_cancelled());

    transport.release();
    assert_eq!(result(&uncancellable.await??), Some(&Value::Integer(3)));

    Ok(())
}

#[tokio::test]
async fn dropping_a_future_detaches() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(3)).hold();
    let coalescer = coalescer(&transport);

    let future = coalescer.send(get_slot(1), Some(CancellationToken::new()));
    drop(future);

    assert!(shared_cancellation(&transport, 0)?.is_cancelled());

    Ok(())
}

#[tokio::test]
async fn transport_errors_fan_out() -> anyhow::Result<()> {
    let transport = MockTransport::new(|_payload| {
        Err(TransportError::other(std::io::Error::other("connection reset")))
    })
    .hold();
    let coalescer = coalescer(&transport);

    let first = coalescer.send(get_slot(1), None);
    let second = coalescer.send(get_slot(2), Some(CancellationToken::new()));

    transport.release();
    let (first, second) = tokio::join!(first, second);

    for outcome in [first, second] {
        let error = outcome.expect_err("transport failure");
        assert!(matches!(error, TransportError::Other(_)));
        assert_eq!(error.to_string(), "connection reset");
    }
    assert_eq!(transport.call_count(), 1);

    Ok(())
}
