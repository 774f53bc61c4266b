use std::{
    pin::pin,
    sync::atomic::{AtomicU64, Ordering},
};

use futures::FutureExt as _;
use solana_rpc_client::{RpcClient, RpcClientConfig, RpcClientError, test_utils::MockTransport};
use solana_rpc_errors::SolanaErrorCode;
use solana_rpc_transformers::{Commitment, IntegerOverflowPolicy, RequestTransformerConfig};
use solana_rpc_value::Value;

fn client(transport: &MockTransport, request: RequestTransformerConfig) -> RpcClient<MockTransport> {
    RpcClient::new(
        transport.clone(),
        RpcClientConfig {
            request,
            ..RpcClientConfig::default()
        },
    )
}

fn sent_params(transport: &MockTransport, call: usize) -> Option<Value> {
    transport
        .calls()
        .get(call)
        .and_then(|call| call.payload.get("params").cloned())
}

#[tokio::test]
async fn get_account_info_round_trip() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from_json_str(
        r#"{"context":{"slot":1},"value":{"lamports":1000000000,"owner":"11111111111111111111111111111111","executable":false,"rentEpoch":18446744073709551615,"space":0,"data":["","base64"]}}"#,
    )?);
    let client = client(
        &transport,
        RequestTransformerConfig {
            default_commitment: Some(Commitment::Confirmed),
            ..RequestTransformerConfig::default()
        },
    );

    let result = client
        .request("getAccountInfo", &Value::from_json_str(r#"["ADDR"]"#)?, None)
        .await?;

    assert_eq!(
        sent_params(&transport, 0),
        Some(Value::from_json_str(r#"["ADDR",{"commitment":"confirmed"}]"#)?)
    );

    let value = result.get("value");
    assert_eq!(
        value.and_then(|value| value.get("lamports")),
        Some(&Value::Integer(1_000_000_000))
    );
    assert_eq!(
        value.and_then(|value| value.get("rentEpoch")),
        Some(&Value::Integer(18_446_744_073_709_551_615))
    );

    Ok(())
}

#[tokio::test]
async fn node_errors_become_solana_errors() -> anyhow::Result<()> {
    let transport = MockTransport::new(|_payload| {
        Value::from_json_str(
            r#"{"jsonrpc":"2.0","id":"0","error":{"code":-32002,"message":"Transaction simulation failed","data":{"err":"BlockhashNotFound","logs":[]}}}"#,
        )
        .map_err(solana_rpc_client::TransportError::other)
    });
    let client = client(&transport, RequestTransformerConfig::default());

    let error = client
        .request(
            "sendTransaction",
            &Value::from_json_str(r#"["AQ=="]"#)?,
            None,
        )
        .await
        .expect_err("preflight failure");

    let RpcClientError::Solana(error) = error else {
        anyhow::bail!("expected a Solana error");
    };
    assert!(error.is(SolanaErrorCode::JsonRpcServerErrorSendTransactionPreflightFailure));
    assert!(
        error
            .cause()
            .is_some_and(|cause| cause.is(SolanaErrorCode::TransactionErrorBlockhashNotFound))
    );

    Ok(())
}

#[tokio::test]
async fn rejected_overflows_are_never_sent() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::Null);
    let client = client(
        &transport,
        RequestTransformerConfig {
            integer_overflow: IntegerOverflowPolicy::Reject,
            ..RequestTransformerConfig::default()
        },
    );

    let error = client
        .request(
            "getBlock",
            &Value::Array(vec![Value::Integer(1 << 60)]),
            None,
        )
        .await
        .expect_err("integer overflow");

    assert!(matches!(
        error,
        RpcClientError::Solana(ref error) if error.is(SolanaErrorCode::RpcIntegerOverflow)
    ));
    assert_eq!(transport.call_count(), 0);

    Ok(())
}

#[tokio::test]
async fn concurrent_requests_share_one_call() -> anyhow::Result<()> {
    let transport = MockTransport::with_result(Value::from(99)).hold();
    let client = client(&transport, RequestTransformerConfig::default());
    let params = Value::Array(Vec::new());

    let mut first = pin!(client.request("getSlot", &params, None));
    let mut second = pin!(client.request("getSlot", &params, None));
    assert!(first.as_mut().now_or_never().is_none());
    assert!(second.as_mut().now_or_never().is_none());
    assert_eq!(transport.call_count(), 1);

    transport.release();
    let (first, second) = tokio::join!(first, second);
    assert_eq!(first?, Value::Integer(99));
    assert_eq!(second?, Value::Integer(99));
    assert_eq!(transport.call_count(), 1);

    Ok(())
}

#[tokio::test]
async fn sequential_requests_get_fresh_results() -> anyhow::Result<()> {
    let slot = AtomicU64::new(100);
    let transport = MockTransport::new(move |payload| {
        Ok(Value::from_iter([
            ("jsonrpc", Value::from("2.0")),
            ("id", payload.get("id").cloned().unwrap_or(Value::Null)),
            ("result", Value::from(slot.fetch_add(1, Ordering::Relaxed))),
        ]))
    });
    let client = client(&transport, RequestTransformerConfig::default());
    let params = Value::Array(Vec::new());

    let first = client.request("getSlot", &params, None).await?;
    tokio::task::yield_now().await;
    let second = client.request("getSlot", &params, None).await?;

    assert_eq!(first, Value::Integer(100));
    assert_eq!(second, Value::Integer(101));
    assert_eq!(transport.call_count(), 2);
    assert_eq!(client.coalescer().pending_requests(), 0);

    Ok(())
}
