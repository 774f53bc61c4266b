use proptest::prelude::*;
use solana_rpc_transformers::{RequestTransformer, ResponseTransformer};
use solana_rpc_value::{MAX_SAFE_INTEGER, Value};

proptest! {
    #[test]
    fn safe_integers_survive_the_wire(integer in -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER) {
        let request = RequestTransformer::default();
        let response = ResponseTransformer::default();

        let sent = request
            .transform("getFoo", &Value::Array(vec![Value::Integer(integer)]))
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let envelope = Value::from_iter([("result", sent)]);
        let received = response
            .transform("getFoo", &envelope)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(received, Value::Array(vec![Value::Integer(integer)]));
    }
}

#[test]
fn balances_keep_their_decimals() -> anyhow::Result<()> {
    let envelope = Value::from_json_str(
        r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":{"amount":"1","decimals":9,"uiAmount":1.0,"uiAmountString":"1"}}}"#,
    )?;

    let result = ResponseTransformer::default().transform("getTokenAccountBalance", &envelope)?;

    let value = result.get("value");
    assert_eq!(
        value.and_then(|value| value.get("decimals")),
        Some(&Value::Number(9.0))
    );
    assert_eq!(
        value.and_then(|value| value.get("uiAmount")),
        Some(&Value::Number(1.0))
    );
    assert_eq!(
        result.get("context").and_then(|context| context.get("slot")),
        Some(&Value::Integer(1))
    );

    Ok(())
}
