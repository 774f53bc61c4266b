use solana_rpc_value::Value;

/// Constructs a JSON-RPC 2.0 request.
pub fn create_rpc_payload(id: u64, method: &str, params: Value) -> Value {
    Value::from_iter([
        ("id", Value::from(id.to_string())),
        ("jsonrpc", Value::from("2.0")),
        ("method", Value::from(method)),
        ("params", params),
    ])
}
