use solana_rpc_value::Value;

use crate::hasher::KeyHasher;

/// Computes the key under which concurrent identical requests are coalesced.
///
/// Only JSON-RPC 2.0 requests with a string `method` and a `params` member
/// have a key. The key covers the method and the parameters but not the
/// request `id`.
pub fn solana_rpc_payload_dedup_key(payload: &Value) -> Option<String> {
    let Value::Object(members) = payload else {
        return None;
    };

    if members.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return None;
    }

    let method = members.get("method").and_then(Value::as_str)?;
    let params = members.get("params").filter(|params| !params.is_absent())?;

    KeyHasher::new()
        .hash_value(&Value::Array(vec![Value::from(method), params.clone()]))
        .ok()
        .map(KeyHasher::finalize)
}
