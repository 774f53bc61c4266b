use solana_rpc_errors::SolanaError;
use solana_rpc_value::{TraversalState, Value, walk_infallible};

use crate::{allowed_numeric::AllowedNumericKeyPaths, visitors::UpcastVisitor};

/// Configuration of a [`ResponseTransformer`].
#[derive(Clone, Debug)]
pub struct ResponseTransformerConfig {
    /// Paths of each method's result that remain host numbers.
    pub allowed_numeric_key_paths: AllowedNumericKeyPaths,
}

impl Default for ResponseTransformerConfig {
    fn default() -> Self {
        Self {
            allowed_numeric_key_paths: AllowedNumericKeyPaths::solana_rpc(),
        }
    }
}

/// Turns a JSON-RPC response envelope into either a coded error or a result
/// with exact integers.
#[derive(Clone, Debug, Default)]
pub struct ResponseTransformer {
    config: ResponseTransformerConfig,
}

impl ResponseTransformer {
    /// Constructs a new instance.
    pub fn new(config: ResponseTransformerConfig) -> Self {
        Self { config }
    }

    /// The transformer's configuration.
    pub fn config(&self) -> &ResponseTransformerConfig {
        &self.config
    }

    /// Unwraps the response `envelope` of a call to `method`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, envelope)))]
    pub fn transform(&self, method: &str, envelope: &Value) -> Result<Value, SolanaError> {
        if !matches!(envelope, Value::Object(_)) {
            log::error!("Response to `{method}` is not a JSON-RPC envelope: {envelope:?}");
        }

        match envelope.get("error") {
            None | Some(Value::Absent | Value::Null) => {}
            Some(error) => return Err(SolanaError::from_rpc_error_response(error)),
        }

        let result = envelope.get("result").unwrap_or(&Value::Absent);

        Ok(upcast(
            result,
            &self.config.allowed_numeric_key_paths,
            method,
        ))
    }
}

pub(crate) fn upcast(value: &Value, allowed: &AllowedNumericKeyPaths, method: &str) -> Value {
    let upcast = UpcastVisitor {
        allowed_numeric_key_paths: allowed.key_paths(method),
    };

    walk_infallible(value, &[&upcast], &TraversalState::default())
}
