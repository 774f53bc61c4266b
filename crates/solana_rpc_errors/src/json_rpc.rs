use solana_rpc_value::{Map, Value};

use crate::{
    code::SolanaErrorCode, context::SolanaErrorContext, error::SolanaError,
    transaction::transaction_error,
};

/// Codes for which the node sends a pre-formatted message and no structured
/// data. The message is kept in the context instead of being dropped.
const SERVER_MESSAGE_CODES: &[SolanaErrorCode] = &[
    SolanaErrorCode::JsonRpcInternalError,
    SolanaErrorCode::JsonRpcInvalidParams,
    SolanaErrorCode::JsonRpcInvalidRequest,
    SolanaErrorCode::JsonRpcMethodNotFound,
    SolanaErrorCode::JsonRpcParseError,
    SolanaErrorCode::JsonRpcScanError,
    SolanaErrorCode::JsonRpcServerErrorBlockCleanedUp,
    SolanaErrorCode::JsonRpcServerErrorBlockNotAvailable,
    SolanaErrorCode::JsonRpcServerErrorBlockStatusNotAvailableYet,
    SolanaErrorCode::JsonRpcServerErrorKeyExcludedFromSecondaryIndex,
    SolanaErrorCode::JsonRpcServerErrorLongTermStorageSlotSkipped,
    SolanaErrorCode::JsonRpcServerErrorSlotSkipped,
    SolanaErrorCode::JsonRpcServerErrorTransactionPrecompileVerificationFailure,
    SolanaErrorCode::JsonRpcServerErrorUnsupportedTransactionVersion,
];

impl SolanaError {
    /// Decodes the `error` member of a JSON-RPC response.
    ///
    /// A member without an integral `code` is treated as an internal error,
    /// with the member itself as the server message.
    pub fn from_rpc_error_response(error: &Value) -> Self {
        let message = error.get("message").and_then(Value::as_str);
        let data = error.get("data").unwrap_or(&Value::Absent);

        match error
            .get("code")
            .and_then(Value::as_integer)
            .and_then(|code| i64::try_from(code).ok())
        {
            Some(code) => Self::from_json_rpc_error(code, message.unwrap_or_default(), data),
            None => {
                let server_message = message.map_or_else(
                    || {
                        error
                            .to_json_string()
                            .unwrap_or_else(|_error| String::from("malformed error response"))
                    },
                    str::to_owned,
                );
                Self::new(
                    SolanaErrorCode::JsonRpcInternalError,
                    SolanaErrorContext::ServerMessage { server_message },
                )
            }
        }
    }

    /// Maps a JSON-RPC error to a coded error.
    pub fn from_json_rpc_error(code: i64, message: &str, data: &Value) -> Self {
        let registered = SolanaErrorCode::from_code(code);

        if registered == Some(SolanaErrorCode::JsonRpcServerErrorSendTransactionPreflightFailure) {
            return preflight_failure(data);
        }

        let context = if registered.is_some_and(|code| SERVER_MESSAGE_CODES.contains(&code)) {
            SolanaErrorContext::ServerMessage {
                server_message: message.to_owned(),
            }
        } else if let Value::Object(entries) = data {
            SolanaErrorContext::Data(entries.clone())
        } else {
            SolanaErrorContext::None
        };

        Self::from_raw_code(code, context)
    }
}

fn preflight_failure(data: &Value) -> SolanaError {
    let mut simulation = data.as_object().cloned().unwrap_or_else(Map::new);
    let err = simulation.shift_remove("err");

    let error = SolanaError::new(
        SolanaErrorCode::JsonRpcServerErrorSendTransactionPreflightFailure,
        SolanaErrorContext::PreflightFailure(simulation),
    );

    match err {
        Some(err) if !matches!(err, Value::Null | Value::Absent) => {
            error.with_cause(transaction_error(&err))
        }
        _ => error,
    }
}
