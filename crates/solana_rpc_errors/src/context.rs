use solana_rpc_value::{KeyPath, Map, Value};

/// Code-specific context of a [`crate::SolanaError`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SolanaErrorContext {
    /// The error carries no context.
    #[default]
    None,
    /// The server sent a pre-formatted message instead of structured data.
    ServerMessage {
        /// The message as sent by the server.
        server_message: String,
    },
    /// Structured data supplied by the server, verbatim.
    Data(Map),
    /// Simulation result of a transaction that failed preflight, without its
    /// `err` member. The decoded `err` becomes the error's cause.
    PreflightFailure(Map),
    /// An instruction failed.
    Instruction {
        /// Position of the failing instruction within the transaction.
        index: u64,
    },
    /// A program returned a custom error code.
    CustomInstruction {
        /// The program-defined error code.
        code: u64,
        /// Position of the failing instruction within the transaction.
        index: u64,
    },
    /// Account data could not be serialized or deserialized.
    BorshIo {
        /// The encoded data, when the node reports it.
        encoded_data: Option<String>,
        /// Position of the failing instruction within the transaction.
        index: u64,
    },
    /// An instruction failed with an error this client does not know.
    UnknownInstruction {
        /// The tag reported by the node.
        error_name: String,
        /// Position of the failing instruction within the transaction.
        index: u64,
        /// The payload accompanying the tag, if any.
        instruction_error_context: Option<Value>,
    },
    /// A transaction contained the same instruction twice.
    DuplicateInstruction {
        /// Position of the duplicated instruction.
        index: u64,
    },
    /// A transaction error that concerns one account.
    Account {
        /// Position of the account within the transaction.
        account_index: u64,
    },
    /// A transaction failed with an error this client does not know.
    UnknownTransaction {
        /// The tag reported by the node.
        error_name: String,
        /// The payload accompanying the tag, if any.
        transaction_error_context: Option<Value>,
    },
    /// An outgoing request carried an integer beyond the safe range.
    IntegerOverflow {
        /// Ordinal of the offending argument, e.g. `3rd`.
        argument_label: String,
        /// Path to the offending value within the parameters.
        key_path: KeyPath,
        /// The RPC method being called.
        method_name: String,
        /// `` at path `…` `` for nested values, otherwise empty.
        optional_path_label: String,
        /// Path within the argument, for nested values.
        path: Option<String>,
        /// The offending value.
        value: i128,
    },
    /// The HTTP transport received an unsuccessful status.
    HttpError {
        /// The HTTP status code.
        status_code: u16,
        /// The status text or body.
        message: String,
    },
    /// The caller supplied HTTP headers that may not be overridden.
    HttpHeaderForbidden {
        /// The forbidden header names.
        headers: Vec<String>,
    },
}

impl SolanaErrorContext {
    /// Looks up the value of a message template variable.
    pub fn variable(&self, name: &str) -> Option<String> {
        match (self, name) {
            (Self::None, _) => None,
            (Self::ServerMessage { server_message }, "__serverMessage") => {
                Some(server_message.clone())
            }
            (Self::Data(entries) | Self::PreflightFailure(entries), name) => {
                entries.get(name).map(render_value)
            }
            (
                Self::Instruction { index }
                | Self::CustomInstruction { index, .. }
                | Self::BorshIo { index, .. }
                | Self::UnknownInstruction { index, .. }
                | Self::DuplicateInstruction { index },
                "index",
            ) => Some(index.to_string()),
            (Self::CustomInstruction { code, .. }, "code") => Some(code.to_string()),
            (Self::BorshIo { encoded_data, .. }, "encodedData") => encoded_data.clone(),
            (
                Self::UnknownInstruction { error_name, .. }
                | Self::UnknownTransaction { error_name, .. },
                "errorName",
            ) => Some(error_name.clone()),
            (
                Self::UnknownInstruction {
                    instruction_error_context: payload,
                    ..
                },
                "instructionErrorContext",
            )
            | (
                Self::UnknownTransaction {
                    transaction_error_context: payload,
                    ..
                },
                "transactionErrorContext",
            ) => payload.as_ref().map(render_value),
            (Self::Account { account_index }, "accountIndex") => Some(account_index.to_string()),
            (
                Self::IntegerOverflow {
                    argument_label,
                    key_path,
                    method_name,
                    optional_path_label,
                    path,
                    value,
                },
                name,
            ) => match name {
                "argumentLabel" => Some(argument_label.clone()),
                "keyPath" => Some(key_path.to_string()),
                "methodName" => Some(method_name.clone()),
                "optionalPathLabel" => Some(optional_path_label.clone()),
                "path" => path.clone(),
                "value" => Some(value.to_string()),
                _ => None,
            },
            (
                Self::HttpError {
                    status_code,
                    message,
                },
                name,
            ) => match name {
                "statusCode" => Some(status_code.to_string()),
                "message" => Some(message.clone()),
                _ => None,
            },
            (Self::HttpHeaderForbidden { headers }, "headers") => Some(headers.join(", ")),
            _ => None,
        }
    }
}

/// Renders a context value the way it reads inside a sentence: strings
/// without quotes and structures as JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::Absent => "undefined".to_owned(),
        Value::Null => "null".to_owned(),
        Value::Bool(value) => value.to_string(),
        Value::Integer(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        Value::Array(_) | Value::Object(_) => value
            .to_json_string()
            .unwrap_or_else(|_error| String::from("[unserializable]")),
    }
}
