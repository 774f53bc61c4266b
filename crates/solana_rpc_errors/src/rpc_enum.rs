use solana_rpc_value::Value;

use crate::code::SolanaErrorCode;

/// An enum variant as serialized by the node: either a bare tag or an object
/// with a single key mapping the tag to its payload.
pub(crate) struct RpcEnumVariant<'value> {
    pub name: String,
    pub payload: Option<&'value Value>,
}

impl<'value> RpcEnumVariant<'value> {
    pub fn from_value(value: &'value Value) -> Self {
        match value {
            Value::String(name) => Self {
                name: name.clone(),
                payload: None,
            },
            Value::Object(entries) => match entries.first() {
                Some((name, payload)) => Self {
                    name: name.clone(),
                    payload: Some(payload),
                },
                None => Self::unrecognized(value),
            },
            _ => Self::unrecognized(value),
        }
    }

    /// Derives the code from the tag's position in `ordered_names`.
    ///
    /// Returns `None` for tags that are not listed.
    pub fn code(&self, base_offset: i64, ordered_names: &[&str]) -> Option<SolanaErrorCode> {
        let position = ordered_names.iter().position(|name| *name == self.name)?;
        let offset = i64::try_from(position).ok()?;
        SolanaErrorCode::from_code(base_offset + offset)
    }

    fn unrecognized(value: &'value Value) -> Self {
        Self {
            name: value
                .to_json_string()
                .unwrap_or_else(|_error| String::from("unrecognized")),
            payload: None,
        }
    }
}

pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    value.as_integer().and_then(|integer| u64::try_from(integer).ok())
}
