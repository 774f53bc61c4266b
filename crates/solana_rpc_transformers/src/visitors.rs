use std::convert::Infallible;

use solana_rpc_errors::SolanaError;
use solana_rpc_value::{KeyPath, LeafVisitor, MAX_SAFE_INTEGER, TraversalState, Value};

use crate::overflow::{IntegerOverflow, IntegerOverflowPolicy};

/// Reports integers beyond the safe range of a host number, without changing
/// them.
pub(crate) struct OverflowVisitor<'config> {
    pub method: &'config str,
    pub policy: &'config IntegerOverflowPolicy,
}

impl LeafVisitor<SolanaError> for OverflowVisitor<'_> {
    fn visit(&self, value: Value, state: &TraversalState) -> Result<Value, SolanaError> {
        let overflowing = match value {
            Value::Integer(integer) => {
                (!(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&integer)).then_some(integer)
            }
            _ => None,
        };

        if let Some(integer) = overflowing {
            self.policy.report(&IntegerOverflow {
                method: self.method,
                key_path: state.key_path(),
                value: integer,
            })?;
        }

        Ok(value)
    }
}

/// Converts wide integers to the nearest host number.
pub(crate) fn downcast<ErrorT>(value: Value, _state: &TraversalState) -> Result<Value, ErrorT> {
    Ok(match value {
        Value::Integer(integer) => Value::Number(host_number(integer)),
        other => other,
    })
}

/// Converts integral numbers to wide integers, unless their path matches one
/// of the allowed patterns, in which case they become host numbers.
pub(crate) struct UpcastVisitor<'config> {
    pub allowed_numeric_key_paths: &'config [KeyPath],
}

impl UpcastVisitor<'_> {
    fn is_allowed(&self, key_path: &KeyPath) -> bool {
        self.allowed_numeric_key_paths
            .iter()
            .any(|pattern| key_path.matches(pattern))
    }
}

impl LeafVisitor for UpcastVisitor<'_> {
    fn visit(&self, value: Value, state: &TraversalState) -> Result<Value, Infallible> {
        Ok(match value {
            Value::Integer(integer) if self.is_allowed(state.key_path()) => {
                Value::Number(host_number(integer))
            }
            Value::Number(_) if !self.is_allowed(state.key_path()) => {
                value.as_integer().map_or(value, Value::Integer)
            }
            other => other,
        })
    }
}

fn host_number(integer: i128) -> f64 {
    integer as f64
}
