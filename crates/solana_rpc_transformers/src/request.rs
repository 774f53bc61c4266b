use solana_rpc_errors::SolanaError;
use solana_rpc_value::{TraversalState, Value, walk};

use crate::{
    commitment::Commitment,
    options_position::OptionsObjectPositionConfig,
    overflow::IntegerOverflowPolicy,
    visitors::{OverflowVisitor, downcast},
};

const SEND_TRANSACTION: &str = "sendTransaction";

/// Configuration of a [`RequestTransformer`].
#[derive(Clone, Debug)]
pub struct RequestTransformerConfig {
    /// Commitment to apply to requests that do not specify one. `None` or
    /// [`Commitment::Finalized`] defer to the node's default.
    pub default_commitment: Option<Commitment>,
    /// Treatment of integers beyond the safe range of a host number.
    pub integer_overflow: IntegerOverflowPolicy,
    /// Position of each method's configuration object.
    pub options_object_positions: OptionsObjectPositionConfig,
}

impl Default for RequestTransformerConfig {
    fn default() -> Self {
        Self {
            default_commitment: None,
            integer_overflow: IntegerOverflowPolicy::default(),
            options_object_positions: OptionsObjectPositionConfig::solana_rpc(),
        }
    }
}

/// Prepares the parameters of an outgoing request for the wire.
#[derive(Clone, Debug, Default)]
pub struct RequestTransformer {
    config: RequestTransformerConfig,
}

impl RequestTransformer {
    /// Constructs a new instance.
    pub fn new(config: RequestTransformerConfig) -> Self {
        Self { config }
    }

    /// The transformer's configuration.
    pub fn config(&self) -> &RequestTransformerConfig {
        &self.config
    }

    /// Rewrites the parameters of a call to `method`.
    ///
    /// Integers beyond the safe range are reported to the overflow policy,
    /// after which every integer is converted to a host number. For methods
    /// with a configuration object, the default commitment is applied and
    /// redundant commitments are removed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, params)))]
    pub fn transform(&self, method: &str, params: &Value) -> Result<Value, SolanaError> {
        let overflow = OverflowVisitor {
            method,
            policy: &self.config.integer_overflow,
        };

        let mut params = walk(
            params,
            &[&overflow, &downcast::<SolanaError>],
            &TraversalState::default(),
        )?;

        if let Value::Array(params) = &mut params {
            if let Some(position) = self.config.options_object_positions.position(method) {
                apply_default_commitment(
                    params,
                    commitment_property(method),
                    position,
                    self.config.default_commitment,
                );

                if method == SEND_TRANSACTION {
                    force_processed_preflight(params, position);
                }
            }
        }

        Ok(params)
    }
}

fn commitment_property(method: &str) -> &'static str {
    if method == SEND_TRANSACTION {
        "preflightCommitment"
    } else {
        "commitment"
    }
}

/// Injects `default_commitment` into the configuration object at `position`
/// or strips a commitment that matches the node's default.
///
/// Values at `position` other than objects are never touched.
fn apply_default_commitment(
    params: &mut Vec<Value>,
    property: &str,
    position: usize,
    default_commitment: Option<Commitment>,
) {
    let injected = default_commitment
        .filter(|commitment| *commitment != Commitment::Finalized)
        .map(|commitment| Value::from(commitment.as_str()));

    match params.get_mut(position) {
        None => {
            if let Some(commitment) = injected {
                params.resize(position, Value::Absent);
                params.push(Value::from_iter([(property, commitment)]));
            }
        }
        Some(slot @ Value::Absent) => {
            if let Some(commitment) = injected {
                *slot = Value::from_iter([(property, commitment)]);
            }
        }
        Some(Value::Object(options)) => match options.get(property) {
            None => {
                if let Some(commitment) = injected {
                    options.insert(property.to_owned(), commitment);
                }
            }
            Some(existing) if is_node_default_commitment(existing) => {
                options.shift_remove(property);

                if options.is_empty() {
                    if position + 1 == params.len() {
                        params.truncate(position);
                    } else if let Some(slot) = params.get_mut(position) {
                        *slot = Value::Absent;
                    }
                }
            }
            Some(_) => {}
        },
        Some(_) => {}
    }
}

/// Whether an explicit commitment is equivalent to leaving it out.
fn is_node_default_commitment(commitment: &Value) -> bool {
    match commitment {
        Value::Absent | Value::Null | Value::Bool(false) => true,
        Value::Integer(integer) => *integer == 0,
        Value::Number(number) => *number == 0.0 || number.is_nan(),
        Value::String(commitment) => {
            commitment.is_empty() || commitment == Commitment::Finalized.as_str()
        }
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Nodes ignore `skipPreflight` unless the preflight commitment is
/// `processed`.
fn force_processed_preflight(params: &mut [Value], position: usize) {
    let Some(Value::Object(options)) = params.get_mut(position) else {
        return;
    };

    if options.get("skipPreflight").and_then(Value::as_bool) == Some(true) {
        options.insert(
            "preflightCommitment".to_owned(),
            Value::from(Commitment::Processed.as_str()),
        );
    }
}
