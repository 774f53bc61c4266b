use std::convert::Infallible;

use crate::{
    key_path::{KeyPath, KeyPathSegment},
    value::{Map, Value},
};

/// State threaded through a [`walk`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalState {
    key_path: KeyPath,
}

impl TraversalState {
    /// Constructs a state rooted at `key_path`.
    pub fn new(key_path: KeyPath) -> Self {
        Self { key_path }
    }

    /// Path from the root of the walk to the current node.
    pub fn key_path(&self) -> &KeyPath {
        &self.key_path
    }

    fn descend(&self, segment: impl Into<KeyPathSegment>) -> Self {
        Self {
            key_path: self.key_path.child(segment),
        }
    }
}

/// Rewrites a single leaf of a structural value.
pub trait LeafVisitor<ErrorT = Infallible> {
    /// Returns the replacement for `value`, located at `state.key_path()`.
    fn visit(&self, value: Value, state: &TraversalState) -> Result<Value, ErrorT>;
}

impl<FunctionT, ErrorT> LeafVisitor<ErrorT> for FunctionT
where
    FunctionT: Fn(Value, &TraversalState) -> Result<Value, ErrorT>,
{
    fn visit(&self, value: Value, state: &TraversalState) -> Result<Value, ErrorT> {
        self(value, state)
    }
}

/// Rebuilds `node`, passing every leaf through `visitors` in order.
///
/// Arrays and objects are recreated with the same shape; only leaves,
/// including [`Value::Absent`], are handed to the visitors. The first visitor
/// error aborts the walk.
pub fn walk<ErrorT>(
    node: &Value,
    visitors: &[&dyn LeafVisitor<ErrorT>],
    state: &TraversalState,
) -> Result<Value, ErrorT> {
    match node {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| walk(item, visitors, &state.descend(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| {
                let value = walk(value, visitors, &state.descend(key.as_str()))?;
                Ok((key.clone(), value))
            })
            .collect::<Result<Map, _>>()
            .map(Value::Object),
        leaf => visitors
            .iter()
            .try_fold(leaf.clone(), |value, visitor| visitor.visit(value, state)),
    }
}

/// [`walk`] with visitors that cannot fail.
pub fn walk_infallible(
    node: &Value,
    visitors: &[&dyn LeafVisitor],
    state: &TraversalState,
) -> Value {
    match walk(node, visitors, state) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
