use sha3::{Digest, Sha3_256, digest::FixedOutput};
use solana_rpc_value::{Map, Value, ValueError};

/// Builds a SHA3-256 digest from a sequence of inputs.
#[derive(Clone, Debug)]
pub(crate) struct KeyHasher {
    hasher: Sha3_256,
}

// The methods take `mut self` instead of `&mut self` so that no key can be
// constructed once one of the inputs failed to hash.
impl KeyHasher {
    pub fn new() -> Self {
        Self {
            hasher: Sha3_256::new(),
        }
    }

    pub fn hash_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.hasher.update(bytes);

        self
    }

    /// Hashes the canonical JSON text of `value`, in which the keys of every
    /// object are sorted. Values that differ only in key order hash equally.
    pub fn hash_value(self, value: &Value) -> Result<Self, ValueError> {
        let text = canonicalize(value).to_json_string()?;

        Ok(self.hash_bytes(text))
    }

    pub fn finalize(self) -> String {
        hex::encode(self.hasher.finalize_fixed())
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => items.iter().map(canonicalize).collect(),
        Value::Object(entries) => {
            let mut entries = entries
                .iter()
                .map(|(key, value)| (key.clone(), canonicalize(value)))
                .collect::<Map>();
            entries.sort_keys();

            Value::Object(entries)
        }
        leaf => leaf.clone(),
    }
}
