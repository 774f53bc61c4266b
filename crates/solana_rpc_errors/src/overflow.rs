use solana_rpc_value::{KeyPath, KeyPathSegment};

use crate::{code::SolanaErrorCode, context::SolanaErrorContext, error::SolanaError};

impl SolanaError {
    /// Constructs the error raised when an outgoing request carries an
    /// integer that a host number cannot represent exactly.
    ///
    /// `key_path` is relative to the request parameters, so its first segment
    /// identifies the argument.
    pub fn integer_overflow(method_name: &str, key_path: &KeyPath, value: i128) -> Self {
        let argument_label = match key_path.segments().first() {
            Some(KeyPathSegment::Index(index)) => ordinal(index.saturating_add(1)),
            Some(segment) => format!("`{segment}`"),
            None => String::from("`params`"),
        };

        let path = key_path.segments().get(1..).and_then(|nested| {
            (!nested.is_empty()).then(|| {
                nested.iter().fold(String::new(), |mut path, segment| {
                    match segment {
                        KeyPathSegment::Index(index) => path.push_str(&format!("[{index}]")),
                        segment => {
                            if !path.is_empty() {
                                path.push('.');
                            }
                            path.push_str(&segment.to_string());
                        }
                    }
                    path
                })
            })
        });

        let optional_path_label = path
            .as_ref()
            .map_or_else(String::new, |path| format!(" at path `{path}`"));

        Self::new(
            SolanaErrorCode::RpcIntegerOverflow,
            SolanaErrorContext::IntegerOverflow {
                argument_label,
                key_path: key_path.clone(),
                method_name: method_name.to_owned(),
                optional_path_label,
                path,
                value,
            },
        )
    }
}

/// English ordinal of a one-based position: `1st`, `2nd`, `3rd`, `4th`, …
fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (1, last_two) if last_two != 11 => "st",
        (2, last_two) if last_two != 12 => "nd",
        (3, last_two) if last_two != 13 => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}
