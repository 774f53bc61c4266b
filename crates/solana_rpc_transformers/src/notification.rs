use solana_rpc_value::Value;

use crate::{allowed_numeric::AllowedNumericKeyPaths, response::upcast};

/// Restores exact integers in the payloads of subscription notifications.
#[derive(Clone, Debug)]
pub struct NotificationTransformer {
    allowed_numeric_key_paths: AllowedNumericKeyPaths,
}

impl NotificationTransformer {
    /// Constructs a new instance.
    pub fn new(allowed_numeric_key_paths: AllowedNumericKeyPaths) -> Self {
        Self {
            allowed_numeric_key_paths,
        }
    }

    /// Upcasts the integers of a notification named `notification_name`.
    pub fn transform(&self, notification_name: &str, value: &Value) -> Value {
        upcast(value, &self.allowed_numeric_key_paths, notification_name)
    }
}

impl Default for NotificationTransformer {
    fn default() -> Self {
        Self::new(AllowedNumericKeyPaths::solana_rpc_subscriptions())
    }
}
