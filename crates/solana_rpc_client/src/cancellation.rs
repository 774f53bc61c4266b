use std::sync::Arc;

use parking_lot::Mutex;

/// A token through which the holder signals that it is no longer interested
/// in the outcome of a request.
///
/// Clones share the same state. Only the first cancellation takes effect;
/// its reason is reported to every waiter.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    reason: Arc<Mutex<Option<String>>>,
    token: tokio_util::sync::CancellationToken,
}

impl CancellationToken {
    /// Constructs a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token with the provided reason. Has no effect if the token
    /// was already cancelled.
    pub fn cancel(&self, reason: impl Into<String>) {
        {
            let mut current = self.reason.lock();
            if current.is_some() {
                return;
            }

            *current = Some(reason.into());
        }

        self.token.cancel();
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The reason of the cancellation, if the token has been cancelled.
    pub fn reason(&self) -> Option<String> {
        self.reason.lock().clone()
    }

    /// Waits until the token is cancelled and returns the reason.
    pub async fn cancelled(&self) -> String {
        self.token.cancelled().await;

        // The reason is stored before the token is cancelled.
        self.reason().unwrap_or_default()
    }
}
