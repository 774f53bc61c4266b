use crate::{code::SolanaErrorCode, context::SolanaErrorContext};

/// A coded error produced by the Solana RPC client.
///
/// The numeric code identifies the kind of failure; the context carries the
/// code-specific details. Codes sent by a node that are not part of
/// [`SolanaErrorCode`] are preserved as-is and reported by
/// [`SolanaError::code`], while [`SolanaError::error_code`] returns `None`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SolanaError {
    code: i64,
    context: SolanaErrorContext,
    message: String,
    #[source]
    cause: Option<Box<SolanaError>>,
}

impl SolanaError {
    /// Constructs an error with a registered code.
    pub fn new(code: SolanaErrorCode, context: SolanaErrorContext) -> Self {
        Self::from_raw_code(code.code(), context)
    }

    /// Constructs an error from a numeric code that may not be registered.
    pub fn from_raw_code(code: i64, context: SolanaErrorContext) -> Self {
        let message = match SolanaErrorCode::from_code(code) {
            Some(registered) => format_message(registered.message_template(), &context),
            None => format!("Solana error #{code}"),
        };

        Self {
            code,
            context,
            message,
            cause: None,
        }
    }

    /// Attaches the error that led to this one.
    pub fn with_cause(mut self, cause: SolanaError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The numeric code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The registered code, if the numeric code is known to this client.
    pub fn error_code(&self) -> Option<SolanaErrorCode> {
        SolanaErrorCode::from_code(self.code)
    }

    /// Whether this error has the given code.
    pub fn is(&self, code: SolanaErrorCode) -> bool {
        self.code == code.code()
    }

    /// The code-specific context.
    pub fn context(&self) -> &SolanaErrorContext {
        &self.context
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error that led to this one, if any.
    pub fn cause(&self) -> Option<&SolanaError> {
        self.cause.as_deref()
    }
}

/// Replaces every `$name` in `template` with the matching context variable.
/// Unknown variables are left in place.
fn format_message(template: &str, context: &SolanaErrorContext) -> String {
    let mut message = String::with_capacity(template.len());

    let mut chars = template.chars().peekable();
    while let Some(character) = chars.next() {
        if character != '$' {
            message.push(character);
            continue;
        }

        let mut name = String::new();
        while let Some(next) = chars.next_if(|next| next.is_ascii_alphanumeric() || *next == '_') {
            name.push(next);
        }

        match context.variable(&name) {
            Some(value) if !name.is_empty() => message.push_str(&value),
            _ => {
                message.push('$');
                message.push_str(&name);
            }
        }
    }

    message
}
