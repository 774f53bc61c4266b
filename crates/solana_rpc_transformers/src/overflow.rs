use derive_more::Debug;
use dyn_clone::DynClone;
use solana_rpc_errors::SolanaError;
use solana_rpc_value::KeyPath;

/// An integer in the parameters of an outgoing request that a host number
/// cannot represent exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerOverflow<'request> {
    /// The RPC method being called.
    pub method: &'request str,
    /// Path to the integer, relative to the parameters.
    pub key_path: &'request KeyPath,
    /// The integer.
    pub value: i128,
}

impl IntegerOverflow<'_> {
    /// Converts the overflow into the corresponding coded error.
    pub fn to_error(&self) -> SolanaError {
        SolanaError::integer_overflow(self.method, self.key_path, self.value)
    }
}

/// Callback that decides whether an [`IntegerOverflow`] aborts the request.
pub trait IntegerOverflowHandler:
    Fn(&IntegerOverflow<'_>) -> Result<(), SolanaError> + DynClone + Send + Sync
{
}

impl<F> IntegerOverflowHandler for F where
    F: Fn(&IntegerOverflow<'_>) -> Result<(), SolanaError> + DynClone + Send + Sync
{
}

dyn_clone::clone_trait_object!(IntegerOverflowHandler);

/// How the request transformer treats integers beyond the safe range of a
/// host number.
#[derive(Clone, Debug, Default)]
pub enum IntegerOverflowPolicy {
    /// Downcast the integer, logging a warning about the precision loss.
    #[default]
    Permissive,
    /// Fail the request with an integer overflow error.
    Reject,
    /// Report the integer to a custom handler, which may fail the request.
    Handler(#[debug(skip)] Box<dyn IntegerOverflowHandler>),
}

impl IntegerOverflowPolicy {
    /// Constructs a policy that reports overflows to `handler`.
    pub fn handler(handler: impl IntegerOverflowHandler + 'static) -> Self {
        Self::Handler(Box::new(handler))
    }

    /// Reports `overflow` according to the policy.
    pub(crate) fn report(&self, overflow: &IntegerOverflow<'_>) -> Result<(), SolanaError> {
        match self {
            IntegerOverflowPolicy::Permissive => {
                log::warn!(
                    "Integer `{}` at `{}` of `{}` exceeds the safe range and loses precision",
                    overflow.value,
                    overflow.key_path,
                    overflow.method
                );
                Ok(())
            }
            IntegerOverflowPolicy::Reject => Err(overflow.to_error()),
            IntegerOverflowPolicy::Handler(handler) => handler(overflow),
        }
    }
}
