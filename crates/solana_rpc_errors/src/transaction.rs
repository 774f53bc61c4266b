use solana_rpc_value::Value;

use crate::{
    code::SolanaErrorCode,
    context::SolanaErrorContext,
    error::SolanaError,
    instruction::instruction_error,
    rpc_enum::{as_u64, RpcEnumVariant},
};

const TRANSACTION_ERROR_CODE_BASE: i64 = 7_050_001;

/// Tags of the node's `TransactionError` enum, in the order of their codes.
/// New tags are only ever appended.
const ORDERED_TRANSACTION_ERROR_NAMES: &[&str] = &[
    "AccountInUse",
    "AccountLoadedTwice",
    "AccountNotFound",
    "ProgramAccountNotFound",
    "InsufficientFundsForFee",
    "InvalidAccountForFee",
    "AlreadyProcessed",
    "BlockhashNotFound",
    // `InstructionError` is decoded by `instruction_error`
    "CallChainTooDeep",
    "MissingSignatureForFee",
    "InvalidAccountIndex",
    "SignatureFailure",
    "InvalidProgramForExecution",
    "SanitizeFailure",
    "ClusterMaintenance",
    "AccountBorrowOutstanding",
    "WouldExceedMaxBlockCostLimit",
    "UnsupportedVersion",
    "InvalidWritableAccount",
    "WouldExceedMaxAccountCostLimit",
    "WouldExceedAccountDataBlockLimit",
    "TooManyAccountLocks",
    "AddressLookupTableNotFound",
    "InvalidAddressLookupTableOwner",
    "InvalidAddressLookupTableData",
    "InvalidAddressLookupTableIndex",
    "InvalidRentPayingAccount",
    "WouldExceedMaxVoteCostLimit",
    "WouldExceedAccountDataTotalLimit",
    "DuplicateInstruction",
    "InsufficientFundsForRent",
    "MaxLoadedAccountsDataSizeExceeded",
    "InvalidLoadedAccountsDataSizeLimit",
    "ResanitizationNeeded",
    "ProgramExecutionTemporarilyRestricted",
    "UnbalancedTransaction",
];

impl SolanaError {
    /// Decodes the `err` of a failed transaction, as found in simulation
    /// results and transaction statuses.
    pub fn from_transaction_error(error: &Value) -> Self {
        transaction_error(error)
    }
}

pub(crate) fn transaction_error(error: &Value) -> SolanaError {
    if let Some(Value::Array(arguments)) = error.get("InstructionError") {
        if let [index, inner] = arguments.as_slice() {
            if let Some(index) = as_u64(index) {
                return instruction_error(index, inner);
            }
        }
    }

    let variant = RpcEnumVariant::from_value(error);
    let context = variant
        .code(TRANSACTION_ERROR_CODE_BASE, ORDERED_TRANSACTION_ERROR_NAMES)
        .and_then(|code| Some((code, known_context(code, variant.payload)?)));

    match context {
        Some((code, context)) => SolanaError::new(code, context),
        None => SolanaError::new(
            SolanaErrorCode::TransactionErrorUnknown,
            SolanaErrorContext::UnknownTransaction {
                error_name: variant.name,
                transaction_error_context: variant.payload.cloned(),
            },
        ),
    }
}

/// Context of a listed tag, or `None` if its payload has an unexpected shape.
fn known_context(code: SolanaErrorCode, payload: Option<&Value>) -> Option<SolanaErrorContext> {
    match code {
        SolanaErrorCode::TransactionErrorDuplicateInstruction => {
            let index = payload.and_then(as_u64)?;
            Some(SolanaErrorContext::DuplicateInstruction { index })
        }
        SolanaErrorCode::TransactionErrorInsufficientFundsForRent
        | SolanaErrorCode::TransactionErrorProgramExecutionTemporarilyRestricted => {
            let account_index = payload
                .and_then(|payload| payload.get("account_index"))
                .and_then(as_u64)?;
            Some(SolanaErrorContext::Account { account_index })
        }
        _ => Some(SolanaErrorContext::None),
    }
}
