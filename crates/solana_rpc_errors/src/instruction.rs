use solana_rpc_value::Value;

use crate::{
    code::SolanaErrorCode,
    context::SolanaErrorContext,
    error::SolanaError,
    rpc_enum::{as_u64, RpcEnumVariant},
};

const INSTRUCTION_ERROR_CODE_BASE: i64 = 4_615_001;

/// Tags of the node's `InstructionError` enum, in the order of their codes.
/// New tags are only ever appended.
const ORDERED_INSTRUCTION_ERROR_NAMES: &[&str] = &[
    "GenericError",
    "InvalidArgument",
    "InvalidInstructionData",
    "InvalidAccountData",
    "AccountDataTooSmall",
    "InsufficientFunds",
    "IncorrectProgramId",
    "MissingRequiredSignature",
    "AccountAlreadyInitialized",
    "UninitializedAccount",
    "UnbalancedInstruction",
    "ModifiedProgramId",
    "ExternalAccountLamportSpend",
    "ExternalAccountDataModified",
    "ReadonlyLamportChange",
    "ReadonlyDataModified",
    "DuplicateAccountIndex",
    "ExecutableModified",
    "RentEpochModified",
    "NotEnoughAccountKeys",
    "AccountDataSizeChanged",
    "AccountNotExecutable",
    "AccountBorrowFailed",
    "AccountBorrowOutstanding",
    "DuplicateAccountOutOfSync",
    "Custom",
    "InvalidError",
    "ExecutableDataModified",
    "ExecutableLamportChange",
    "ExecutableAccountNotRentExempt",
    "UnsupportedProgramId",
    "CallDepth",
    "MissingAccount",
    "ReentrancyNotAllowed",
    "MaxSeedLengthExceeded",
    "InvalidSeeds",
    "InvalidRealloc",
    "ComputationalBudgetExceeded",
    "PrivilegeEscalation",
    "ProgramEnvironmentSetupFailure",
    "ProgramFailedToComplete",
    "ProgramFailedToCompile",
    "Immutable",
    "IncorrectAuthority",
    "BorshIoError",
    "AccountNotRentExempt",
    "InvalidAccountOwner",
    "ArithmeticOverflow",
    "UnsupportedSysvar",
    "IllegalOwner",
    "MaxAccountsDataAllocationsExceeded",
    "MaxAccountsExceeded",
    "MaxInstructionTraceLengthExceeded",
    "BuiltinProgramsMustConsumeComputeUnits",
];

impl SolanaError {
    /// Decodes the error of the instruction at `index`.
    pub fn from_instruction_error(index: u64, error: &Value) -> Self {
        instruction_error(index, error)
    }
}

pub(crate) fn instruction_error(index: u64, error: &Value) -> SolanaError {
    let variant = RpcEnumVariant::from_value(error);

    let context = variant
        .code(INSTRUCTION_ERROR_CODE_BASE, ORDERED_INSTRUCTION_ERROR_NAMES)
        .and_then(|code| Some((code, known_context(code, index, variant.payload)?)));

    match context {
        Some((code, context)) => SolanaError::new(code, context),
        None => SolanaError::new(
            SolanaErrorCode::InstructionErrorUnknown,
            SolanaErrorContext::UnknownInstruction {
                error_name: variant.name,
                index,
                instruction_error_context: variant.payload.cloned(),
            },
        ),
    }
}

fn known_context(
    code: SolanaErrorCode,
    index: u64,
    payload: Option<&Value>,
) -> Option<SolanaErrorContext> {
    match code {
        SolanaErrorCode::InstructionErrorCustom => {
            let code = payload.and_then(as_u64)?;
            Some(SolanaErrorContext::CustomInstruction { code, index })
        }
        SolanaErrorCode::InstructionErrorBorshIoError => Some(SolanaErrorContext::BorshIo {
            encoded_data: payload.and_then(Value::as_str).map(str::to_owned),
            index,
        }),
        _ => Some(SolanaErrorContext::Instruction { index }),
    }
}
