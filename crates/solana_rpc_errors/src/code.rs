macro_rules! solana_error_codes {
    ($(
        $(#[$meta:meta])*
        $variant:ident = $code:literal => $message:literal,
    )*) => {
        /// Registry of every coded error the client can produce.
        ///
        /// Codes are append-only: once published, a code is never reused,
        /// renumbered or given a different context shape.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i64)]
        pub enum SolanaErrorCode {
            $(
                $(#[$meta])*
                $variant = $code,
            )*
        }

        impl SolanaErrorCode {
            /// All registered codes, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Numeric value of the code.
            pub const fn code(self) -> i64 {
                self as i64
            }

            /// Looks up a registered code by its numeric value.
            pub const fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Message template, with `$name` placeholders that are filled
            /// from the error's context.
            pub const fn message_template(self) -> &'static str {
                match self {
                    $(Self::$variant => $message,)*
                }
            }
        }
    };
}

solana_error_codes! {
    // Standard JSON-RPC errors.
    /// Invalid JSON was received by the server.
    JsonRpcParseError = -32700
        => "JSON-RPC error: An error occurred on the server while parsing the JSON text ($__serverMessage)",
    /// Internal JSON-RPC error.
    JsonRpcInternalError = -32603 => "JSON-RPC error: Internal JSON-RPC error ($__serverMessage)",
    /// Invalid method parameters.
    JsonRpcInvalidParams = -32602 => "JSON-RPC error: Invalid method parameter(s) ($__serverMessage)",
    /// The method does not exist or is not available.
    JsonRpcMethodNotFound = -32601
        => "JSON-RPC error: The method does not exist / is not available ($__serverMessage)",
    /// The JSON sent is not a valid request object.
    JsonRpcInvalidRequest = -32600
        => "JSON-RPC error: The JSON sent is not a valid `Request` object ($__serverMessage)",

    // Solana server errors.
    /// The request requires a slot the node has not reached yet.
    JsonRpcServerErrorMinContextSlotNotReached = -32016 => "Minimum context slot has not been reached",
    /// The transaction version is not supported by the requester.
    JsonRpcServerErrorUnsupportedTransactionVersion = -32015 => "$__serverMessage",
    /// The status of the block is not available yet.
    JsonRpcServerErrorBlockStatusNotAvailableYet = -32014 => "$__serverMessage",
    /// Signature count does not match the message.
    JsonRpcServerErrorTransactionSignatureLenMismatch = -32013 => "Transaction signature length mismatch",
    /// A scan of the accounts index failed.
    JsonRpcScanError = -32012 => "$__serverMessage",
    /// The node does not keep transaction history.
    JsonRpcServerErrorTransactionHistoryNotAvailable = -32011
        => "Transaction history is not available from this node",
    /// The key is excluded from the node's secondary indices.
    JsonRpcServerErrorKeyExcludedFromSecondaryIndex = -32010 => "$__serverMessage",
    /// The slot was skipped or is missing from long term storage.
    JsonRpcServerErrorLongTermStorageSlotSkipped = -32009 => "$__serverMessage",
    /// The node has no snapshot.
    JsonRpcServerErrorNoSnapshot = -32008 => "No snapshot",
    /// The slot was skipped or is missing due to ledger jump.
    JsonRpcServerErrorSlotSkipped = -32007 => "$__serverMessage",
    /// A precompile rejected the transaction.
    JsonRpcServerErrorTransactionPrecompileVerificationFailure = -32006 => "$__serverMessage",
    /// The node is behind the cluster.
    JsonRpcServerErrorNodeUnhealthy = -32005 => "Node is unhealthy; behind by $numSlotsBehind slots",
    /// The block is not available.
    JsonRpcServerErrorBlockNotAvailable = -32004 => "$__serverMessage",
    /// Signature verification failed.
    JsonRpcServerErrorTransactionSignatureVerificationFailure = -32003
        => "Transaction signature verification failure",
    /// Transaction simulation failed before the transaction was sent.
    JsonRpcServerErrorSendTransactionPreflightFailure = -32002 => "Transaction simulation failed",
    /// The block was cleaned up.
    JsonRpcServerErrorBlockCleanedUp = -32001 => "$__serverMessage",

    // Instruction errors.
    /// An instruction failed with an error unknown to this client.
    InstructionErrorUnknown = 4_615_000 => "The instruction failed with the error `$errorName`",
    InstructionErrorGenericError = 4_615_001 => "generic instruction error",
    InstructionErrorInvalidArgument = 4_615_002 => "invalid program argument",
    InstructionErrorInvalidInstructionData = 4_615_003 => "invalid instruction data",
    InstructionErrorInvalidAccountData = 4_615_004 => "invalid account data for instruction",
    InstructionErrorAccountDataTooSmall = 4_615_005 => "account data too small for instruction",
    InstructionErrorInsufficientFunds = 4_615_006 => "insufficient funds for instruction",
    InstructionErrorIncorrectProgramId = 4_615_007 => "incorrect program id for instruction",
    InstructionErrorMissingRequiredSignature = 4_615_008 => "missing required signature for instruction",
    InstructionErrorAccountAlreadyInitialized = 4_615_009 => "instruction requires an uninitialized account",
    InstructionErrorUninitializedAccount = 4_615_010 => "instruction requires an initialized account",
    InstructionErrorUnbalancedInstruction = 4_615_011
        => "sum of account balances before and after instruction do not match",
    InstructionErrorModifiedProgramId = 4_615_012
        => "instruction illegally modified the program id of an account",
    InstructionErrorExternalAccountLamportSpend = 4_615_013
        => "instruction spent from the balance of an account it does not own",
    InstructionErrorExternalAccountDataModified = 4_615_014
        => "instruction modified data of an account it does not own",
    InstructionErrorReadonlyLamportChange = 4_615_015
        => "instruction changed the balance of a read-only account",
    InstructionErrorReadonlyDataModified = 4_615_016 => "instruction modified data of a read-only account",
    InstructionErrorDuplicateAccountIndex = 4_615_017 => "instruction contains duplicate accounts",
    InstructionErrorExecutableModified = 4_615_018 => "instruction changed executable bit of an account",
    InstructionErrorRentEpochModified = 4_615_019 => "instruction modified rent epoch of an account",
    InstructionErrorNotEnoughAccountKeys = 4_615_020 => "insufficient account keys for instruction",
    InstructionErrorAccountDataSizeChanged = 4_615_021
        => "program other than the account's owner changed the size of the account data",
    InstructionErrorAccountNotExecutable = 4_615_022 => "instruction expected an executable account",
    InstructionErrorAccountBorrowFailed = 4_615_023
        => "instruction tries to borrow reference for an account which is already borrowed",
    InstructionErrorAccountBorrowOutstanding = 4_615_024
        => "instruction left account with an outstanding borrowed reference",
    InstructionErrorDuplicateAccountOutOfSync = 4_615_025
        => "instruction modifications of multiply-passed account differ",
    InstructionErrorCustom = 4_615_026 => "custom program error: #$code",
    InstructionErrorInvalidError = 4_615_027 => "program returned invalid error code",
    InstructionErrorExecutableDataModified = 4_615_028 => "instruction changed executable accounts data",
    InstructionErrorExecutableLamportChange = 4_615_029
        => "instruction changed the balance of an executable account",
    InstructionErrorExecutableAccountNotRentExempt = 4_615_030 => "executable accounts must be rent exempt",
    InstructionErrorUnsupportedProgramId = 4_615_031 => "Unsupported program id",
    InstructionErrorCallDepth = 4_615_032 => "Cross-program invocation call depth too deep",
    InstructionErrorMissingAccount = 4_615_033 => "An account required by the instruction is missing",
    InstructionErrorReentrancyNotAllowed = 4_615_034
        => "Cross-program invocation reentrancy not allowed for this instruction",
    InstructionErrorMaxSeedLengthExceeded = 4_615_035
        => "Length of the seed is too long for address generation",
    InstructionErrorInvalidSeeds = 4_615_036 => "Provided seeds do not result in a valid address",
    InstructionErrorInvalidRealloc = 4_615_037 => "Failed to reallocate account data",
    InstructionErrorComputationalBudgetExceeded = 4_615_038 => "Computational budget exceeded",
    InstructionErrorPrivilegeEscalation = 4_615_039
        => "Cross-program invocation with unauthorized signer or writable account",
    InstructionErrorProgramEnvironmentSetupFailure = 4_615_040
        => "Failed to create program execution environment",
    InstructionErrorProgramFailedToComplete = 4_615_041 => "Program failed to complete",
    InstructionErrorProgramFailedToCompile = 4_615_042 => "Program failed to compile",
    InstructionErrorImmutable = 4_615_043 => "Account is immutable",
    InstructionErrorIncorrectAuthority = 4_615_044 => "Incorrect authority provided",
    InstructionErrorBorshIoError = 4_615_045 => "Failed to serialize or deserialize account data: $encodedData",
    InstructionErrorAccountNotRentExempt = 4_615_046
        => "An account does not have enough lamports to be rent-exempt",
    InstructionErrorInvalidAccountOwner = 4_615_047 => "Invalid account owner",
    InstructionErrorArithmeticOverflow = 4_615_048 => "Program arithmetic overflowed",
    InstructionErrorUnsupportedSysvar = 4_615_049 => "Unsupported sysvar",
    InstructionErrorIllegalOwner = 4_615_050 => "Provided owner is not allowed",
    InstructionErrorMaxAccountsDataAllocationsExceeded = 4_615_051
        => "Accounts data allocations exceeded the maximum allowed per transaction",
    InstructionErrorMaxAccountsExceeded = 4_615_052 => "Max accounts exceeded",
    InstructionErrorMaxInstructionTraceLengthExceeded = 4_615_053 => "Max instruction trace length exceeded",
    InstructionErrorBuiltinProgramsMustConsumeComputeUnits = 4_615_054
        => "Builtin programs must consume compute units",

    // Transaction errors.
    /// A transaction failed with an error unknown to this client.
    TransactionErrorUnknown = 7_050_000 => "The transaction failed with the error `$errorName`",
    TransactionErrorAccountInUse = 7_050_001 => "Account in use",
    TransactionErrorAccountLoadedTwice = 7_050_002 => "Account loaded twice",
    TransactionErrorAccountNotFound = 7_050_003
        => "Attempt to debit an account but found no record of a prior credit.",
    TransactionErrorProgramAccountNotFound = 7_050_004 => "Attempt to load a program that does not exist",
    TransactionErrorInsufficientFundsForFee = 7_050_005 => "Insufficient funds for fee",
    TransactionErrorInvalidAccountForFee = 7_050_006 => "This account may not be used to pay transaction fees",
    TransactionErrorAlreadyProcessed = 7_050_007 => "This transaction has already been processed",
    TransactionErrorBlockhashNotFound = 7_050_008 => "Blockhash not found",
    TransactionErrorCallChainTooDeep = 7_050_009 => "Loader call chain is too deep",
    TransactionErrorMissingSignatureForFee = 7_050_010 => "Transaction requires a fee but has no signature present",
    TransactionErrorInvalidAccountIndex = 7_050_011 => "Transaction contains an invalid account reference",
    TransactionErrorSignatureFailure = 7_050_012 => "Transaction did not pass signature verification",
    TransactionErrorInvalidProgramForExecution = 7_050_013
        => "This program may not be used for executing instructions",
    TransactionErrorSanitizeFailure = 7_050_014 => "Transaction failed to sanitize accounts offsets correctly",
    TransactionErrorClusterMaintenance = 7_050_015
        => "Transactions are currently disabled due to cluster maintenance",
    TransactionErrorAccountBorrowOutstanding = 7_050_016
        => "Transaction processing left an account with an outstanding borrowed reference",
    TransactionErrorWouldExceedMaxBlockCostLimit = 7_050_017 => "Transaction would exceed max Block Cost Limit",
    TransactionErrorUnsupportedVersion = 7_050_018 => "Transaction version is unsupported",
    TransactionErrorInvalidWritableAccount = 7_050_019 => "Transaction loads a writable account that cannot be written",
    TransactionErrorWouldExceedMaxAccountCostLimit = 7_050_020
        => "Transaction would exceed max account limit within the block",
    TransactionErrorWouldExceedAccountDataBlockLimit = 7_050_021
        => "Transaction would exceed account data limit within the block",
    TransactionErrorTooManyAccountLocks = 7_050_022 => "Transaction locked too many accounts",
    TransactionErrorAddressLookupTableNotFound = 7_050_023
        => "Transaction loads an address table account that doesn't exist",
    TransactionErrorInvalidAddressLookupTableOwner = 7_050_024
        => "Transaction loads an address table account with an invalid owner",
    TransactionErrorInvalidAddressLookupTableData = 7_050_025
        => "Transaction loads an address table account with invalid data",
    TransactionErrorInvalidAddressLookupTableIndex = 7_050_026
        => "Transaction address table lookup uses an invalid index",
    TransactionErrorInvalidRentPayingAccount = 7_050_027
        => "Transaction leaves an account with a lower balance than rent-exempt minimum",
    TransactionErrorWouldExceedMaxVoteCostLimit = 7_050_028 => "Transaction would exceed max Vote Cost Limit",
    TransactionErrorWouldExceedAccountDataTotalLimit = 7_050_029
        => "Transaction would exceed total account data limit",
    TransactionErrorDuplicateInstruction = 7_050_030
        => "Transaction contains a duplicate instruction ($index) that is not allowed",
    TransactionErrorInsufficientFundsForRent = 7_050_031
        => "Transaction results in an account ($accountIndex) with insufficient funds for rent",
    TransactionErrorMaxLoadedAccountsDataSizeExceeded = 7_050_032
        => "Transaction exceeded max loaded accounts data size cap",
    TransactionErrorInvalidLoadedAccountsDataSizeLimit = 7_050_033
        => "LoadedAccountsDataSizeLimit set for transaction must be greater than 0.",
    TransactionErrorResanitizationNeeded = 7_050_034 => "ResanitizationNeeded",
    TransactionErrorProgramExecutionTemporarilyRestricted = 7_050_035
        => "Execution of the program referenced by account at index $accountIndex is temporarily restricted.",
    TransactionErrorUnbalancedTransaction = 7_050_036
        => "Sum of account balances before and after transaction do not match",

    // Client-side RPC errors.
    /// An outgoing request carried an integer that a host number cannot
    /// represent exactly.
    RpcIntegerOverflow = 8_100_000
        => "The $argumentLabel argument to the `$methodName` RPC method$optionalPathLabel was `$value`. This number is unsafe for use with the Solana JSON-RPC because it exceeds `Number.MAX_SAFE_INTEGER`.",
    /// The caller supplied HTTP headers that may not be overridden.
    RpcTransportHttpHeaderForbidden = 8_100_001
        => "HTTP header(s) forbidden: $headers. Learn more at https://developer.mozilla.org/en-US/docs/Glossary/Forbidden_header_name.",
    /// The HTTP transport received an unsuccessful status.
    RpcTransportHttpError = 8_100_002 => "HTTP error ($statusCode): $message",
}
