use std::collections::HashMap;

use solana_rpc_value::KeyPath;

/// Fields of `jsonParsed` token accounts that hold host numbers.
const TOKEN_ACCOUNT_PATHS: &[&str] = &[
    "data.parsed.info.tokenAmount.decimals",
    "data.parsed.info.tokenAmount.uiAmount",
    "data.parsed.info.rentExemptReserve.decimals",
    "data.parsed.info.rentExemptReserve.uiAmount",
    "data.parsed.info.delegatedAmount.decimals",
    "data.parsed.info.delegatedAmount.uiAmount",
    "data.parsed.info.extensions.*.state.olderTransferFee.transferFeeBasisPoints",
    "data.parsed.info.extensions.*.state.newerTransferFee.transferFeeBasisPoints",
    "data.parsed.info.extensions.*.state.preUpdateAverageRate",
    "data.parsed.info.extensions.*.state.currentRate",
];

/// Fields of other `jsonParsed` accounts that hold host numbers.
const ACCOUNT_PATHS: &[&str] = &[
    // Address lookup table
    "data.parsed.info.lastExtendedSlotStartIndex",
    // Config
    "data.parsed.info.slashPenalty",
    "data.parsed.info.warmupCooldownRate",
    // Mint
    "data.parsed.info.decimals",
    // Multisig
    "data.parsed.info.numRequiredSigners",
    "data.parsed.info.numValidSigners",
    // Stake
    "data.parsed.info.stake.delegation.warmupCooldownRate",
    // Rent sysvar
    "data.parsed.info.exemptionThreshold",
    "data.parsed.info.burnPercent",
    // Vote
    "data.parsed.info.commission",
    "data.parsed.info.votes.*.confirmationCount",
];

/// Fields of a transaction with its status metadata that hold host numbers.
const TRANSACTION_PATHS: &[&str] = &[
    "meta.preTokenBalances.*.accountIndex",
    "meta.preTokenBalances.*.uiTokenAmount.decimals",
    "meta.postTokenBalances.*.accountIndex",
    "meta.postTokenBalances.*.uiTokenAmount.decimals",
    "meta.rewards.*.commission",
    "meta.innerInstructions.*.index",
    "meta.innerInstructions.*.instructions.*.accounts.*",
    "meta.innerInstructions.*.instructions.*.programIdIndex",
    "meta.innerInstructions.*.instructions.*.stackHeight",
    "transaction.message.addressTableLookups.*.writableIndexes.*",
    "transaction.message.addressTableLookups.*.readonlyIndexes.*",
    "transaction.message.header.numReadonlySignedAccounts",
    "transaction.message.header.numReadonlyUnsignedAccounts",
    "transaction.message.header.numRequiredSignatures",
    "transaction.message.instructions.*.accounts.*",
    "transaction.message.instructions.*.programIdIndex",
    "transaction.message.instructions.*.stackHeight",
];

/// Paths of a response that must remain host numbers instead of being
/// upcast to wide integers, per RPC method or notification.
///
/// Patterns are relative to the `result` of a response, and may contain
/// wildcards that match any array index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedNumericKeyPaths {
    paths: HashMap<String, Vec<KeyPath>>,
}

impl AllowedNumericKeyPaths {
    /// Allow-list for the methods of the Solana JSON-RPC API.
    pub fn solana_rpc() -> Self {
        let account = || TOKEN_ACCOUNT_PATHS.iter().chain(ACCOUNT_PATHS);

        [
            ("getAccountInfo", prefixed("value", account()).collect()),
            ("getBlock", block_paths("")),
            ("getBlockTime", vec![String::new()]),
            (
                "getClusterNodes",
                patterns(&["*.featureSet", "*.shredVersion"]),
            ),
            (
                "getInflationGovernor",
                patterns(&["initial", "foundation", "foundationTerm", "taper", "terminal"]),
            ),
            (
                "getInflationRate",
                patterns(&["foundation", "total", "validator"]),
            ),
            ("getInflationReward", patterns(&["*.commission"])),
            (
                "getMultipleAccounts",
                prefixed("value.*", account()).collect(),
            ),
            (
                "getProgramAccounts",
                prefixed("value.*.account", account())
                    .chain(prefixed("*.account", account()))
                    .collect(),
            ),
            (
                "getRecentPerformanceSamples",
                patterns(&["*.samplePeriodSecs"]),
            ),
            (
                "getTokenAccountBalance",
                patterns(&["value.decimals", "value.uiAmount"]),
            ),
            (
                "getTokenAccountsByDelegate",
                prefixed("value.*.account", TOKEN_ACCOUNT_PATHS).collect(),
            ),
            (
                "getTokenAccountsByOwner",
                prefixed("value.*.account", TOKEN_ACCOUNT_PATHS).collect(),
            ),
            (
                "getTokenLargestAccounts",
                patterns(&["value.*.decimals", "value.*.uiAmount"]),
            ),
            (
                "getTokenSupply",
                patterns(&["value.decimals", "value.uiAmount"]),
            ),
            ("getTransaction", patterns(TRANSACTION_PATHS)),
            ("getVersion", patterns(&["feature-set"])),
            (
                "getVoteAccounts",
                patterns(&["current.*.commission", "delinquent.*.commission"]),
            ),
            (
                "simulateTransaction",
                prefixed("value.accounts.*", account()).collect(),
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Allow-list for the notifications of the Solana JSON-RPC subscriptions
    /// API.
    pub fn solana_rpc_subscriptions() -> Self {
        let account = || TOKEN_ACCOUNT_PATHS.iter().chain(ACCOUNT_PATHS);

        [
            ("accountNotifications", prefixed("value", account()).collect()),
            ("blockNotifications", block_paths("value.block")),
            (
                "programNotifications",
                prefixed("value.*.account", account())
                    .chain(prefixed("*.account", account()))
                    .collect(),
            ),
        ]
        .into_iter()
        .collect()
    }

    /// The patterns configured for `method`.
    pub fn key_paths(&self, method: &str) -> &[KeyPath] {
        self.paths.get(method).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the value at `key_path` of `method`'s result must remain a
    /// host number.
    pub fn is_allowed(&self, method: &str, key_path: &KeyPath) -> bool {
        self.key_paths(method)
            .iter()
            .any(|pattern| key_path.matches(pattern))
    }
}

impl<MethodT, PatternT> FromIterator<(MethodT, Vec<PatternT>)> for AllowedNumericKeyPaths
where
    MethodT: Into<String>,
    PatternT: AsRef<str>,
{
    fn from_iter<IteratorT: IntoIterator<Item = (MethodT, Vec<PatternT>)>>(iter: IteratorT) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(method, patterns)| {
                    let key_paths = patterns
                        .iter()
                        .map(|pattern| KeyPath::pattern(pattern.as_ref()))
                        .collect();

                    (method.into(), key_paths)
                })
                .collect(),
        }
    }
}

fn patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|pattern| (*pattern).to_owned()).collect()
}

fn prefixed<'pattern>(
    prefix: &'pattern str,
    patterns: impl IntoIterator<Item = &'pattern &'pattern str> + 'pattern,
) -> impl Iterator<Item = String> + 'pattern {
    patterns.into_iter().map(move |pattern| {
        if prefix.is_empty() {
            (*pattern).to_owned()
        } else {
            format!("{prefix}.{pattern}")
        }
    })
}

fn block_paths(prefix: &str) -> Vec<String> {
    let transactions = if prefix.is_empty() {
        String::from("transactions.*")
    } else {
        format!("{prefix}.transactions.*")
    };

    prefixed(&transactions, TRANSACTION_PATHS)
        .chain(prefixed(prefix, &["rewards.*.commission"]))
        .collect()
}
