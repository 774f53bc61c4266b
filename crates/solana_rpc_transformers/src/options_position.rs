use std::collections::HashMap;

/// Position of the configuration object within the parameters of each RPC
/// method that accepts a commitment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionsObjectPositionConfig {
    positions: HashMap<String, usize>,
}

impl OptionsObjectPositionConfig {
    /// Positions for the methods of the Solana JSON-RPC API and its
    /// subscriptions, including deprecated methods still served by nodes.
    pub fn solana_rpc() -> Self {
        const FIRST: &[&str] = &[
            "getBlockHeight",
            "getBlockProduction",
            "getEpochInfo",
            "getFees",
            "getInflationGovernor",
            "getLargestAccounts",
            "getLatestBlockhash",
            "getRecentBlockhash",
            "getSlot",
            "getSlotLeader",
            "getStakeMinimumDelegation",
            "getSupply",
            "getTransactionCount",
            "getVoteAccounts",
        ];
        const SECOND: &[&str] = &[
            "accountNotifications",
            "blockNotifications",
            "getAccountInfo",
            "getBalance",
            "getBlock",
            "getConfirmedBlock",
            "getConfirmedSignaturesForAddress2",
            "getConfirmedTransaction",
            "getFeeCalculatorForBlockhash",
            "getFeeForMessage",
            "getInflationReward",
            "getLeaderSchedule",
            "getMinimumBalanceForRentExemption",
            "getMultipleAccounts",
            "getProgramAccounts",
            "getSignaturesForAddress",
            "getStakeActivation",
            "getTokenAccountBalance",
            "getTokenLargestAccounts",
            "getTokenSupply",
            "getTransaction",
            "isBlockhashValid",
            "logsNotifications",
            "programNotifications",
            "sendTransaction",
            "signatureNotifications",
            "simulateTransaction",
        ];
        const THIRD: &[&str] = &[
            "getBlocks",
            "getBlocksWithLimit",
            "getConfirmedBlocks",
            "getConfirmedBlocksWithLimit",
            "getTokenAccountsByDelegate",
            "getTokenAccountsByOwner",
            "requestAirdrop",
        ];

        [(0, FIRST), (1, SECOND), (2, THIRD)]
            .into_iter()
            .flat_map(|(position, methods)| {
                methods.iter().map(move |method| (*method, position))
            })
            .collect()
    }

    /// The position of `method`'s configuration object, if it has one.
    pub fn position(&self, method: &str) -> Option<usize> {
        self.positions.get(method).copied()
    }

    /// Iterator over the configured methods and their positions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions
            .iter()
            .map(|(method, position)| (method.as_str(), *position))
    }
}

impl<MethodT: Into<String>> FromIterator<(MethodT, usize)> for OptionsObjectPositionConfig {
    fn from_iter<IteratorT: IntoIterator<Item = (MethodT, usize)>>(iter: IteratorT) -> Self {
        Self {
            positions: iter
                .into_iter()
                .map(|(method, position)| (method.into(), position))
                .collect(),
        }
    }
}
