use serde::{Deserialize, Serialize};

/// Level of confirmation a node must have reached for the state it reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Commitment {
    /// The node's most recent block.
    Processed,
    /// The most recent block voted on by a supermajority of the cluster.
    Confirmed,
    /// The most recent block confirmed as final by the cluster.
    #[default]
    Finalized,
}

impl Commitment {
    /// Name of the commitment as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}
