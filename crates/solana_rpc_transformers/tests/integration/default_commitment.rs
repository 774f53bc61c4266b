use solana_rpc_transformers::{
    Commitment, OptionsObjectPositionConfig, RequestTransformer, RequestTransformerConfig,
};
use solana_rpc_value::Value;

fn transformer(default_commitment: Option<Commitment>) -> RequestTransformer {
    RequestTransformer::new(RequestTransformerConfig {
        default_commitment,
        ..RequestTransformerConfig::default()
    })
}

fn position(method: &str) -> usize {
    OptionsObjectPositionConfig::solana_rpc()
        .position(method)
        .unwrap_or_else(|| panic!("`{method}` has an options object"))
}

fn contains_commitment(params: &Value, property: &str, commitment: &str) -> bool {
    params.as_array().is_some_and(|params| {
        params.iter().any(|param| {
            param.get(property).and_then(Value::as_str) == Some(commitment)
                && param.as_object().is_some_and(|options| options.len() == 1)
        })
    })
}

fn mentions_property(params: &Value, property: &str) -> bool {
    params
        .as_array()
        .is_some_and(|params| params.iter().any(|param| param.get(property).is_some()))
}

macro_rules! impl_default_commitment_tests {
    ($($method:ident,)+) => {
        $(
            paste::item! {
                #[test]
                fn [<adds_default_commitment_to_ $method:snake>]() -> anyhow::Result<()> {
                    for commitment in [Commitment::Processed, Commitment::Confirmed] {
                        let params = transformer(Some(commitment))
                            .transform(stringify!($method), &Value::Array(Vec::new()))?;

                        assert!(contains_commitment(&params, "commitment", commitment.as_str()));
                    }

                    Ok(())
                }

                #[test]
                fn [<adds_no_commitment_to_ $method:snake _without_override>]() -> anyhow::Result<()> {
                    for default_commitment in [None, Some(Commitment::Finalized)] {
                        let params = transformer(default_commitment)
                            .transform(stringify!($method), &Value::Array(Vec::new()))?;

                        assert!(!mentions_property(&params, "commitment"));
                    }

                    Ok(())
                }

                #[test]
                fn [<strips_finalized_commitment_from_ $method:snake>]() -> anyhow::Result<()> {
                    let position = position(stringify!($method));

                    for existing in [Value::from("finalized"), Value::Absent] {
                        let mut params = vec![Value::Absent; position];
                        params.push(Value::from_iter([("commitment", existing)]));

                        let transformed = transformer(None)
                            .transform(stringify!($method), &Value::Array(params))?;

                        assert_eq!(transformed, Value::Array(vec![Value::Absent; position]));
                    }

                    Ok(())
                }
            }
        )+
    };
}

impl_default_commitment_tests! {
    accountNotifications,
    blockNotifications,
    getAccountInfo,
    getBalance,
    getBlock,
    getBlockHeight,
    getBlockProduction,
    getBlocks,
    getBlocksWithLimit,
    getEpochInfo,
    getFeeForMessage,
    getInflationGovernor,
    getInflationReward,
    getLargestAccounts,
    getLatestBlockhash,
    getLeaderSchedule,
    getMinimumBalanceForRentExemption,
    getMultipleAccounts,
    getProgramAccounts,
    getSignaturesForAddress,
    getSlot,
    getSlotLeader,
    getStakeMinimumDelegation,
    getSupply,
    getTokenAccountBalance,
    getTokenAccountsByDelegate,
    getTokenAccountsByOwner,
    getTokenLargestAccounts,
    getTokenSupply,
    getTransaction,
    getTransactionCount,
    getVoteAccounts,
    isBlockhashValid,
    logsNotifications,
    programNotifications,
    requestAirdrop,
    signatureNotifications,
    simulateTransaction,
}

#[test]
fn send_transaction_uses_preflight_commitment() -> anyhow::Result<()> {
    for commitment in [Commitment::Processed, Commitment::Confirmed] {
        let params = transformer(Some(commitment))
            .transform("sendTransaction", &Value::Array(Vec::new()))?;

        assert!(contains_commitment(
            &params,
            "preflightCommitment",
            commitment.as_str()
        ));
        assert!(!mentions_property(&params, "commitment"));
    }

    Ok(())
}

#[test]
fn send_transaction_strips_finalized_preflight_commitment() -> anyhow::Result<()> {
    let params = Value::from_json_str(
        r#"["tx",{"other":"property","preflightCommitment":"finalized"},"someParam"]"#,
    )?;

    let transformed = transformer(None).transform("sendTransaction", &params)?;

    assert_eq!(
        transformed,
        Value::from_json_str(r#"["tx",{"other":"property"},"someParam"]"#)?
    );

    Ok(())
}

#[test]
fn get_account_info() -> anyhow::Result<()> {
    let confirmed = transformer(Some(Commitment::Confirmed));

    let injected = confirmed.transform("getAccountInfo", &Value::from_json_str(r#"["ADDR"]"#)?)?;
    assert_eq!(
        injected,
        Value::from_json_str(r#"["ADDR",{"commitment":"confirmed"}]"#)?
    );

    let stripped = confirmed.transform(
        "getAccountInfo",
        &Value::from_json_str(r#"["ADDR",{"commitment":"finalized"}]"#)?,
    )?;
    assert_eq!(stripped, Value::from_json_str(r#"["ADDR"]"#)?);

    Ok(())
}

#[test]
fn methods_without_options_are_untouched() -> anyhow::Result<()> {
    let params = Value::from_json_str(r#"["a",{"b":1}]"#)?;

    let transformed =
        transformer(Some(Commitment::Confirmed)).transform("getGenesisHash", &params)?;

    assert_eq!(transformed, Value::from_json_str(r#"["a",{"b":1.0}]"#)?);

    Ok(())
}

#[test]
fn object_params_are_not_defaulted() -> anyhow::Result<()> {
    let params = Value::from_json_str(r#"{"a":"b"}"#)?;

    let transformed = transformer(Some(Commitment::Confirmed)).transform("getSlot", &params)?;

    assert_eq!(transformed, params);

    Ok(())
}
