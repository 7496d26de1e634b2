use cosmwasm_std::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Defines an account that receives a configured share of a verifier's fee pool when a scope
/// completes verification successfully.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct FeeDestination {
    /// The Provenance Blockchain bech32 address of the account receiving the share.
    pub address: String,
    /// The portion of the verifier's fee pool routed to this destination.  Must be greater than
    /// zero and no greater than 100%, and all destinations on a single verifier must sum to no
    /// more than 100%.
    pub fee_percent: Decimal,
}
impl FeeDestination {
    pub fn new<S: Into<String>>(address: S, fee_percent: Decimal) -> Self {
        FeeDestination {
            address: address.into(),
            fee_percent,
        }
    }
}
