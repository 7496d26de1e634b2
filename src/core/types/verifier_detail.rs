use cosmwasm_std::{Decimal, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{entity_detail::EntityDetail, fee_destination::FeeDestination};

/// Defines the fee schedule and addresses for a single verifier account within an
/// [AssetDefinition](super::asset_definition::AssetDefinition).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct VerifierDetail {
    /// The Provenance Blockchain bech32 address of the verifier account.
    pub address: String,
    /// The total amount charged for onboarding a scope with this verifier.  Collected into the
    /// contract's escrow when onboarding begins and released when verification completes.
    pub onboarding_cost: Uint128,
    /// The coin denomination in which the onboarding cost must be paid.
    pub onboarding_denom: String,
    /// The portion of the onboarding cost carved out for fee destinations upon a successful
    /// verification.  Anything not covered by the destinations' shares remains with the verifier.
    pub fee_percent: Decimal,
    /// The accounts that split the fee pool.  Their individual fee percents apply to the pool
    /// defined by [fee_percent](self::VerifierDetail::fee_percent) and must sum to no more than
    /// 100%.
    pub fee_destinations: Vec<FeeDestination>,
    /// An optional set of fields that describe the verifier, including its name and home URL.
    pub entity_detail: Option<EntityDetail>,
}
impl VerifierDetail {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        address: S1,
        onboarding_cost: Uint128,
        onboarding_denom: S2,
        fee_percent: Decimal,
        fee_destinations: Vec<FeeDestination>,
        entity_detail: Option<EntityDetail>,
    ) -> Self {
        VerifierDetail {
            address: address.into(),
            onboarding_cost,
            onboarding_denom: onboarding_denom.into(),
            fee_percent,
            fee_destinations,
            entity_detail,
        }
    }

    /// Sums all destination percentages.  Valid verifiers never exceed 100% here.
    pub fn get_destination_percent_total(&self) -> Decimal {
        self.fee_destinations
            .iter()
            .map(|destination| destination.fee_percent)
            .sum::<Decimal>()
    }
}
