use cosmwasm_std::{Addr, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::types::access_definition::AccessDefinitionType,
    util::{
        aliases::AssetResult,
        functions::filter_valid_access_routes,
        scope_address_utils::bech32_string_to_addr,
        traits::{OptionExtensions, ResultExtensions},
    },
};

use super::{
    access_definition::AccessDefinition, access_route::AccessRoute,
    asset_identifier::AssetIdentifier, asset_onboarding_status::AssetOnboardingStatus,
    asset_verification_result::AssetVerificationResult, verifier_detail::VerifierDetail,
};

/// The trust record held for a scope under a single asset type.  A scope may carry multiple
/// attributes only when onboarded under distinct asset types.  While the status is Pending, the
/// attribute carries a snapshot of the chosen verifier's fee schedule and the collected fee held
/// in escrow; verification clears both and releases the funds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetScopeAttribute {
    pub asset_uuid: String,
    pub scope_address: String,
    pub asset_type: String,
    pub requestor_address: Addr,
    pub verifier_address: Addr,
    pub onboarding_status: AssetOnboardingStatus,
    /// The verifier's fee schedule as it existed when onboarding was requested.  Verification
    /// settles against this snapshot, so later registry edits never alter in-flight escrows.
    pub latest_verifier_detail: Option<VerifierDetail>,
    pub latest_verification_result: Option<AssetVerificationResult>,
    pub access_definitions: Vec<AccessDefinition>,
    /// The onboarding fee collected from the requestor and not yet distributed.  Populated for
    /// exactly as long as the status is Pending.
    pub escrowed_fee: Option<Coin>,
}
impl AssetScopeAttribute {
    /// Constructs a new Pending instance of this struct from the input params.  Prefer
    /// initializing scope attributes with this function: it ensures the contained addresses are
    /// valid and that the asset uuid and scope address match each other.
    pub fn new<S1: Into<String>, S2: Into<String>>(
        identifier: &AssetIdentifier,
        asset_type: S1,
        requestor_address: S2,
        verifier: VerifierDetail,
        access_routes: Vec<AccessRoute>,
        escrowed_fee: Coin,
    ) -> AssetResult<Self> {
        let identifiers = identifier.to_identifiers()?;
        let req_addr = bech32_string_to_addr(requestor_address)?;
        let ver_addr = bech32_string_to_addr(&verifier.address)?;
        // Remove all blank or duplicated access routes to keep bad input out of storage
        let filtered_access_routes = filter_valid_access_routes(access_routes);
        // If no valid routes remain, don't create an access definition for the requestor at all
        let access_definitions = if filtered_access_routes.is_empty() {
            vec![]
        } else {
            vec![AccessDefinition::new_checked(
                &req_addr,
                filtered_access_routes,
                AccessDefinitionType::Requestor,
            )?]
        };
        AssetScopeAttribute {
            asset_uuid: identifiers.asset_uuid,
            scope_address: identifiers.scope_address,
            asset_type: asset_type.into(),
            requestor_address: req_addr,
            verifier_address: ver_addr,
            onboarding_status: AssetOnboardingStatus::Pending,
            latest_verifier_detail: verifier.to_some(),
            latest_verification_result: None,
            access_definitions,
            escrowed_fee: escrowed_fee.to_some(),
        }
        .to_ok()
    }
}
