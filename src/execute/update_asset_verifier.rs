use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_asset_definition_by_type, replace_asset_definition};
use crate::core::types::verifier_detail::VerifierDetail;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::replace_single_matching_vec_element;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_init_msg::validate_verifier;

/// A transformation of [ExecuteMsg::UpdateAssetVerifier](crate::core::msg::ExecuteMsg::UpdateAssetVerifier)
/// for ease of use in the underlying [update_asset_verifier](self::update_asset_verifier) function.
#[derive(Clone, PartialEq)]
pub struct UpdateAssetVerifierV1 {
    pub asset_type: String,
    pub verifier: VerifierDetail,
}
impl UpdateAssetVerifierV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAssetVerifierV1> {
        match msg {
            ExecuteMsg::UpdateAssetVerifier {
                asset_type,
                verifier,
            } => UpdateAssetVerifierV1 {
                asset_type,
                verifier,
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAssetVerifier".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::UpdateAssetVerifier](crate::core::msg::ExecuteMsg::UpdateAssetVerifier).
/// Replaces the fee schedule of a single verifier on an existing definition, keyed by the
/// verifier's address.  In-flight onboarding is unaffected: pending attributes settle against
/// the snapshot taken when they were created.
pub fn update_asset_verifier(
    deps: DepsMutC,
    info: MessageInfo,
    msg: UpdateAssetVerifierV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    validate_verifier(&msg.verifier, &deps.as_ref())?;
    let mut definition = load_asset_definition_by_type(deps.storage, &msg.asset_type)?;
    if !definition
        .verifiers
        .iter()
        .any(|verifier| verifier.address == msg.verifier.address)
    {
        return ContractError::NotFound {
            explanation: format!(
                "verifier [{}] is not registered for asset type [{}]",
                msg.verifier.address, msg.asset_type,
            ),
        }
        .to_err();
    }
    definition.verifiers = replace_single_matching_vec_element(
        definition.verifiers,
        msg.verifier.clone(),
        |verifier| verifier.address == msg.verifier.address,
    )?;
    replace_asset_definition(deps.storage, &definition)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::UpdateAssetVerifier)
                .set_asset_type(&msg.asset_type)
                .set_verifier(&msg.verifier.address),
        )
        .to_ok()
}
