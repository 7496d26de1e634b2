use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{
    load_asset_definition_by_type, load_scope_attributes_for_asset_type, replace_asset_definition,
};
use crate::core::types::asset_definition::AssetDefinitionInput;
use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use crate::validation::validate_init_msg::validate_asset_definition_input;

/// A transformation of [ExecuteMsg::UpdateAssetDefinition](crate::core::msg::ExecuteMsg::UpdateAssetDefinition)
/// for ease of use in the underlying [update_asset_definition](self::update_asset_definition) function.
#[derive(Clone, PartialEq)]
pub struct UpdateAssetDefinitionV1 {
    pub asset_definition: AssetDefinitionInput,
    pub force_verifier_removal: bool,
}
impl UpdateAssetDefinitionV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAssetDefinitionV1> {
        match msg {
            ExecuteMsg::UpdateAssetDefinition {
                asset_definition,
                force_verifier_removal,
            } => UpdateAssetDefinitionV1 {
                asset_definition,
                force_verifier_removal: force_verifier_removal.unwrap_or(false),
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAssetDefinition".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::UpdateAssetDefinition](crate::core::msg::ExecuteMsg::UpdateAssetDefinition).
/// Fully replaces a registered asset definition.  When the replacement drops a verifier that
/// already completed verifications, the stored attributes would reference a verifier the
/// registry no longer knows, so the update is refused unless explicitly forced.
pub fn update_asset_definition(
    deps: DepsMutC,
    info: MessageInfo,
    msg: UpdateAssetDefinitionV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    validate_asset_definition_input(&msg.asset_definition, &deps.as_ref())?;
    let updated_definition = msg.asset_definition.as_asset_definition()?;
    let existing_definition =
        load_asset_definition_by_type(deps.storage, &updated_definition.asset_type)?;
    let removed_verifiers = existing_definition
        .verifiers
        .iter()
        .filter(|existing_verifier| {
            !updated_definition
                .verifiers
                .iter()
                .any(|new_verifier| new_verifier.address == existing_verifier.address)
        })
        .map(|verifier| verifier.address.clone())
        .collect::<Vec<String>>();
    if !removed_verifiers.is_empty() && !msg.force_verifier_removal {
        // Pending attributes are unaffected because they settle against their own verifier
        // snapshot, but completed verifications keep a historical reference to the registry
        for attribute in
            load_scope_attributes_for_asset_type(deps.storage, &updated_definition.asset_type)?
        {
            if attribute.onboarding_status != AssetOnboardingStatus::Pending
                && removed_verifiers.contains(&attribute.verifier_address.to_string())
            {
                return ContractError::VerifierStillReferenced {
                    asset_type: updated_definition.asset_type,
                    verifier_address: attribute.verifier_address.into_string(),
                }
                .to_err();
            }
        }
    }
    replace_asset_definition(deps.storage, &updated_definition)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::UpdateAssetDefinition)
                .set_asset_type(&updated_definition.asset_type),
        )
        .to_ok()
}
