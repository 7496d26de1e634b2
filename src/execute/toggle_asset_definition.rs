use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_asset_definition_by_type, replace_asset_definition};
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::ToggleAssetDefinition](crate::core::msg::ExecuteMsg::ToggleAssetDefinition)
/// for ease of use in the underlying [toggle_asset_definition](self::toggle_asset_definition) function.
#[derive(Clone, PartialEq)]
pub struct ToggleAssetDefinitionV1 {
    pub asset_type: String,
    pub expected_result: bool,
}
impl ToggleAssetDefinitionV1 {
    pub fn new<S: Into<String>>(asset_type: S, expected_result: bool) -> Self {
        ToggleAssetDefinitionV1 {
            asset_type: asset_type.into(),
            expected_result,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<ToggleAssetDefinitionV1> {
        match msg {
            ExecuteMsg::ToggleAssetDefinition {
                asset_type,
                expected_result,
            } => ToggleAssetDefinitionV1::new(asset_type, expected_result).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ToggleAssetDefinition".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::ToggleAssetDefinition](crate::core::msg::ExecuteMsg::ToggleAssetDefinition).
/// Flips a definition's enabled flag without touching any other value.  The caller supplies the
/// result it expects the flip to produce, protecting against a duplicated toggle re-enabling a
/// definition that was just disabled.
pub fn toggle_asset_definition(
    deps: DepsMutC,
    info: MessageInfo,
    msg: ToggleAssetDefinitionV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let mut definition = load_asset_definition_by_type(deps.storage, &msg.asset_type)?;
    let new_enabled_value = !definition.enabled;
    if new_enabled_value != msg.expected_result {
        return ContractError::UnexpectedState {
            explanation: format!(
                "toggling the definition for asset type [{}] would set enabled to [{}], but the request expected [{}]",
                msg.asset_type, new_enabled_value, msg.expected_result,
            ),
        }
        .to_err();
    }
    definition.enabled = new_enabled_value;
    replace_asset_definition(deps.storage, &definition)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::ToggleAssetDefinition)
                .set_asset_type(&msg.asset_type)
                .set_new_value(new_enabled_value),
        )
        .to_ok()
}
