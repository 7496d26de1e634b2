use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{
    asset_type_has_pending_attributes, delete_asset_definition_by_qualifier,
    load_asset_definition_by_qualifier,
};
use crate::core::types::asset_qualifier::AssetQualifier;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::DeleteAssetDefinition](crate::core::msg::ExecuteMsg::DeleteAssetDefinition)
/// for ease of use in the underlying [delete_asset_definition](self::delete_asset_definition) function.
#[derive(Clone, PartialEq)]
pub struct DeleteAssetDefinitionV1 {
    pub qualifier: AssetQualifier,
}
impl DeleteAssetDefinitionV1 {
    pub fn new(qualifier: AssetQualifier) -> Self {
        Self { qualifier }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteAssetDefinitionV1> {
        match msg {
            ExecuteMsg::DeleteAssetDefinition { qualifier } => {
                DeleteAssetDefinitionV1::new(qualifier).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteAssetDefinition".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::DeleteAssetDefinition](crate::core::msg::ExecuteMsg::DeleteAssetDefinition).
/// Completely removes an asset definition.  Refused while any scope attribute of the type still
/// awaits verification, because deleting the definition would orphan the fee held in escrow for
/// it.  Approved and denied attributes are historical records and do not block deletion.
pub fn delete_asset_definition(
    deps: DepsMutC,
    info: MessageInfo,
    msg: DeleteAssetDefinitionV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let definition = load_asset_definition_by_qualifier(deps.storage, &msg.qualifier)?;
    if asset_type_has_pending_attributes(deps.storage, &definition.asset_type)? {
        return ContractError::PendingVerificationsExist {
            asset_type: definition.asset_type,
        }
        .to_err();
    }
    let deleted_asset_type = delete_asset_definition_by_qualifier(deps.storage, &msg.qualifier)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::DeleteAssetDefinition)
                .set_asset_type(deleted_asset_type),
        )
        .to_ok()
}
