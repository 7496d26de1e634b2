use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_asset_definition_by_type, replace_asset_definition};
use crate::core::types::verifier_detail::VerifierDetail;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use crate::validation::validate_init_msg::validate_verifier;

/// A transformation of [ExecuteMsg::AddAssetVerifier](crate::core::msg::ExecuteMsg::AddAssetVerifier)
/// for ease of use in the underlying [add_asset_verifier](self::add_asset_verifier) function.
#[derive(Clone, PartialEq)]
pub struct AddAssetVerifierV1 {
    pub asset_type: String,
    pub verifier: VerifierDetail,
}
impl AddAssetVerifierV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<AddAssetVerifierV1> {
        match msg {
            ExecuteMsg::AddAssetVerifier {
                asset_type,
                verifier,
            } => AddAssetVerifierV1 {
                asset_type,
                verifier,
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::AddAssetVerifier".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::AddAssetVerifier](crate::core::msg::ExecuteMsg::AddAssetVerifier).
/// Appends a brand new verifier to an existing asset definition's authorized set.
pub fn add_asset_verifier(
    deps: DepsMutC,
    info: MessageInfo,
    msg: AddAssetVerifierV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    validate_verifier(&msg.verifier, &deps.as_ref())?;
    let mut definition = load_asset_definition_by_type(deps.storage, &msg.asset_type)?;
    if definition
        .verifiers
        .iter()
        .any(|verifier| verifier.address == msg.verifier.address)
    {
        return ContractError::DuplicateVerifierProvided.to_err();
    }
    definition.verifiers.push(msg.verifier.clone());
    replace_asset_definition(deps.storage, &definition)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::AddAssetVerifier)
                .set_asset_type(&msg.asset_type)
                .set_verifier(&msg.verifier.address),
        )
        .to_ok()
}
