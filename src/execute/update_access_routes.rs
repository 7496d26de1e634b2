use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::access_definition::{AccessDefinition, AccessDefinitionType};
use crate::core::types::access_route::AccessRoute;
use crate::core::types::asset_identifier::AssetIdentifier;
use crate::service::asset_meta_repository::AssetMetaRepository;
use crate::service::asset_meta_service::AssetMetaService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAdditionalMetadata, EventAttributes, EventType};
use crate::util::functions::filter_valid_access_routes;
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::UpdateAccessRoutes](crate::core::msg::ExecuteMsg::UpdateAccessRoutes)
/// for ease of use in the underlying [update_access_routes](self::update_access_routes) function.
#[derive(Clone, PartialEq)]
pub struct UpdateAccessRoutesV1 {
    pub identifier: AssetIdentifier,
    pub asset_type: String,
    pub owner_address: String,
    pub access_type: AccessDefinitionType,
    pub access_routes: Vec<AccessRoute>,
}
impl UpdateAccessRoutesV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAccessRoutesV1> {
        match msg {
            ExecuteMsg::UpdateAccessRoutes {
                identifier,
                asset_type,
                owner_address,
                access_type,
                access_routes,
            } => UpdateAccessRoutesV1 {
                identifier,
                asset_type,
                owner_address,
                access_type,
                access_routes,
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAccessRoutes".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::UpdateAccessRoutes](crate::core::msg::ExecuteMsg::UpdateAccessRoutes).
/// Replaces the access route list held by one owner on one scope attribute, leaving every other
/// owner's routes untouched.  Permitted for the routes' owner or the contract admin, in any
/// onboarding status, since recorded access is independent of the verification outcome.
pub fn update_access_routes(
    mut service: AssetMetaService,
    info: MessageInfo,
    msg: UpdateAccessRoutesV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let state = service.state()?;
    if info.sender.as_str() != msg.owner_address && info.sender != state.admin {
        return ContractError::Unauthorized {
            explanation: format!(
                "only the owner of the access routes [{}] or the admin may update them",
                msg.owner_address,
            ),
        }
        .to_err();
    }
    let asset_identifiers = msg.identifier.to_identifiers()?;
    let mut attribute = service.get_asset(&asset_identifiers.scope_address, &msg.asset_type)?;
    // The owner must hold the claimed role on this specific attribute
    let (expected_owner, access_type_name) = match msg.access_type {
        AccessDefinitionType::Requestor => (&attribute.requestor_address, "requestor"),
        AccessDefinitionType::Verifier => (&attribute.verifier_address, "verifier"),
    };
    if expected_owner.as_str() != msg.owner_address {
        return ContractError::Unauthorized {
            explanation: format!(
                "address [{}] is not the {} for scope [{}] and asset type [{}]",
                msg.owner_address, access_type_name, asset_identifiers.scope_address, msg.asset_type,
            ),
        }
        .to_err();
    }
    let existing_position = attribute.access_definitions.iter().position(|definition| {
        definition.owner_address == msg.owner_address && definition.definition_type == msg.access_type
    });
    let mut new_routes = filter_valid_access_routes(msg.access_routes);
    new_routes.sort();
    let route_count = new_routes.len();
    match existing_position {
        // Replacing with an empty list removes the owner's definition entirely
        Some(position) if new_routes.is_empty() => {
            attribute.access_definitions.remove(position);
        }
        Some(position) => {
            attribute.access_definitions[position].access_routes = new_routes;
        }
        None if !new_routes.is_empty() => {
            attribute
                .access_definitions
                .push(AccessDefinition::new_checked(
                    &msg.owner_address,
                    new_routes,
                    msg.access_type,
                )?);
        }
        None => {}
    }
    service.update_attribute(&attribute)?;
    let mut metadata = EventAdditionalMetadata::new();
    metadata.add_metadata("access_type", access_type_name);
    metadata.add_metadata("route_count", route_count.to_string());
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(
                EventType::UpdateAccessRoutes,
                &msg.asset_type,
                &asset_identifiers.scope_address,
            )
            .set_scope_owner(&msg.owner_address)
            .set_additional_metadata(&metadata),
        )
        .to_ok()
}
