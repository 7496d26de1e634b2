use cosmwasm_std::{coin, Coin, MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::access_route::AccessRoute;
use crate::core::types::asset_identifier::AssetIdentifier;
use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
use crate::core::types::asset_scope_attribute::AssetScopeAttribute;
use crate::core::types::verifier_detail::VerifierDetail;
use crate::service::asset_meta_repository::AssetMetaRepository;
use crate::service::asset_meta_service::AssetMetaService;
use crate::service::message_gathering_service::MessageGatheringService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::OnboardAsset](crate::core::msg::ExecuteMsg::OnboardAsset)
/// for ease of use in the underlying [onboard_asset](self::onboard_asset) function.
#[derive(Clone, PartialEq)]
pub struct OnboardAssetV1 {
    pub identifier: AssetIdentifier,
    pub asset_type: String,
    pub verifier_address: String,
    pub access_routes: Vec<AccessRoute>,
}
impl OnboardAssetV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<OnboardAssetV1> {
        match msg {
            ExecuteMsg::OnboardAsset {
                identifier,
                asset_type,
                verifier_address,
                access_routes,
            } => OnboardAssetV1 {
                identifier,
                asset_type,
                verifier_address,
                access_routes: access_routes.unwrap_or_default(),
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::OnboardAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::OnboardAsset](crate::core::msg::ExecuteMsg::OnboardAsset).
/// Begins the classification workflow for a scope: resolves the requested asset type and
/// verifier, proves the scope exists on chain and belongs to the sender, collects the
/// verifier's onboarding cost into escrow, and writes a pending scope attribute.  No funds move
/// out of the contract until the verifier renders an outcome.
pub fn onboard_asset(
    mut service: AssetMetaService,
    info: MessageInfo,
    msg: OnboardAssetV1,
) -> EntryPointResponse {
    let asset_identifiers = msg.identifier.to_identifiers()?;
    // The definition must exist and accept new onboarding requests
    let asset_definition = match service.load_asset_definition(&msg.asset_type) {
        Ok(definition) if !definition.enabled => {
            return ContractError::NotFound {
                explanation: format!("asset type [{}] is currently disabled", msg.asset_type),
            }
            .to_err();
        }
        Ok(definition) => definition,
        Err(_) => {
            return ContractError::NotFound {
                explanation: format!("asset type [{}] is not registered", msg.asset_type),
            }
            .to_err();
        }
    };
    // The caller's chosen verifier must be among the definition's authorized set
    let verifier = asset_definition
        .verifiers
        .iter()
        .find(|verifier| verifier.address == msg.verifier_address)
        .ok_or(ContractError::UnsupportedVerifier {
            verifier_address: msg.verifier_address.clone(),
            asset_type: msg.asset_type.clone(),
        })?;
    // The scope must have been written to the chain before classification can be requested
    let scope = service.load_scope(&asset_identifiers.scope_address)?;
    if scope.specification_id.as_str() != asset_definition.scope_spec_address {
        return ContractError::AssetSpecMismatch {
            asset_type: msg.asset_type,
            scope_address: asset_identifiers.scope_address,
            scope_spec_address: scope.specification_id.to_string(),
            expected_scope_spec_address: asset_definition.scope_spec_address,
        }
        .to_err();
    }
    // Only a scope owner may submit its data for classification
    if !scope.owners.iter().any(|owner| owner.address == info.sender) {
        return ContractError::Unauthorized {
            explanation: format!(
                "sender [{}] is not listed as an owner of scope [{}]",
                info.sender, asset_identifiers.scope_address,
            ),
        }
        .to_err();
    }
    let escrowed_fee = validate_onboarding_funds(&info, verifier)?;
    // An existing attribute for this (scope, asset type) pair dictates whether this request is
    // a fresh onboard, a retry after denial, or an illegal duplicate
    let is_retry = match service.try_get_asset(&asset_identifiers.scope_address, &msg.asset_type)? {
        Some(existing) => match existing.onboarding_status {
            AssetOnboardingStatus::Pending => {
                return ContractError::AssetPendingVerification {
                    scope_address: existing.scope_address,
                    verifier_address: existing.verifier_address.into_string(),
                }
                .to_err();
            }
            AssetOnboardingStatus::Approved => {
                return ContractError::AssetAlreadyOnboarded {
                    scope_address: existing.scope_address,
                    asset_type: existing.asset_type,
                }
                .to_err();
            }
            AssetOnboardingStatus::Denied => true,
        },
        None => false,
    };
    let attribute = AssetScopeAttribute::new(
        &msg.identifier,
        &msg.asset_type,
        info.sender.as_str(),
        verifier.clone(),
        msg.access_routes,
        escrowed_fee,
    )?;
    service.onboard_asset(&attribute, is_retry)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(
                EventType::OnboardAsset,
                &attribute.asset_type,
                &attribute.scope_address,
            )
            .set_verifier(&verifier.address)
            .set_scope_owner(&info.sender)
            .set_onboarding_status(&attribute.onboarding_status),
        )
        .add_messages(service.get_messages())
        .to_ok()
}

/// Verifies that the exact onboarding cost was provided as funds, producing the coin to be held
/// in escrow.  Zero-cost verifiers require that no funds be attached at all.
fn validate_onboarding_funds(info: &MessageInfo, verifier: &VerifierDetail) -> AssetResult<Coin> {
    let expected = coin(verifier.onboarding_cost.u128(), &verifier.onboarding_denom);
    let funds_are_valid = match info.funds.len() {
        0 => verifier.onboarding_cost.is_zero(),
        1 => {
            let provided = info.funds.first().unwrap();
            provided.denom == verifier.onboarding_denom && provided.amount == verifier.onboarding_cost
                && !provided.amount.is_zero()
        }
        _ => false,
    };
    if !funds_are_valid {
        return ContractError::FeeMismatch {
            verifier_address: verifier.address.clone(),
            expected_fee: format!("{}{}", verifier.onboarding_cost, verifier.onboarding_denom),
            provided_funds: format_funds(&info.funds),
        }
        .to_err();
    }
    expected.to_ok()
}

fn format_funds(funds: &[Coin]) -> String {
    if funds.is_empty() {
        "none".to_string()
    } else {
        funds
            .iter()
            .map(|coin| format!("{}{}", coin.amount, coin.denom))
            .collect::<Vec<String>>()
            .join(",")
    }
}
