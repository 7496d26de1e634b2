use cosmwasm_std::{MessageInfo, Response};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::access_route::AccessRoute;
use crate::core::types::asset_identifier::AssetIdentifier;
use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
use crate::service::asset_meta_repository::AssetMetaRepository;
use crate::service::asset_meta_service::AssetMetaService;
use crate::service::message_gathering_service::MessageGatheringService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::VerifyAsset](crate::core::msg::ExecuteMsg::VerifyAsset)
/// for ease of use in the underlying [verify_asset](self::verify_asset) function.
#[derive(Clone, PartialEq)]
pub struct VerifyAssetV1 {
    pub identifier: AssetIdentifier,
    pub asset_type: String,
    pub success: bool,
    pub message: Option<String>,
    pub access_routes: Vec<AccessRoute>,
}
impl VerifyAssetV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<VerifyAssetV1> {
        match msg {
            ExecuteMsg::VerifyAsset {
                identifier,
                asset_type,
                success,
                message,
                access_routes,
            } => VerifyAssetV1 {
                identifier,
                asset_type,
                success,
                message,
                access_routes: access_routes.unwrap_or_default(),
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::VerifyAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::VerifyAsset](crate::core::msg::ExecuteMsg::VerifyAsset).
/// Executed by the verifier chosen during onboarding to record the classification outcome for a
/// pending scope attribute.  This is the only pathway that releases an escrowed onboarding fee:
/// approval distributes it across the verifier's fee schedule, denial refunds it to the
/// requestor in full.  Denied scopes may restart the process through onboarding.
pub fn verify_asset(
    mut service: AssetMetaService,
    info: MessageInfo,
    msg: VerifyAssetV1,
) -> EntryPointResponse {
    // This route only moves funds out of escrow; it must never receive them
    check_funds_are_empty(&info)?;

    let asset_identifiers = msg.identifier.to_identifiers()?;
    let scope_attribute =
        service.get_asset(&asset_identifiers.scope_address, &msg.asset_type)?;

    // Only the verifier assigned at onboarding may render an outcome
    if info.sender != scope_attribute.verifier_address {
        return ContractError::UnauthorizedAssetVerifier {
            scope_address: asset_identifiers.scope_address,
            verifier_address: info.sender.into(),
            expected_verifier_address: scope_attribute.verifier_address.into_string(),
        }
        .to_err();
    }

    // Any status except pending means the escrow was already released for this attribute.
    // Approved attributes are final; denied attributes become eligible again only through a
    // fresh onboarding request
    if scope_attribute.onboarding_status != AssetOnboardingStatus::Pending {
        return ContractError::AssetAlreadyVerified {
            scope_address: asset_identifiers.scope_address,
            status: scope_attribute.onboarding_status,
        }
        .to_err();
    }

    service.verify_asset(
        &asset_identifiers.scope_address,
        &msg.asset_type,
        msg.success,
        msg.message,
        msg.access_routes,
    )?;

    let new_status = if msg.success {
        AssetOnboardingStatus::Approved
    } else {
        AssetOnboardingStatus::Denied
    };
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(
                EventType::VerifyAsset,
                &scope_attribute.asset_type,
                &asset_identifiers.scope_address,
            )
            .set_verifier(info.sender)
            .set_onboarding_status(&new_status),
        )
        .add_messages(service.get_messages())
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{BankMsg, CosmosMsg};
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::types::asset_identifier::AssetIdentifier;
    use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
    use crate::service::asset_meta_service::AssetMetaService;
    use crate::testutil::onboard_asset_helpers::{test_onboard_asset, TestOnboardAsset};
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_TYPE, DEFAULT_ONBOARDING_COST, DEFAULT_SCOPE_ADDRESS,
        DEFAULT_SENDER_ADDRESS, DEFAULT_VERIFIER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, mock_info_with_nhash, setup_test_suite, InstArgs,
    };
    use crate::testutil::verify_asset_helpers::{test_verify_asset, TestVerifyAsset};

    use super::{verify_asset, VerifyAssetV1};

    #[test]
    fn test_verify_rejected_for_funds_present() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            mock_info_with_nhash(DEFAULT_VERIFIER_ADDRESS, 420),
            TestVerifyAsset::default_verify_asset(),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "funds sent to the verification route should be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_verify_asset_not_found_error() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            TestVerifyAsset::default_verify_asset(),
        )
        .unwrap_err();
        match error {
            ContractError::NotFound { explanation } => {
                assert_eq!(
                    format!(
                        "scope at address [{}] did not include an asset scope attribute for asset type [{}]",
                        DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE,
                    ),
                    explanation,
                    "the not found message should reflect the missing attribute",
                );
            }
            _ => panic!("unexpected error for an un-onboarded scope: {:?}", error),
        };
    }

    #[test]
    fn test_verify_asset_wrong_verifier_error() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let info = empty_mock_info("tp129z88fpzthllrdzktw98cck3ypd34wv77nqfyl");
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            info.clone(),
            TestVerifyAsset::default_verify_asset(),
        )
        .unwrap_err();
        match error {
            ContractError::UnauthorizedAssetVerifier {
                scope_address,
                verifier_address,
                expected_verifier_address,
            } => {
                assert_eq!(
                    DEFAULT_SCOPE_ADDRESS, scope_address,
                    "the unauthorized verifier message should reflect the scope address",
                );
                assert_eq!(
                    info.sender.to_string(),
                    verifier_address,
                    "the unauthorized verifier message should reflect the sender",
                );
                assert_eq!(
                    DEFAULT_VERIFIER_ADDRESS, expected_verifier_address,
                    "the unauthorized verifier message should reflect the assigned verifier",
                );
            }
            _ => panic!("unexpected error for an unassigned verifier: {:?}", error),
        };
        // A rejected verification must leave the attribute untouched
        let attribute = crate::core::state::load_scope_attribute(
            deps.as_ref().storage,
            DEFAULT_SCOPE_ADDRESS,
            DEFAULT_ASSET_TYPE,
        )
        .expect("the attribute should remain in storage");
        assert_eq!(
            AssetOnboardingStatus::Pending,
            attribute.onboarding_status,
            "the attribute should remain pending after an unauthorized verification attempt",
        );
        assert!(
            attribute.escrowed_fee.is_some(),
            "the escrow should remain held after an unauthorized verification attempt",
        );
    }

    #[test]
    fn test_verify_approval_emits_fee_distribution() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let response = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            TestVerifyAsset::default_verify_asset(),
        )
        .expect("verification should succeed");
        assert_eq!(
            1,
            response.messages.len(),
            "the default verifier keeps the whole fee, producing one settlement message",
        );
        match &response.messages.first().unwrap().msg {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(
                    DEFAULT_VERIFIER_ADDRESS, to_address,
                    "the settlement should pay the verifier",
                );
                assert_eq!(
                    DEFAULT_ONBOARDING_COST,
                    amount.first().unwrap().amount.u128(),
                    "the settlement should release the full escrowed amount",
                );
            }
            msg => panic!("unexpected settlement message: {:?}", msg),
        };
    }

    #[test]
    fn test_verify_denial_emits_full_refund() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let response = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            VerifyAssetV1 {
                success: false,
                ..TestVerifyAsset::default_verify_asset()
            },
        )
        .expect("verification should succeed");
        assert_eq!(
            1,
            response.messages.len(),
            "a denial should produce exactly one refund message",
        );
        match &response.messages.first().unwrap().msg {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(
                    DEFAULT_SENDER_ADDRESS, to_address,
                    "the refund should pay the requestor",
                );
                assert_eq!(
                    DEFAULT_ONBOARDING_COST,
                    amount.first().unwrap().amount.u128(),
                    "the refund should return the full escrowed amount",
                );
            }
            msg => panic!("unexpected refund message: {:?}", msg),
        };
    }

    #[test]
    fn test_verify_twice_errors_after_approval() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        test_verify_asset(&mut deps, TestVerifyAsset::default()).unwrap();
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            TestVerifyAsset::default_verify_asset(),
        )
        .unwrap_err();
        match error {
            ContractError::AssetAlreadyVerified {
                scope_address,
                status,
            } => {
                assert_eq!(
                    DEFAULT_SCOPE_ADDRESS, scope_address,
                    "the error should contain the scope address",
                );
                assert_eq!(
                    AssetOnboardingStatus::Approved,
                    status,
                    "the error should report the approved status",
                );
            }
            _ => panic!("unexpected error for a duplicate verification: {:?}", error),
        };
    }

    #[test]
    fn test_verify_twice_errors_after_denial() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        test_verify_asset(&mut deps, TestVerifyAsset::default_with_success(false)).unwrap();
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            TestVerifyAsset::default_verify_asset(),
        )
        .unwrap_err();
        match error {
            ContractError::AssetAlreadyVerified { status, .. } => {
                assert_eq!(
                    AssetOnboardingStatus::Denied,
                    status,
                    "the error should report the denied status",
                );
            }
            _ => panic!("unexpected error for a duplicate verification: {:?}", error),
        };
    }

    #[test]
    fn test_verify_unknown_asset_type_on_onboarded_scope_fails() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let error = verify_asset(
            AssetMetaService::new(deps.as_mut()),
            empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            VerifyAssetV1 {
                identifier: AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
                asset_type: "mortgage".to_string(),
                success: true,
                message: None,
                access_routes: vec![],
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "verifying an asset type the scope never onboarded under should fail, but got: {:?}",
            error,
        );
    }
}
