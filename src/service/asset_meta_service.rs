use std::collections::HashSet;

use cosmwasm_std::CosmosMsg;
use provwasm_std::{ProvenanceMsg, ProvenanceQuerier, Scope};

use crate::{
    core::{
        error::ContractError,
        state::{
            config_read, load_asset_definition_by_type, load_scope_attribute,
            load_scope_attributes_for_scope, may_load_scope_attribute, save_scope_attribute,
            State,
        },
        types::{
            access_definition::{AccessDefinition, AccessDefinitionType},
            access_route::AccessRoute,
            asset_definition::AssetDefinition,
            asset_onboarding_status::AssetOnboardingStatus,
            asset_scope_attribute::AssetScopeAttribute,
            asset_verification_result::AssetVerificationResult,
        },
    },
    util::{
        aliases::{AssetResult, DepsMutC},
        fees::{calculate_fee_distribution_messages, calculate_refund_messages},
        functions::filter_valid_access_routes,
        traits::{OptionExtensions, ResultExtensions},
    },
};

use super::{
    asset_meta_repository::AssetMetaRepository, message_gathering_service::MessageGatheringService,
};

/// The request-scoped context for the onboarding and verification routes.  Constructed fresh
/// from the entrypoint's DepsMut for each incoming message, and relinquished when the handler
/// builds its response.
pub struct AssetMetaService<'a> {
    deps: DepsMutC<'a>,
    messages: Vec<CosmosMsg<ProvenanceMsg>>,
}
impl<'a> AssetMetaService<'a> {
    pub fn new(deps: DepsMutC<'a>) -> Self {
        Self {
            deps,
            messages: vec![],
        }
    }

    /// Loads the contract's base configuration record.
    pub fn state(&self) -> AssetResult<State> {
        config_read(self.deps.storage).load().map_err(ContractError::Std)
    }

    /// Loads a registered asset definition by its asset type key.
    pub fn load_asset_definition<S: Into<String>>(
        &self,
        asset_type: S,
    ) -> AssetResult<AssetDefinition> {
        load_asset_definition_by_type(self.deps.storage, asset_type)
    }

    /// Fetches a scope record from the Provenance metadata module, failing with a NotFound error
    /// when the address does not resolve to a written scope.
    pub fn load_scope<S: Into<String>>(&self, scope_address: S) -> AssetResult<Scope> {
        let scope_address = scope_address.into();
        ProvenanceQuerier::new(&self.deps.querier)
            .get_scope(&scope_address)
            .map_err(|e| ContractError::NotFound {
                explanation: format!(
                    "no scope exists on chain at address [{}]: {}",
                    scope_address, e,
                ),
            })
    }
}
impl<'a> AssetMetaRepository for AssetMetaService<'a> {
    fn has_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<bool> {
        may_load_scope_attribute(self.deps.storage, scope_address, asset_type)?
            .is_some()
            .to_ok()
    }

    fn onboard_asset(
        &mut self,
        attribute: &AssetScopeAttribute,
        is_retry: bool,
    ) -> AssetResult<()> {
        let existing =
            may_load_scope_attribute(self.deps.storage, &attribute.scope_address, &attribute.asset_type)?;
        // The handler decides whether this request is a retry; the storage contents must agree.
        // A retry overwrites a denied attribute, and a first-time onboard requires a vacant key
        match existing {
            Some(_) if !is_retry => {
                return ContractError::AssetAlreadyOnboarded {
                    scope_address: attribute.scope_address.clone(),
                    asset_type: attribute.asset_type.clone(),
                }
                .to_err();
            }
            Some(previous) if previous.onboarding_status != AssetOnboardingStatus::Denied => {
                return ContractError::UnexpectedState {
                    explanation: format!(
                        "asset scope [{}] was processed as a retry, but its existing attribute was in status [{}]",
                        attribute.scope_address, previous.onboarding_status,
                    ),
                }
                .to_err();
            }
            None if is_retry => {
                return ContractError::UnexpectedState {
                    explanation: format!(
                        "asset scope [{}] was processed as a retry, but the scope held no existing attribute",
                        attribute.scope_address,
                    ),
                }
                .to_err();
            }
            _ => {}
        }
        save_scope_attribute(self.deps.storage, attribute)
    }

    fn update_attribute(&mut self, attribute: &AssetScopeAttribute) -> AssetResult<()> {
        if !self.has_asset(&attribute.scope_address, &attribute.asset_type)? {
            return ContractError::NotFound {
                explanation: format!(
                    "no attribute exists to update on scope [{}] for asset type [{}]",
                    attribute.scope_address, attribute.asset_type,
                ),
            }
            .to_err();
        }
        save_scope_attribute(self.deps.storage, attribute)
    }

    fn get_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<AssetScopeAttribute> {
        load_scope_attribute(self.deps.storage, scope_address, asset_type)
    }

    fn try_get_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<Option<AssetScopeAttribute>> {
        may_load_scope_attribute(self.deps.storage, scope_address, asset_type)
    }

    fn get_assets<S1: Into<String>>(
        &self,
        scope_address: S1,
    ) -> AssetResult<Vec<AssetScopeAttribute>> {
        load_scope_attributes_for_scope(self.deps.storage, scope_address)
    }

    fn verify_asset<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        &mut self,
        scope_address: S1,
        asset_type: S2,
        success: bool,
        verification_message: Option<S3>,
        access_routes: Vec<AccessRoute>,
    ) -> AssetResult<()> {
        let scope_address = scope_address.into();
        let asset_type = asset_type.into();
        let mut attribute = self.get_asset(&scope_address, &asset_type)?;
        // Storage is authoritative for the release gate.  The pending check guarantees the
        // escrow can never be paid out twice, regardless of handler-level validation
        if attribute.onboarding_status != AssetOnboardingStatus::Pending {
            return ContractError::AssetAlreadyVerified {
                scope_address,
                status: attribute.onboarding_status,
            }
            .to_err();
        }
        let verifier_detail = attribute.latest_verifier_detail.take().ok_or_else(|| {
            ContractError::UnexpectedState {
                explanation: format!(
                    "verifier detail not present on pending asset [{}]",
                    scope_address,
                ),
            }
        })?;
        let escrowed_fee = attribute.escrowed_fee.take().ok_or_else(|| {
            ContractError::UnexpectedState {
                explanation: format!("no fee held in escrow for pending asset [{}]", scope_address),
            }
        })?;
        let message = verification_message
            .map(|m| m.into())
            .unwrap_or_else(|| {
                match success {
                    true => "verification successful",
                    false => "verification failure",
                }
                .to_string()
            });
        attribute.latest_verification_result =
            AssetVerificationResult { message, success }.to_some();
        attribute.onboarding_status = if success {
            AssetOnboardingStatus::Approved
        } else {
            AssetOnboardingStatus::Denied
        };

        // Access routes are recorded regardless of the verification outcome
        let filtered_access_routes = filter_valid_access_routes(access_routes);
        let verifier_address = attribute.verifier_address.to_string();
        if let Some(access_definition) = attribute
            .access_definitions
            .iter_mut()
            .find(|definition| definition.owner_address == verifier_address)
        {
            let mut merged_routes = access_definition
                .access_routes
                .iter()
                .cloned()
                .chain(filtered_access_routes.into_iter())
                .collect::<HashSet<AccessRoute>>()
                .into_iter()
                .collect::<Vec<AccessRoute>>();
            merged_routes.sort();
            access_definition.access_routes = merged_routes;
        } else if !filtered_access_routes.is_empty() {
            attribute.access_definitions.push(AccessDefinition {
                owner_address: verifier_address,
                access_routes: filtered_access_routes,
                definition_type: AccessDefinitionType::Verifier,
            });
        }

        if success {
            let distribution_messages =
                calculate_fee_distribution_messages(&escrowed_fee, &verifier_detail)?;
            self.append_messages(&distribution_messages);
        } else {
            self.append_messages(&calculate_refund_messages(
                &attribute.requestor_address,
                &escrowed_fee,
            ));
        }

        save_scope_attribute(self.deps.storage, &attribute)
    }
}
impl<'a> MessageGatheringService for AssetMetaService<'a> {
    fn get_messages(&self) -> Vec<CosmosMsg<ProvenanceMsg>> {
        self.messages.clone()
    }

    fn add_message(&mut self, message: CosmosMsg<ProvenanceMsg>) {
        self.messages.push(message);
    }

    fn append_messages(&mut self, messages: &[CosmosMsg<ProvenanceMsg>]) {
        self.messages.extend_from_slice(messages);
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{BankMsg, CosmosMsg};
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
    use crate::service::asset_meta_repository::AssetMetaRepository;
    use crate::service::message_gathering_service::MessageGatheringService;
    use crate::testutil::onboard_asset_helpers::{test_onboard_asset, TestOnboardAsset};
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_TYPE, DEFAULT_ONBOARDING_COST, DEFAULT_ONBOARDING_DENOM,
        DEFAULT_SCOPE_ADDRESS, DEFAULT_SENDER_ADDRESS, DEFAULT_VERIFIER_ADDRESS,
    };
    use crate::testutil::test_utilities::{setup_test_suite, InstArgs};

    use super::AssetMetaService;

    #[test]
    fn test_has_asset_is_false_before_onboarding() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        let service = AssetMetaService::new(deps.as_mut());
        assert!(
            !service
                .has_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
                .expect("the existence check should succeed"),
            "no attribute should exist before the scope is onboarded",
        );
    }

    #[test]
    fn test_has_asset_is_true_after_onboarding() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let service = AssetMetaService::new(deps.as_mut());
        assert!(
            service
                .has_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
                .expect("the existence check should succeed"),
            "the attribute should exist after the scope is onboarded",
        );
    }

    #[test]
    fn test_get_asset_fails_when_missing() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        let service = AssetMetaService::new(deps.as_mut());
        let error = service
            .get_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
            .unwrap_err();
        match error {
            ContractError::NotFound { explanation } => {
                assert_eq!(
                    format!(
                        "scope at address [{}] did not include an asset scope attribute for asset type [{}]",
                        DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE,
                    ),
                    explanation,
                    "the not found message should name the scope and asset type",
                );
            }
            _ => panic!("unexpected error for missing attribute lookup: {:?}", error),
        };
    }

    #[test]
    fn test_verify_success_releases_escrow_and_approves() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let mut service = AssetMetaService::new(deps.as_mut());
        service
            .verify_asset::<&str, &str, &str>(
                DEFAULT_SCOPE_ADDRESS,
                DEFAULT_ASSET_TYPE,
                true,
                None,
                vec![],
            )
            .expect("verification should succeed");
        let messages = service.get_messages();
        assert_eq!(
            1,
            messages.len(),
            "the default verifier has no fee destinations, so a single residual payment should be emitted",
        );
        match messages.first().unwrap() {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(
                    DEFAULT_VERIFIER_ADDRESS, to_address,
                    "the full escrow should be released to the verifier",
                );
                assert_eq!(
                    DEFAULT_ONBOARDING_COST,
                    amount.first().unwrap().amount.u128(),
                    "the released amount should equal the onboarding cost",
                );
                assert_eq!(
                    DEFAULT_ONBOARDING_DENOM,
                    amount.first().unwrap().denom,
                    "the released coin should use the onboarding denom",
                );
            }
            msg => panic!("unexpected message emitted by verification: {:?}", msg),
        };
        let attribute = service
            .get_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
            .expect("the attribute should remain in storage");
        assert_eq!(
            AssetOnboardingStatus::Approved,
            attribute.onboarding_status,
            "a successful verification should approve the attribute",
        );
        assert!(
            attribute.escrowed_fee.is_none(),
            "the escrow should be cleared by verification",
        );
        assert!(
            attribute.latest_verifier_detail.is_none(),
            "the verifier snapshot should be cleared by verification",
        );
    }

    #[test]
    fn test_verify_failure_refunds_the_requestor() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let mut service = AssetMetaService::new(deps.as_mut());
        service
            .verify_asset::<&str, &str, &str>(
                DEFAULT_SCOPE_ADDRESS,
                DEFAULT_ASSET_TYPE,
                false,
                Some("document hashes did not match"),
                vec![],
            )
            .expect("verification should succeed");
        let messages = service.get_messages();
        assert_eq!(
            1,
            messages.len(),
            "exactly one refund message should be emitted on denial",
        );
        match messages.first().unwrap() {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(
                    DEFAULT_SENDER_ADDRESS, to_address,
                    "the refund should target the original requestor",
                );
                assert_eq!(
                    DEFAULT_ONBOARDING_COST,
                    amount.first().unwrap().amount.u128(),
                    "the refund should return the full escrowed amount",
                );
            }
            msg => panic!("unexpected message emitted by denial: {:?}", msg),
        };
        let attribute = service
            .get_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
            .expect("the attribute should remain in storage");
        assert_eq!(
            AssetOnboardingStatus::Denied,
            attribute.onboarding_status,
            "a failed verification should deny the attribute",
        );
        assert_eq!(
            "document hashes did not match",
            attribute
                .latest_verification_result
                .expect("a verification result should be recorded")
                .message,
            "the verifier's message should be stored on the result",
        );
    }

    #[test]
    fn test_verify_twice_is_rejected_by_the_storage_gate() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let mut service = AssetMetaService::new(deps.as_mut());
        service
            .verify_asset::<&str, &str, &str>(
                DEFAULT_SCOPE_ADDRESS,
                DEFAULT_ASSET_TYPE,
                true,
                None,
                vec![],
            )
            .expect("the first verification should succeed");
        let error = service
            .verify_asset::<&str, &str, &str>(
                DEFAULT_SCOPE_ADDRESS,
                DEFAULT_ASSET_TYPE,
                true,
                None,
                vec![],
            )
            .unwrap_err();
        assert!(
            matches!(error, ContractError::AssetAlreadyVerified { .. }),
            "a second verification must be rejected to prevent double payout, but got: {:?}",
            error,
        );
        assert_eq!(
            1,
            service.get_messages().len(),
            "the rejected second verification should not have emitted additional messages",
        );
    }

    #[test]
    fn test_verifier_access_routes_merge_with_existing() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let mut service = AssetMetaService::new(deps.as_mut());
        service
            .verify_asset::<&str, &str, &str>(
                DEFAULT_SCOPE_ADDRESS,
                DEFAULT_ASSET_TYPE,
                true,
                None,
                vec![
                    crate::core::types::access_route::AccessRoute::route_only("grpc://validated.example.com"),
                    crate::core::types::access_route::AccessRoute::route_only("   "),
                ],
            )
            .expect("verification should succeed");
        let attribute = service
            .get_asset(DEFAULT_SCOPE_ADDRESS, DEFAULT_ASSET_TYPE)
            .expect("the attribute should remain in storage");
        let verifier_definition = attribute
            .access_definitions
            .iter()
            .find(|definition| definition.owner_address == DEFAULT_VERIFIER_ADDRESS)
            .expect("a verifier access definition should be recorded");
        assert_eq!(
            1,
            verifier_definition.access_routes.len(),
            "only the single valid verifier route should be recorded",
        );
        assert_eq!(
            "grpc://validated.example.com",
            verifier_definition.access_routes.first().unwrap().route,
            "the recorded route should match the valid input",
        );
    }
}
