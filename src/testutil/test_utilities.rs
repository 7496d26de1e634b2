use cosmwasm_std::{
    testing::{mock_env, mock_info, MockApi, MockStorage},
    Addr, Coin, Env, MessageInfo, OwnedDeps, Response, Uint128,
};
use provwasm_mocks::ProvenanceMockQuerier;
use provwasm_std::{Party, PartyType, ProvenanceMsg, ProvenanceQuery, Scope};

use crate::{
    contract::instantiate,
    core::{
        msg::InitMsg,
        types::{
            access_route::AccessRoute,
            asset_definition::{AssetDefinition, AssetDefinitionInput},
            entity_detail::EntityDetail,
            scope_spec_identifier::ScopeSpecIdentifier,
            verifier_detail::VerifierDetail,
        },
    },
    util::aliases::{DepsMutC, EntryPointResponse},
};
use cosmwasm_std::Decimal;

use super::test_constants::{
    DEFAULT_ACCESS_ROUTE_NAME, DEFAULT_ACCESS_ROUTE_ROUTE, DEFAULT_ADMIN_ADDRESS,
    DEFAULT_ASSET_TYPE, DEFAULT_CONTRACT_BASE_NAME, DEFAULT_ONBOARDING_COST,
    DEFAULT_ONBOARDING_DENOM, DEFAULT_SCOPE_ADDRESS, DEFAULT_SCOPE_SPEC_ADDRESS,
    DEFAULT_SENDER_ADDRESS, DEFAULT_VERIFIER_ADDRESS,
};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, ProvenanceMockQuerier, ProvenanceQuery>;

pub fn get_default_entity_detail() -> EntityDetail {
    EntityDetail::new(
        "Default Verifier",
        "The standard verifier fixture used across the test suite",
        "https://verifier.example.com",
        "https://github.com/example/default-verifier",
    )
}

pub fn get_default_verifier_detail() -> VerifierDetail {
    VerifierDetail::new(
        DEFAULT_VERIFIER_ADDRESS,
        Uint128::new(DEFAULT_ONBOARDING_COST),
        DEFAULT_ONBOARDING_DENOM,
        Decimal::zero(),
        vec![],
        Some(get_default_entity_detail()),
    )
}

pub fn get_default_asset_definition_input() -> AssetDefinitionInput {
    AssetDefinitionInput {
        asset_type: DEFAULT_ASSET_TYPE.into(),
        scope_spec_identifier: ScopeSpecIdentifier::address(DEFAULT_SCOPE_SPEC_ADDRESS),
        verifiers: vec![get_default_verifier_detail()],
        // Specifying None will cause the underlying code to always choose enabled: true
        enabled: None,
        // Specifying None will cause the underlying code to always choose bind_name: true
        bind_name: None,
    }
}

pub fn get_default_asset_definition_inputs() -> Vec<AssetDefinitionInput> {
    vec![get_default_asset_definition_input()]
}

pub fn get_default_asset_definition() -> AssetDefinition {
    get_default_asset_definition_input()
        .into_asset_definition()
        .expect("the default asset definition input should convert without error")
}

pub fn get_default_access_route() -> AccessRoute {
    AccessRoute::route_and_name(DEFAULT_ACCESS_ROUTE_ROUTE, DEFAULT_ACCESS_ROUTE_NAME)
}

pub fn get_default_access_routes() -> Vec<AccessRoute> {
    vec![get_default_access_route()]
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub base_contract_name: String,
    pub bind_base_name: bool,
    pub asset_definitions: Vec<AssetDefinitionInput>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_ADMIN_ADDRESS, &[]),
            base_contract_name: DEFAULT_CONTRACT_BASE_NAME.into(),
            bind_base_name: true,
            asset_definitions: get_default_asset_definition_inputs(),
        }
    }
}
impl InstArgs {
    /// Produces default instantiation arguments with the default definition's enabled flag
    /// explicitly set, for exercising disabled-definition pathways.
    pub fn default_with_enabled(enabled: bool) -> Self {
        InstArgs {
            asset_definitions: vec![AssetDefinitionInput {
                enabled: Some(enabled),
                ..get_default_asset_definition_input()
            }],
            ..Default::default()
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            base_contract_name: args.base_contract_name,
            bind_base_name: args.bind_base_name,
            asset_definitions: args.asset_definitions,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

/// Instantiates the contract and mocks the default scope into the Provenance querier, leaving
/// the suite ready for onboarding calls against DEFAULT_SCOPE_ADDRESS.
pub fn setup_test_suite(deps: &mut MockOwnedDeps, args: InstArgs) {
    test_instantiate_success(deps.as_mut(), args);
    deps.querier.with_scope(get_default_scope());
}

pub fn get_default_scope() -> Scope {
    get_duped_scope(
        DEFAULT_SCOPE_ADDRESS,
        DEFAULT_SCOPE_SPEC_ADDRESS,
        DEFAULT_SENDER_ADDRESS,
    )
}

/// Builds a scope with a single owner party, which is all the contract ever inspects.
pub fn get_duped_scope<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
    scope_address: S1,
    scope_spec_address: S2,
    owner_address: S3,
) -> Scope {
    let owner_address = owner_address.into();
    Scope {
        scope_id: scope_address.into(),
        specification_id: scope_spec_address.into(),
        owners: vec![Party {
            address: Addr::unchecked(&owner_address),
            role: PartyType::Owner,
        }],
        data_access: vec![],
        value_owner_address: Addr::unchecked(owner_address),
    }
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

pub fn mock_info_with_nhash<S: Into<String>>(sender: S, amount: u128) -> MessageInfo {
    mock_info_with_funds(
        sender,
        &[Coin {
            denom: DEFAULT_ONBOARDING_DENOM.into(),
            amount: Uint128::from(amount),
        }],
    )
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .unwrap_or_else(|| panic!("no response attribute exists for key {}", key))
        .value
        .as_str()
}
