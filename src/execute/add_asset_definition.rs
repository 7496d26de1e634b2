use cosmwasm_std::{CosmosMsg, Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{config_read, insert_asset_definition};
use crate::core::types::asset_definition::AssetDefinitionInput;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::generate_asset_attribute_name;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_init_msg::validate_asset_definition_input;

/// A transformation of [ExecuteMsg::AddAssetDefinition](crate::core::msg::ExecuteMsg::AddAssetDefinition)
/// for ease of use in the underlying [add_asset_definition](self::add_asset_definition) function.
#[derive(Clone, PartialEq)]
pub struct AddAssetDefinitionV1 {
    pub asset_definition: AssetDefinitionInput,
}
impl AddAssetDefinitionV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<AddAssetDefinitionV1> {
        match msg {
            ExecuteMsg::AddAssetDefinition { asset_definition } => {
                AddAssetDefinitionV1 { asset_definition }.to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::AddAssetDefinition".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::AddAssetDefinition](crate::core::msg::ExecuteMsg::AddAssetDefinition).
/// Registers a brand new asset type, optionally binding its attribute name beneath the
/// contract's base name.
pub fn add_asset_definition(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: AddAssetDefinitionV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    validate_asset_definition_input(&msg.asset_definition, &deps.as_ref())?;
    let asset_definition = msg.asset_definition.as_asset_definition()?;
    insert_asset_definition(deps.storage, &asset_definition)?;
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    // The name bind is skipped only when the caller reserved the name externally
    if msg.asset_definition.bind_name.unwrap_or(true) {
        let base_contract_name = config_read(deps.storage).load()?.base_contract_name;
        messages.push(bind_name(
            generate_asset_attribute_name(&asset_definition.asset_type, base_contract_name),
            env.contract.address,
            NameBinding::Restricted,
        )?);
    }
    Response::new()
        .add_messages(messages)
        .add_attributes(
            EventAttributes::new(EventType::AddAssetDefinition)
                .set_asset_type(&asset_definition.asset_type),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_env;
    use cosmwasm_std::{coin, Decimal, Uint128};
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::state::load_asset_definition_by_type;
    use crate::core::types::asset_definition::AssetDefinitionInput;
    use crate::core::types::scope_spec_identifier::ScopeSpecIdentifier;
    use crate::core::types::verifier_detail::VerifierDetail;
    use crate::testutil::test_constants::{DEFAULT_ADMIN_ADDRESS, DEFAULT_VERIFIER_ADDRESS};
    use crate::testutil::test_utilities::{
        empty_mock_info, mock_info_with_funds, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::NHASH;

    use super::{add_asset_definition, AddAssetDefinitionV1};

    fn new_definition_input(asset_type: &str, scope_spec_address: &str) -> AddAssetDefinitionV1 {
        AddAssetDefinitionV1 {
            asset_definition: AssetDefinitionInput::new(
                asset_type,
                ScopeSpecIdentifier::address(scope_spec_address),
                vec![VerifierDetail::new(
                    DEFAULT_VERIFIER_ADDRESS,
                    Uint128::new(500),
                    NHASH,
                    Decimal::zero(),
                    vec![],
                    None,
                )],
                None,
                None,
            ),
        }
    }

    #[test]
    fn test_add_definition_requires_admin() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info("tp129z88fpzthllrdzktw98cck3ypd34wv77nqfyl"),
            new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw"),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::Unauthorized { .. }),
            "a non-admin sender should be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_add_definition_rejects_funds() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            mock_info_with_funds(DEFAULT_ADMIN_ADDRESS, &[coin(100, NHASH)]),
            new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw"),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "provided funds should be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_add_definition_success_stores_and_binds_name() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw"),
        )
        .expect("adding a new definition should succeed");
        assert_eq!(
            1,
            response.messages.len(),
            "one name binding message should be emitted by default",
        );
        let stored = load_asset_definition_by_type(deps.as_ref().storage, "pl")
            .expect("the new definition should be stored");
        assert!(
            stored.enabled,
            "the definition should default to enabled when no flag is supplied",
        );
    }

    #[test]
    fn test_add_definition_without_name_bind_emits_no_messages() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let mut msg = new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw");
        msg.asset_definition.bind_name = Some(false);
        let response = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            msg,
        )
        .expect("adding a definition without a name bind should succeed");
        assert!(
            response.messages.is_empty(),
            "no messages should be emitted when the name bind is skipped",
        );
    }

    #[test]
    fn test_add_duplicate_asset_type_is_rejected() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw"),
        )
        .expect("the first addition should succeed");
        let error = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            new_definition_input("pl", "scopespec1qjvwczgs5zd3rm9wghfcmn40swpq3p2rhp"),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordAlreadyExists { .. }),
            "a duplicate asset type should be rejected, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_add_invalid_definition_is_rejected() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let mut msg = new_definition_input("pl", "scopespec1qs9a6zlv5zdprmy5rjtex9c9ppusezpgqw");
        msg.asset_definition.verifiers = vec![];
        let error = add_asset_definition(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            msg,
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "a definition without verifiers should be rejected, but got: {:?}",
            error,
        );
    }
}
