use cosmwasm_std::{to_binary, Binary};

use crate::{
    core::{state::load_asset_definition_by_qualifier, types::asset_qualifier::AssetQualifier},
    util::{
        aliases::{AssetResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Fetches a single asset definition by asset type or by the scope spec address bound to it,
/// exercising the registry's reverse index in the latter case.
pub fn query_asset_definition(deps: &DepsC, qualifier: AssetQualifier) -> AssetResult<Binary> {
    let asset_definition = load_asset_definition_by_qualifier(deps.storage, &qualifier)?;
    to_binary(&asset_definition)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_binary;
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::types::asset_definition::AssetDefinition;
    use crate::core::types::asset_qualifier::AssetQualifier;
    use crate::testutil::test_constants::{DEFAULT_ASSET_TYPE, DEFAULT_SCOPE_SPEC_ADDRESS};
    use crate::testutil::test_utilities::{test_instantiate_success, InstArgs};

    use super::query_asset_definition;

    #[test]
    fn test_query_by_asset_type() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let binary = query_asset_definition(
            &deps.as_ref(),
            AssetQualifier::asset_type(DEFAULT_ASSET_TYPE),
        )
        .expect("the default definition should be found by type");
        let definition = from_binary::<AssetDefinition>(&binary)
            .expect("the binary should deserialize to an asset definition");
        assert_eq!(
            DEFAULT_ASSET_TYPE, definition.asset_type,
            "the returned definition should match the requested type",
        );
    }

    #[test]
    fn test_query_by_scope_spec_address() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let binary = query_asset_definition(
            &deps.as_ref(),
            AssetQualifier::scope_spec_address(DEFAULT_SCOPE_SPEC_ADDRESS),
        )
        .expect("the default definition should be found by scope spec");
        let definition = from_binary::<AssetDefinition>(&binary)
            .expect("the binary should deserialize to an asset definition");
        assert_eq!(
            DEFAULT_SCOPE_SPEC_ADDRESS, definition.scope_spec_address,
            "the returned definition should match the requested scope spec",
        );
    }

    #[test]
    fn test_query_missing_definition_fails() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error =
            query_asset_definition(&deps.as_ref(), AssetQualifier::asset_type("nonexistent"))
                .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordNotFound { .. }),
            "querying an unregistered asset type should fail, but got: {:?}",
            error,
        );
    }
}
