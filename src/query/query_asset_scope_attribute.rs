use cosmwasm_std::{to_binary, Binary};

use crate::{
    core::{
        error::ContractError,
        state::{load_scope_attribute, load_scope_attributes_for_scope},
        types::asset_identifier::AssetIdentifier,
    },
    util::{
        aliases::{AssetResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Fetches the scope attribute held by the referenced scope for a single asset type.
pub fn query_asset_scope_attribute<S: Into<String>>(
    deps: &DepsC,
    identifier: AssetIdentifier,
    asset_type: S,
) -> AssetResult<Binary> {
    let scope_address = identifier.get_scope_address()?;
    let scope_attribute = load_scope_attribute(deps.storage, scope_address, asset_type)?;
    to_binary(&scope_attribute)?.to_ok()
}

/// Fetches every scope attribute held by the referenced scope, one per asset type it has been
/// onboarded under.  Fails with a NotFound error when the scope holds no attributes at all.
pub fn query_asset_scope_attributes(
    deps: &DepsC,
    identifier: AssetIdentifier,
) -> AssetResult<Binary> {
    let scope_address = identifier.get_scope_address()?;
    let scope_attributes = load_scope_attributes_for_scope(deps.storage, &scope_address)?;
    if scope_attributes.is_empty() {
        return ContractError::NotFound {
            explanation: format!(
                "scope at address [{}] did not include any asset scope attributes",
                scope_address,
            ),
        }
        .to_err();
    }
    to_binary(&scope_attributes)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_binary;
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::types::asset_identifier::AssetIdentifier;
    use crate::core::types::asset_scope_attribute::AssetScopeAttribute;
    use crate::testutil::onboard_asset_helpers::{test_onboard_asset, TestOnboardAsset};
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_TYPE, DEFAULT_ASSET_UUID, DEFAULT_SCOPE_ADDRESS,
    };
    use crate::testutil::test_utilities::{setup_test_suite, InstArgs};

    use super::{query_asset_scope_attribute, query_asset_scope_attributes};

    #[test]
    fn test_query_single_attribute_by_scope_address() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let binary = query_asset_scope_attribute(
            &deps.as_ref(),
            AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
            DEFAULT_ASSET_TYPE,
        )
        .expect("the attribute should be found by scope address");
        let attribute = from_binary::<AssetScopeAttribute>(&binary)
            .expect("the binary should deserialize to a scope attribute");
        assert_eq!(
            DEFAULT_SCOPE_ADDRESS, attribute.scope_address,
            "the returned attribute should reference the requested scope",
        );
    }

    #[test]
    fn test_query_single_attribute_by_asset_uuid() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let binary = query_asset_scope_attribute(
            &deps.as_ref(),
            AssetIdentifier::asset_uuid(DEFAULT_ASSET_UUID),
            DEFAULT_ASSET_TYPE,
        )
        .expect("the attribute should be found through uuid resolution");
        let attribute = from_binary::<AssetScopeAttribute>(&binary)
            .expect("the binary should deserialize to a scope attribute");
        assert_eq!(
            DEFAULT_ASSET_UUID, attribute.asset_uuid,
            "the returned attribute should reference the requested asset uuid",
        );
    }

    #[test]
    fn test_query_all_attributes_for_scope() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        test_onboard_asset(&mut deps, TestOnboardAsset::default()).unwrap();
        let binary = query_asset_scope_attributes(
            &deps.as_ref(),
            AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
        )
        .expect("the attribute listing should succeed");
        let attributes = from_binary::<Vec<AssetScopeAttribute>>(&binary)
            .expect("the binary should deserialize to a vector of attributes");
        assert_eq!(
            1,
            attributes.len(),
            "the single onboarded attribute should be listed",
        );
    }

    #[test]
    fn test_query_attributes_for_empty_scope_fails() {
        let mut deps = mock_dependencies(&[]);
        setup_test_suite(&mut deps, InstArgs::default());
        let error = query_asset_scope_attributes(
            &deps.as_ref(),
            AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "querying a scope with no attributes should fail, but got: {:?}",
            error,
        );
    }
}
