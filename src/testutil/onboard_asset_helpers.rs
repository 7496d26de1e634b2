use cosmwasm_std::MessageInfo;

use crate::core::types::asset_identifier::AssetIdentifier;
use crate::execute::onboard_asset::{onboard_asset, OnboardAssetV1};
use crate::service::asset_meta_service::AssetMetaService;
use crate::util::aliases::EntryPointResponse;

use super::test_constants::{
    DEFAULT_ASSET_TYPE, DEFAULT_ONBOARDING_COST, DEFAULT_SCOPE_ADDRESS, DEFAULT_SENDER_ADDRESS,
    DEFAULT_VERIFIER_ADDRESS,
};
use super::test_utilities::{get_default_access_routes, mock_info_with_nhash, MockOwnedDeps};

/// A complete default onboarding request: the default sender onboards the default scope under
/// the default asset type with the exact required fee attached.
pub struct TestOnboardAsset {
    pub info: MessageInfo,
    pub onboard_asset: OnboardAssetV1,
}
impl TestOnboardAsset {
    pub fn default_onboard_asset() -> OnboardAssetV1 {
        OnboardAssetV1 {
            identifier: AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            verifier_address: DEFAULT_VERIFIER_ADDRESS.to_string(),
            access_routes: get_default_access_routes(),
        }
    }
}
impl Default for TestOnboardAsset {
    fn default() -> Self {
        TestOnboardAsset {
            info: mock_info_with_nhash(DEFAULT_SENDER_ADDRESS, DEFAULT_ONBOARDING_COST),
            onboard_asset: TestOnboardAsset::default_onboard_asset(),
        }
    }
}

pub fn test_onboard_asset(deps: &mut MockOwnedDeps, msg: TestOnboardAsset) -> EntryPointResponse {
    onboard_asset(AssetMetaService::new(deps.as_mut()), msg.info, msg.onboard_asset)
}
