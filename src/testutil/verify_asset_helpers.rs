use cosmwasm_std::MessageInfo;

use crate::core::types::asset_identifier::AssetIdentifier;
use crate::execute::verify_asset::{verify_asset, VerifyAssetV1};
use crate::service::asset_meta_service::AssetMetaService;
use crate::util::aliases::EntryPointResponse;

use super::test_constants::{
    DEFAULT_ASSET_TYPE, DEFAULT_SCOPE_ADDRESS, DEFAULT_VERIFIER_ADDRESS,
};
use super::test_utilities::{empty_mock_info, MockOwnedDeps};

/// A complete default verification request: the default verifier approves the default scope's
/// pending attribute.
pub struct TestVerifyAsset {
    pub info: MessageInfo,
    pub verify_asset: VerifyAssetV1,
}
impl TestVerifyAsset {
    pub fn default_verify_asset() -> VerifyAssetV1 {
        VerifyAssetV1 {
            identifier: AssetIdentifier::scope_address(DEFAULT_SCOPE_ADDRESS),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            success: true,
            message: None,
            access_routes: vec![],
        }
    }

    pub fn default_with_success(success: bool) -> TestVerifyAsset {
        TestVerifyAsset {
            verify_asset: VerifyAssetV1 {
                success,
                ..TestVerifyAsset::default_verify_asset()
            },
            ..Default::default()
        }
    }
}
impl Default for TestVerifyAsset {
    fn default() -> Self {
        TestVerifyAsset {
            info: empty_mock_info(DEFAULT_VERIFIER_ADDRESS),
            verify_asset: TestVerifyAsset::default_verify_asset(),
        }
    }
}

pub fn test_verify_asset(deps: &mut MockOwnedDeps, msg: TestVerifyAsset) -> EntryPointResponse {
    verify_asset(AssetMetaService::new(deps.as_mut()), msg.info, msg.verify_asset)
}
