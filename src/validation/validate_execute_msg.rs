use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Performs the shallow field checks shared by every execute route before any handler runs.
/// Deeper validation that requires storage or api access happens inside the individual routes.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::OnboardAsset {
            asset_type,
            verifier_address,
            ..
        } => validate_fields(
            "ExecuteMsg::OnboardAsset",
            vec![
                require_non_blank(asset_type, "asset_type"),
                require_non_blank(verifier_address, "verifier_address"),
            ],
        ),
        ExecuteMsg::VerifyAsset { asset_type, .. } => validate_fields(
            "ExecuteMsg::VerifyAsset",
            vec![require_non_blank(asset_type, "asset_type")],
        ),
        ExecuteMsg::AddAssetDefinition { asset_definition } => validate_fields(
            "ExecuteMsg::AddAssetDefinition",
            vec![require_non_blank(&asset_definition.asset_type, "asset_type")],
        ),
        ExecuteMsg::UpdateAssetDefinition {
            asset_definition, ..
        } => validate_fields(
            "ExecuteMsg::UpdateAssetDefinition",
            vec![require_non_blank(&asset_definition.asset_type, "asset_type")],
        ),
        ExecuteMsg::ToggleAssetDefinition { asset_type, .. } => validate_fields(
            "ExecuteMsg::ToggleAssetDefinition",
            vec![require_non_blank(asset_type, "asset_type")],
        ),
        ExecuteMsg::DeleteAssetDefinition { .. } => Ok(()),
        ExecuteMsg::AddAssetVerifier {
            asset_type,
            verifier,
        } => validate_fields(
            "ExecuteMsg::AddAssetVerifier",
            vec![
                require_non_blank(asset_type, "asset_type"),
                require_non_blank(&verifier.address, "verifier.address"),
            ],
        ),
        ExecuteMsg::UpdateAssetVerifier {
            asset_type,
            verifier,
        } => validate_fields(
            "ExecuteMsg::UpdateAssetVerifier",
            vec![
                require_non_blank(asset_type, "asset_type"),
                require_non_blank(&verifier.address, "verifier.address"),
            ],
        ),
        ExecuteMsg::UpdateAccessRoutes {
            asset_type,
            owner_address,
            ..
        } => validate_fields(
            "ExecuteMsg::UpdateAccessRoutes",
            vec![
                require_non_blank(asset_type, "asset_type"),
                require_non_blank(owner_address, "owner_address"),
            ],
        ),
        ExecuteMsg::BindContractAlias { alias_name } => validate_fields(
            "ExecuteMsg::BindContractAlias",
            vec![require_non_blank(alias_name, "alias_name")],
        ),
    }
}

fn require_non_blank(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{}: must not be blank", field_name))
    } else {
        None
    }
}

fn validate_fields(message_type: &str, checks: Vec<Option<String>>) -> AssetResult<()> {
    let invalid_fields = checks.into_iter().flatten().collect::<Vec<String>>();
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
