use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    access_definition::AccessDefinitionType, access_route::AccessRoute,
    asset_definition::AssetDefinitionInput, asset_identifier::AssetIdentifier,
    asset_qualifier::AssetQualifier, verifier_detail::VerifierDetail,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InitMsg {
    /// The root Provenance name to be owned by the contract.  All asset type attribute names are
    /// bound beneath it.
    pub base_contract_name: String,
    /// Whether the contract should bind its base name during instantiation.  Should only be
    /// false when the name has been reserved externally.
    pub bind_base_name: bool,
    /// The initial definition registry contents.  May be empty; the admin can append definitions
    /// later, but the contract accepts no onboarding input until at least one exists.
    pub asset_definitions: Vec<AssetDefinitionInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Requests classification of a scope under an asset type with a chosen verifier.  The
    /// verifier's onboarding cost must be sent as funds and is escrowed until verification.
    OnboardAsset {
        identifier: AssetIdentifier,
        asset_type: String,
        verifier_address: String,
        access_routes: Option<Vec<AccessRoute>>,
    },
    /// Records a verification outcome for a pending scope attribute.  Only executable by the
    /// verifier chosen during onboarding.  Releases the escrowed fee: distribution on success,
    /// full refund to the requestor otherwise.
    VerifyAsset {
        identifier: AssetIdentifier,
        asset_type: String,
        success: bool,
        message: Option<String>,
        access_routes: Option<Vec<AccessRoute>>,
    },
    /// Admin-only.  Registers a brand new asset type.
    AddAssetDefinition {
        asset_definition: AssetDefinitionInput,
    },
    /// Admin-only.  Fully replaces an existing asset definition.  Removing a verifier that
    /// completed verifications requires force_verifier_removal to acknowledge the dangling
    /// references this creates.
    UpdateAssetDefinition {
        asset_definition: AssetDefinitionInput,
        force_verifier_removal: Option<bool>,
    },
    /// Admin-only.  Flips a definition's enabled flag.  The expected result must be provided to
    /// guard against out-of-order duplicate toggles.
    ToggleAssetDefinition {
        asset_type: String,
        expected_result: bool,
    },
    /// Admin-only.  Permanently removes an asset definition.  Rejected while any scope attribute
    /// of the type still awaits verification.
    DeleteAssetDefinition { qualifier: AssetQualifier },
    /// Admin-only.  Appends a new verifier to an existing definition.
    AddAssetVerifier {
        asset_type: String,
        verifier: VerifierDetail,
    },
    /// Admin-only.  Replaces the matching verifier entry on an existing definition.
    UpdateAssetVerifier {
        asset_type: String,
        verifier: VerifierDetail,
    },
    /// Replaces the access route list owned by one party on one scope attribute.  Only
    /// executable by the owner of the routes or the admin.
    UpdateAccessRoutes {
        identifier: AssetIdentifier,
        asset_type: String,
        owner_address: String,
        access_type: AccessDefinitionType,
        access_routes: Vec<AccessRoute>,
    },
    /// Admin-only.  Binds an additional restricted Provenance name directly to the contract.
    BindContractAlias { alias_name: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Fetches a single asset definition by asset type or scope spec address.
    QueryAssetDefinition { qualifier: AssetQualifier },
    /// Fetches every stored asset definition.
    QueryAssetDefinitions {},
    /// Fetches the scope attribute held by a scope for one asset type.
    QueryAssetScopeAttribute {
        identifier: AssetIdentifier,
        asset_type: String,
    },
    /// Fetches every scope attribute held by a scope across asset types.
    QueryAssetScopeAttributes { identifier: AssetIdentifier },
    /// Fetches the contract's base configuration.
    QueryState {},
    /// Fetches the contract's stored name and version record.
    QueryVersion {},
}

/// Optional values applied while a migration executes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MigrationOptions {
    /// Transfers administrative control to a new address alongside the code upgrade.
    pub new_admin_address: Option<String>,
}
impl MigrationOptions {
    pub fn has_changes(&self) -> bool {
        self.new_admin_address.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade { options: Option<MigrationOptions> },
}

/// The response payload emitted by the QueryAssetDefinitions route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct QueryAssetDefinitionsResponse {
    pub asset_definitions: Vec<super::types::asset_definition::AssetDefinition>,
}
