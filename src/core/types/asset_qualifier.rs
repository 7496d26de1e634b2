use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The two ways an asset definition can be located: directly by its asset type key, or in
/// reverse through the scope spec address it is bound to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetQualifier {
    AssetType(String),
    ScopeSpecAddress(String),
}
impl AssetQualifier {
    pub fn asset_type<S: Into<String>>(asset_type: S) -> Self {
        Self::AssetType(asset_type.into())
    }

    pub fn scope_spec_address<S: Into<String>>(scope_spec_address: S) -> Self {
        Self::ScopeSpecAddress(scope_spec_address.into())
    }
}
