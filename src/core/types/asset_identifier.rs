use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{
    aliases::AssetResult,
    scope_address_utils::{asset_uuid_to_scope_address, scope_address_to_asset_uuid},
    traits::ResultExtensions,
};

/// The two interchangeable ways a caller can reference an asset: by the uuid recorded when the
/// scope was written, or by the scope's bech32 address.  Either form can be derived from the
/// other, so every route accepts both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetIdentifier {
    AssetUuid(String),
    ScopeAddress(String),
}
impl AssetIdentifier {
    pub fn asset_uuid<S: Into<String>>(asset_uuid: S) -> Self {
        Self::AssetUuid(asset_uuid.into())
    }

    pub fn scope_address<S: Into<String>>(scope_address: S) -> Self {
        Self::ScopeAddress(scope_address.into())
    }

    pub fn get_asset_uuid(&self) -> AssetResult<String> {
        match self {
            Self::AssetUuid(asset_uuid) => (*asset_uuid).clone().to_ok(),
            Self::ScopeAddress(scope_address) => scope_address_to_asset_uuid(scope_address),
        }
    }

    pub fn get_scope_address(&self) -> AssetResult<String> {
        match self {
            Self::AssetUuid(asset_uuid) => asset_uuid_to_scope_address(asset_uuid),
            Self::ScopeAddress(scope_address) => (*scope_address).clone().to_ok(),
        }
    }

    /// Derives whichever value was not provided, ensuring that both the asset uuid and the scope
    /// address are available to the caller.
    pub fn to_identifiers(&self) -> AssetResult<AssetIdentifiers> {
        AssetIdentifiers::new(self.get_asset_uuid()?, self.get_scope_address()?).to_ok()
    }
}

/// A simple named collection of both the asset uuid and scope address.
pub struct AssetIdentifiers {
    pub asset_uuid: String,
    pub scope_address: String,
}
impl AssetIdentifiers {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_uuid: S1, scope_address: S2) -> Self {
        Self {
            asset_uuid: asset_uuid.into(),
            scope_address: scope_address.into(),
        }
    }
}
