use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{
    aliases::AssetResult, scope_address_utils::bech32_string_to_addr, traits::ResultExtensions,
};

use super::access_route::AccessRoute;

/// Differentiates access definitions by the role that created them, rather than requiring
/// consumers to recognize known addresses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessDefinitionType {
    /// Indicates that the access definition was created by the requestor that onboarded the scope.
    Requestor,
    /// Indicates that the access definition was created by the verifier assigned to the scope.
    Verifier,
}

/// Defines a collection of [AccessRoute](super::access_route::AccessRoute) values for a specific
/// owning address.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AccessDefinition {
    /// The bech32 address of the account that owns the underlying routes.
    pub owner_address: String,
    /// The methods of obtaining the underlying data for the scope.
    pub access_routes: Vec<AccessRoute>,
    /// The role that created this definition.
    pub definition_type: AccessDefinitionType,
}
impl AccessDefinition {
    /// Constructs a new instance of this struct, ensuring that the provided owner address is a
    /// valid Provenance Blockchain bech32 address.
    pub fn new_checked<S1: Into<String>>(
        owner_address: S1,
        access_routes: Vec<AccessRoute>,
        definition_type: AccessDefinitionType,
    ) -> AssetResult<Self> {
        Self {
            owner_address: bech32_string_to_addr(owner_address)?.into_string(),
            access_routes,
            definition_type,
        }
        .to_ok()
    }
}
