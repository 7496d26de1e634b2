use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{
    aliases::AssetResult,
    scope_address_utils::{
        scope_spec_address_to_scope_spec_uuid, scope_spec_uuid_to_scope_spec_address,
    },
    traits::ResultExtensions,
};

/// The two interchangeable ways an asset definition can reference its backing scope
/// specification.  Definitions always store the address form; this enum lets request payloads
/// supply either.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSpecIdentifier {
    Uuid(String),
    Address(String),
}
impl ScopeSpecIdentifier {
    pub fn uuid<S: Into<String>>(scope_spec_uuid: S) -> Self {
        Self::Uuid(scope_spec_uuid.into())
    }

    pub fn address<S: Into<String>>(scope_spec_address: S) -> Self {
        Self::Address(scope_spec_address.into())
    }

    pub fn get_scope_spec_uuid(&self) -> AssetResult<String> {
        match self {
            Self::Uuid(scope_spec_uuid) => (*scope_spec_uuid).clone().to_ok(),
            Self::Address(scope_spec_address) => {
                scope_spec_address_to_scope_spec_uuid(scope_spec_address)
            }
        }
    }

    pub fn get_scope_spec_address(&self) -> AssetResult<String> {
        match self {
            Self::Uuid(scope_spec_uuid) => scope_spec_uuid_to_scope_spec_address(scope_spec_uuid),
            Self::Address(scope_spec_address) => (*scope_spec_address).clone().to_ok(),
        }
    }
}
