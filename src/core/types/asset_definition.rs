use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::state::config_read,
    util::{
        aliases::{AssetResult, DepsC},
        functions::generate_asset_attribute_name,
        traits::ResultExtensions,
    },
};

use super::{scope_spec_identifier::ScopeSpecIdentifier, verifier_detail::VerifierDetail};

/// The registry entry for a single classification category.  Scopes conforming to the stored
/// scope spec may be onboarded under this asset type with any of the listed verifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetDefinition {
    /// The unique name of the classification category, ex: "mortgage".
    pub asset_type: String,
    /// The bech32 address of the scope specification that scopes of this type must conform to.
    /// Unique across all definitions.
    pub scope_spec_address: String,
    /// The verifiers authorized to review scopes onboarded under this type, each with its own
    /// fee schedule.
    pub verifiers: Vec<VerifierDetail>,
    /// Disabled definitions reject new onboarding requests but remain queryable.
    pub enabled: bool,
}
impl AssetDefinition {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        asset_type: S1,
        scope_spec_address: S2,
        verifiers: Vec<VerifierDetail>,
    ) -> Self {
        AssetDefinition {
            asset_type: asset_type.into(),
            scope_spec_address: scope_spec_address.into(),
            verifiers,
            enabled: true,
        }
    }

    /// Lowercases the asset type to produce the case-insensitive primary storage key.
    pub fn storage_key(&self) -> String {
        self.asset_type.to_lowercase()
    }

    /// Produces the fully-qualified Provenance name bound for this asset type, using the base
    /// contract name held in storage.
    pub fn attribute_name(&self, deps: &DepsC) -> AssetResult<String> {
        let state = config_read(deps.storage).load()?;
        generate_asset_attribute_name(&self.asset_type, state.base_contract_name).to_ok()
    }
}

/// The request-side shape of an asset definition.  Allows the scope spec to be referenced by
/// uuid or address, and leaves the enabled flag and name binding optional, as both are almost
/// always left at their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetDefinitionInput {
    pub asset_type: String,
    pub scope_spec_identifier: ScopeSpecIdentifier,
    pub verifiers: Vec<VerifierDetail>,
    pub enabled: Option<bool>,
    pub bind_name: Option<bool>,
}
impl AssetDefinitionInput {
    pub fn new<S1: Into<String>>(
        asset_type: S1,
        scope_spec_identifier: ScopeSpecIdentifier,
        verifiers: Vec<VerifierDetail>,
        enabled: Option<bool>,
        bind_name: Option<bool>,
    ) -> AssetDefinitionInput {
        AssetDefinitionInput {
            asset_type: asset_type.into(),
            scope_spec_identifier,
            verifiers,
            enabled,
            bind_name,
        }
    }

    /// Moves this input into a storable definition, resolving the scope spec identifier into its
    /// address form.
    pub fn into_asset_definition(self) -> AssetResult<AssetDefinition> {
        AssetDefinition {
            asset_type: self.asset_type,
            scope_spec_address: self.scope_spec_identifier.get_scope_spec_address()?,
            verifiers: self.verifiers,
            enabled: self.enabled.unwrap_or(true),
        }
        .to_ok()
    }

    /// Clones this input's values into a storable definition, resolving the scope spec
    /// identifier into its address form.
    pub fn as_asset_definition(&self) -> AssetResult<AssetDefinition> {
        AssetDefinition {
            asset_type: self.asset_type.clone(),
            scope_spec_address: self.scope_spec_identifier.get_scope_spec_address()?,
            verifiers: self.verifiers.clone(),
            enabled: self.enabled.unwrap_or(true),
        }
        .to_ok()
    }
}
