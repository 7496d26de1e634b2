use cosmwasm_std::{Addr, Order, Storage};
use cosmwasm_storage::{singleton, singleton_read, ReadonlySingleton, Singleton};
use cw_storage_plus::{Index, IndexList, IndexedMap, MultiIndex, UniqueIndex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::asset_definition::AssetDefinition;
use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;
use crate::core::types::asset_qualifier::AssetQualifier;
use crate::core::types::asset_scope_attribute::AssetScopeAttribute;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub static STATE_KEY: &[u8] = b"state";

const ASSET_DEFINITIONS_NAMESPACE: &str = "asset_definitions";
const ASSET_DEFINITIONS_SCOPE_SPEC_NAMESPACE: &str = "asset_definitions__scope_spec";
const SCOPE_ATTRIBUTES_NAMESPACE: &str = "asset_scope_attributes";
const SCOPE_ATTRIBUTES_ASSET_TYPE_NAMESPACE: &str = "asset_scope_attributes__asset_type";

/// The core configuration record created at instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    /// The root Provenance name owned by the contract.  Asset types bind their attribute names
    /// beneath it.
    pub base_contract_name: String,
    /// The only address allowed to alter the definition registry or migrate the contract.
    pub admin: Addr,
}
impl State {
    pub fn new<S: Into<String>>(base_contract_name: S, admin: Addr) -> State {
        State {
            base_contract_name: base_contract_name.into(),
            admin,
        }
    }
}

pub fn config(storage: &mut dyn Storage) -> Singleton<State> {
    singleton(storage, STATE_KEY)
}

pub fn config_read(storage: &dyn Storage) -> ReadonlySingleton<State> {
    singleton_read(storage, STATE_KEY)
}

pub struct AssetDefinitionIndexes<'a> {
    /// Enables reverse lookup of a definition from the scope spec its scopes conform to.  Unique
    /// because two asset types may never share a scope spec.
    pub scope_spec: UniqueIndex<'a, String, AssetDefinition>,
}
impl<'a> IndexList<AssetDefinition> for AssetDefinitionIndexes<'a> {
    fn get_indexes(&self) -> Box<dyn Iterator<Item = &'_ dyn Index<AssetDefinition>> + '_> {
        let v: Vec<&dyn Index<AssetDefinition>> = vec![&self.scope_spec];
        Box::new(v.into_iter())
    }
}

/// The definition registry, keyed by lowercased asset type with a secondary unique index on the
/// scope spec address.
pub fn asset_definitions<'a>(
) -> IndexedMap<'a, &'a str, AssetDefinition, AssetDefinitionIndexes<'a>> {
    let indexes = AssetDefinitionIndexes {
        scope_spec: UniqueIndex::new(
            |d: &AssetDefinition| d.scope_spec_address.clone(),
            ASSET_DEFINITIONS_SCOPE_SPEC_NAMESPACE,
        ),
    };
    IndexedMap::new(ASSET_DEFINITIONS_NAMESPACE, indexes)
}

pub struct ScopeAttributeIndexes<'a> {
    /// Groups all scope attributes onboarded under a single asset type, enabling registry
    /// operations to detect in-flight onboarding before destructive changes.
    pub asset_type: MultiIndex<'a, String, AssetScopeAttribute>,
}
impl<'a> IndexList<AssetScopeAttribute> for ScopeAttributeIndexes<'a> {
    fn get_indexes(&self) -> Box<dyn Iterator<Item = &'_ dyn Index<AssetScopeAttribute>> + '_> {
        let v: Vec<&dyn Index<AssetScopeAttribute>> = vec![&self.asset_type];
        Box::new(v.into_iter())
    }
}

/// The scope attribute store, keyed by (scope address, asset type) with a secondary index on the
/// asset type.
pub fn asset_scope_attributes<'a>(
) -> IndexedMap<'a, (&'a str, &'a str), AssetScopeAttribute, ScopeAttributeIndexes<'a>> {
    let indexes = ScopeAttributeIndexes {
        asset_type: MultiIndex::new(
            |attribute: &AssetScopeAttribute| attribute.asset_type.to_lowercase(),
            SCOPE_ATTRIBUTES_NAMESPACE,
            SCOPE_ATTRIBUTES_ASSET_TYPE_NAMESPACE,
        ),
    };
    IndexedMap::new(SCOPE_ATTRIBUTES_NAMESPACE, indexes)
}

/// Stores a brand new asset definition, rejecting duplicates on either the asset type key or the
/// reverse scope spec index.
pub fn insert_asset_definition(
    storage: &mut dyn Storage,
    definition: &AssetDefinition,
) -> AssetResult<()> {
    let state = asset_definitions();
    let key = definition.storage_key();
    if state.may_load(storage, &key)?.is_some() {
        return ContractError::RecordAlreadyExists {
            explanation: format!(
                "unique constraints violated! record exists with asset type [{}]",
                definition.asset_type,
            ),
        }
        .to_err();
    }
    if may_load_asset_definition_by_scope_spec(storage, &definition.scope_spec_address)?.is_some() {
        return ContractError::RecordAlreadyExists {
            explanation: format!(
                "unique constraints violated! record exists with scope spec address [{}]",
                definition.scope_spec_address,
            ),
        }
        .to_err();
    }
    state
        .save(storage, &key, definition)
        .map_err(ContractError::Std)
}

/// Fully replaces an existing asset definition, rejecting the write if the asset type is not yet
/// registered or if the new scope spec address belongs to a different definition.
pub fn replace_asset_definition(
    storage: &mut dyn Storage,
    definition: &AssetDefinition,
) -> AssetResult<()> {
    let state = asset_definitions();
    let key = definition.storage_key();
    if state.may_load(storage, &key)?.is_none() {
        return ContractError::RecordNotFound {
            explanation: format!(
                "no record exists to update for asset type [{}]",
                definition.asset_type,
            ),
        }
        .to_err();
    }
    if let Some(scope_spec_match) =
        may_load_asset_definition_by_scope_spec(storage, &definition.scope_spec_address)?
    {
        if scope_spec_match.storage_key() != key {
            return ContractError::RecordAlreadyExists {
                explanation: format!(
                    "scope spec address [{}] is already bound to asset type [{}]",
                    definition.scope_spec_address, scope_spec_match.asset_type,
                ),
            }
            .to_err();
        }
    }
    state
        .save(storage, &key, definition)
        .map_err(ContractError::Std)
}

pub fn may_load_asset_definition_by_type<S: Into<String>>(
    storage: &dyn Storage,
    asset_type: S,
) -> AssetResult<Option<AssetDefinition>> {
    asset_definitions()
        .may_load(storage, &asset_type.into().to_lowercase())
        .map_err(ContractError::Std)
}

/// Finds an asset definition by its asset type key, or produces a RecordNotFound error.
pub fn load_asset_definition_by_type<S: Into<String>>(
    storage: &dyn Storage,
    asset_type: S,
) -> AssetResult<AssetDefinition> {
    let asset_type = asset_type.into();
    may_load_asset_definition_by_type(storage, &asset_type)?.ok_or(ContractError::RecordNotFound {
        explanation: format!("no asset definition existed for asset type [{}]", asset_type),
    })
}

pub fn may_load_asset_definition_by_scope_spec<S: Into<String>>(
    storage: &dyn Storage,
    scope_spec_address: S,
) -> AssetResult<Option<AssetDefinition>> {
    asset_definitions()
        .idx
        .scope_spec
        .item(storage, scope_spec_address.into())?
        .map(|(_, definition)| definition)
        .to_ok()
}

/// Finds an asset definition through the reverse scope spec index, or produces a RecordNotFound
/// error.
pub fn load_asset_definition_by_scope_spec<S: Into<String>>(
    storage: &dyn Storage,
    scope_spec_address: S,
) -> AssetResult<AssetDefinition> {
    let scope_spec_address = scope_spec_address.into();
    may_load_asset_definition_by_scope_spec(storage, &scope_spec_address)?.ok_or(
        ContractError::RecordNotFound {
            explanation: format!(
                "no asset definition existed for scope spec address [{}]",
                scope_spec_address,
            ),
        },
    )
}

/// Finds an asset definition by either of its unique identifying values.
pub fn load_asset_definition_by_qualifier(
    storage: &dyn Storage,
    qualifier: &AssetQualifier,
) -> AssetResult<AssetDefinition> {
    match qualifier {
        AssetQualifier::AssetType(asset_type) => load_asset_definition_by_type(storage, asset_type),
        AssetQualifier::ScopeSpecAddress(scope_spec_address) => {
            load_asset_definition_by_scope_spec(storage, scope_spec_address)
        }
    }
}

/// Removes an asset definition from storage, returning the asset type of the deleted record.
pub fn delete_asset_definition_by_qualifier(
    storage: &mut dyn Storage,
    qualifier: &AssetQualifier,
) -> AssetResult<String> {
    let definition = load_asset_definition_by_qualifier(storage, qualifier)?;
    asset_definitions().remove(storage, &definition.storage_key())?;
    definition.asset_type.to_ok()
}

/// Lists every stored asset definition in asset type key order.
pub fn list_asset_definitions(storage: &dyn Storage) -> AssetResult<Vec<AssetDefinition>> {
    asset_definitions()
        .range(storage, None, None, Order::Ascending)
        .map(|result| {
            result
                .map(|(_, definition)| definition)
                .map_err(ContractError::Std)
        })
        .collect()
}

/// Writes a scope attribute under its (scope address, asset type) key, overwriting any previous
/// record for the pair.
pub fn save_scope_attribute(
    storage: &mut dyn Storage,
    attribute: &AssetScopeAttribute,
) -> AssetResult<()> {
    // The asset type portion of the key is lowercased to match the definition registry's
    // case-insensitive keying
    let asset_type_key = attribute.asset_type.to_lowercase();
    asset_scope_attributes()
        .save(
            storage,
            (&attribute.scope_address, &asset_type_key),
            attribute,
        )
        .map_err(ContractError::Std)
}

pub fn may_load_scope_attribute<S1: Into<String>, S2: Into<String>>(
    storage: &dyn Storage,
    scope_address: S1,
    asset_type: S2,
) -> AssetResult<Option<AssetScopeAttribute>> {
    asset_scope_attributes()
        .may_load(
            storage,
            (&scope_address.into(), &asset_type.into().to_lowercase()),
        )
        .map_err(ContractError::Std)
}

/// Finds the scope attribute for a (scope address, asset type) pair, or produces a NotFound
/// error in the standard format used by lookup failures.
pub fn load_scope_attribute<S1: Into<String>, S2: Into<String>>(
    storage: &dyn Storage,
    scope_address: S1,
    asset_type: S2,
) -> AssetResult<AssetScopeAttribute> {
    let scope_address = scope_address.into();
    let asset_type = asset_type.into();
    may_load_scope_attribute(storage, &scope_address, &asset_type)?.ok_or(
        ContractError::NotFound {
            explanation: format!(
                "scope at address [{}] did not include an asset scope attribute for asset type [{}]",
                scope_address, asset_type,
            ),
        },
    )
}

/// Lists every attribute held by a single scope across all asset types it was onboarded under.
pub fn load_scope_attributes_for_scope<S: Into<String>>(
    storage: &dyn Storage,
    scope_address: S,
) -> AssetResult<Vec<AssetScopeAttribute>> {
    asset_scope_attributes()
        .prefix(&scope_address.into())
        .range(storage, None, None, Order::Ascending)
        .map(|result| {
            result
                .map(|(_, attribute)| attribute)
                .map_err(ContractError::Std)
        })
        .collect()
}

/// Lists every attribute onboarded under an asset type via the secondary index.
pub fn load_scope_attributes_for_asset_type<S: Into<String>>(
    storage: &dyn Storage,
    asset_type: S,
) -> AssetResult<Vec<AssetScopeAttribute>> {
    asset_scope_attributes()
        .idx
        .asset_type
        .prefix(asset_type.into().to_lowercase())
        .range(storage, None, None, Order::Ascending)
        .map(|result| {
            result
                .map(|(_, attribute)| attribute)
                .map_err(ContractError::Std)
        })
        .collect()
}

/// Determines whether any scope attribute of the given asset type is still awaiting
/// verification.  Pending attributes hold escrowed fees, so destructive registry operations must
/// consult this before proceeding.
pub fn asset_type_has_pending_attributes<S: Into<String>>(
    storage: &dyn Storage,
    asset_type: S,
) -> AssetResult<bool> {
    load_scope_attributes_for_asset_type(storage, asset_type)?
        .iter()
        .any(|attribute| attribute.onboarding_status == AssetOnboardingStatus::Pending)
        .to_ok()
}
