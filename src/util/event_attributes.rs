use crate::core::types::asset_onboarding_status::AssetOnboardingStatus;

use super::constants::{
    ADDITIONAL_METADATA_KEY, ASSET_EVENT_TYPE_KEY, ASSET_ONBOARDING_STATUS_KEY,
    ASSET_SCOPE_ADDRESS_KEY, ASSET_TYPE_KEY, NEW_VALUE_KEY, SCOPE_OWNER_KEY,
    VERIFIER_ADDRESS_KEY,
};

/// Each mutating route emits exactly one of these values under the event type key, allowing
/// external indexers to discern which operation produced an event stream entry.
pub enum EventType {
    InstantiateContract,
    MigrateContract,
    OnboardAsset,
    VerifyAsset,
    AddAssetDefinition,
    UpdateAssetDefinition,
    ToggleAssetDefinition,
    DeleteAssetDefinition,
    AddAssetVerifier,
    UpdateAssetVerifier,
    UpdateAccessRoutes,
    BindContractAlias,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::OnboardAsset => "onboard_asset",
            EventType::VerifyAsset => "verify_asset",
            EventType::AddAssetDefinition => "add_asset_definition",
            EventType::UpdateAssetDefinition => "update_asset_definition",
            EventType::ToggleAssetDefinition => "toggle_asset_definition",
            EventType::DeleteAssetDefinition => "delete_asset_definition",
            EventType::AddAssetVerifier => "add_asset_verifier",
            EventType::UpdateAssetVerifier => "update_asset_verifier",
            EventType::UpdateAccessRoutes => "update_access_routes",
            EventType::BindContractAlias => "bind_contract_alias",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

/// A builder over the (key, value) response attributes shared by all mutating routes.
pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_asset_event<T1: Into<String>, T2: Into<String>>(
        event_type: EventType,
        asset_type: T1,
        scope_address: T2,
    ) -> Self {
        Self::new(event_type)
            .set_asset_type(asset_type)
            .set_scope_address(scope_address)
    }

    pub fn set_asset_type<T: Into<String>>(mut self, asset_type: T) -> Self {
        self.attributes
            .push((ASSET_TYPE_KEY.into(), asset_type.into()));
        self
    }

    pub fn set_scope_address<T: Into<String>>(mut self, scope_address: T) -> Self {
        self.attributes
            .push((ASSET_SCOPE_ADDRESS_KEY.into(), scope_address.into()));
        self
    }

    pub fn set_verifier<T: Into<String>>(mut self, verifier_address: T) -> Self {
        self.attributes
            .push((VERIFIER_ADDRESS_KEY.into(), verifier_address.into()));
        self
    }

    pub fn set_onboarding_status(mut self, status: &AssetOnboardingStatus) -> Self {
        self.attributes
            .push((ASSET_ONBOARDING_STATUS_KEY.into(), status.to_string()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }

    pub fn set_scope_owner<T: ToString>(mut self, scope_owner: T) -> Self {
        self.attributes
            .push((SCOPE_OWNER_KEY.into(), scope_owner.to_string()));
        self
    }

    pub fn set_additional_metadata(mut self, metadata: &EventAdditionalMetadata) -> Self {
        // Only append additional metadata if the metadata actually has keys
        if metadata.has_metadata() {
            self.attributes
                .push((ADDITIONAL_METADATA_KEY.into(), metadata.get_meta_string()));
        }
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

/// Collects freeform (key, value) pairs emitted by a route and aggregates them into a single
/// bracketed output attribute, keeping event streams flat for consumers.
pub struct EventAdditionalMetadata {
    fields: Vec<(String, String)>,
}
impl EventAdditionalMetadata {
    pub fn new() -> Self {
        Self { fields: vec![] }
    }

    pub fn has_metadata(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn add_metadata<S1: Into<String>, S2: Into<String>>(&mut self, key: S1, value: S2) {
        self.fields.push((key.into(), value.into()));
    }

    pub fn get_meta_string(&self) -> String {
        let mut map_strings = self
            .fields
            .iter()
            .map(|(key, value)| format!("[{}={}]", key, value))
            .collect::<Vec<String>>();
        map_strings.sort();
        map_strings.join(", ")
    }
}
impl Default for EventAdditionalMetadata {
    fn default() -> Self {
        Self::new()
    }
}
