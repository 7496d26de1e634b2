// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = The bech32 address of the scope related to the event (String)
pub const ASSET_SCOPE_ADDRESS_KEY: &str = "asset_scope_address";
/// Value = Asset Type (String)
pub const ASSET_TYPE_KEY: &str = "asset_type";
/// Value = The address of the verifier associated with the asset (String)
pub const VERIFIER_ADDRESS_KEY: &str = "asset_verifier_address";
/// Value = The current onboarding status of the related scope attribute (String)
pub const ASSET_ONBOARDING_STATUS_KEY: &str = "asset_onboarding_status";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";
/// Value = The scope owner that sent the onboarding message (String)
pub const SCOPE_OWNER_KEY: &str = "asset_scope_owner_address";
/// Value = An aggregated collection of extra key/value pairs emitted by a route (String)
pub const ADDITIONAL_METADATA_KEY: &str = "asset_additional_metadata";

//////////////////////
// Global Constants //
//////////////////////
pub const NHASH: &str = "nhash";
