//! Contains one module per query route exposed by the contract.

pub mod query_asset_definition;
pub mod query_asset_definitions;
pub mod query_asset_scope_attribute;
pub mod query_state;
pub mod query_version;
