//! Contains the domain types persisted and exchanged by the contract.

pub mod access_definition;
pub mod access_route;
pub mod asset_definition;
pub mod asset_identifier;
pub mod asset_onboarding_status;
pub mod asset_qualifier;
pub mod asset_scope_attribute;
pub mod asset_verification_result;
pub mod entity_detail;
pub mod fee_destination;
pub mod scope_spec_identifier;
pub mod verifier_detail;
