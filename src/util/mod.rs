//! Contains shared helper functionality used across all contract routes.

/// Type aliases that shorten commonly-repeated contract signatures.
pub mod aliases;
/// Output attribute keys and other global constant values.
pub mod constants;
/// Guard functions shared by administrative routes.
pub mod contract_helpers;
/// The response attribute builder emitted by every mutating route.
pub mod event_attributes;
/// Fee escrow settlement math.
pub mod fees;
/// Standalone helper functions.
pub mod functions;
/// Conversions between uuids and Provenance metadata addresses.
pub mod scope_address_utils;
/// Functional extension traits.
pub mod traits;
