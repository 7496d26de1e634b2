//! Contains the request-scoped service context used by the onboarding and verification routes.

/// The storage-facing trait implemented by the service.
pub mod asset_meta_repository;
/// The concrete per-request context over DepsMut.
pub mod asset_meta_service;
/// Message accumulation for response construction.
pub mod message_gathering_service;
