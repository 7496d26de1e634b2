use crate::{
    core::types::{access_route::AccessRoute, asset_scope_attribute::AssetScopeAttribute},
    util::aliases::AssetResult,
};

/// The storage-facing seam for the onboarding/verification state machine.  Implementations own
/// all reads and writes of scope attributes, keeping the route handlers focused on
/// authorization and sequencing.
pub trait AssetMetaRepository {
    /// Determines if a scope attribute exists for the given (scope address, asset type) pair.
    fn has_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<bool>;

    /// Persists a newly-constructed pending attribute.  A retry overwrites the denied attribute
    /// left behind by a failed verification; a first-time onboard requires that no attribute
    /// exist yet.
    fn onboard_asset(
        &mut self,
        attribute: &AssetScopeAttribute,
        is_retry: bool,
    ) -> AssetResult<()>;

    /// Overwrites an existing scope attribute with new contents.  The attribute must already
    /// exist under its pair key.
    fn update_attribute(&mut self, attribute: &AssetScopeAttribute) -> AssetResult<()>;

    /// Fetches a scope attribute by its pair key, failing with a NotFound error when absent.
    fn get_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<AssetScopeAttribute>;

    /// Fetches a scope attribute by its pair key, or None when absent.
    fn try_get_asset<S1: Into<String>, S2: Into<String>>(
        &self,
        scope_address: S1,
        asset_type: S2,
    ) -> AssetResult<Option<AssetScopeAttribute>>;

    /// Fetches all attributes held by a scope across every asset type it was onboarded under.
    fn get_assets<S1: Into<String>>(
        &self,
        scope_address: S1,
    ) -> AssetResult<Vec<AssetScopeAttribute>>;

    /// Transitions a pending attribute to its verified state, records the verification result,
    /// merges any verifier access routes, and releases the escrowed onboarding fee exactly once:
    /// distribution messages on success, a full requestor refund on denial.
    fn verify_asset<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        &mut self,
        scope_address: S1,
        asset_type: S2,
        success: bool,
        verification_message: Option<S3>,
        access_routes: Vec<AccessRoute>,
    ) -> AssetResult<()>;
}
