use core::fmt;
use std::fmt::{Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Denotes the lifecycle states of an [AssetScopeAttribute](super::asset_scope_attribute::AssetScopeAttribute).
/// New attributes begin as Pending.  A verification moves them to Approved or Denied.  Approved
/// is terminal for the (scope, asset type) pair, while Denied scopes may re-onboard and return
/// to Pending.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetOnboardingStatus {
    /// The asset has been onboarded and its fee is held in escrow, awaiting verification.
    Pending,
    /// The asset was verified and found unfit to be classified as its designated asset type.
    Denied,
    /// The asset was verified and successfully classified as its designated asset type.
    Approved,
}
impl Display for AssetOnboardingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pending => "pending",
                Self::Denied => "denied",
                Self::Approved => "approved",
            }
        )
    }
}
