use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The outcome recorded by a verifier against an onboarded scope.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetVerificationResult {
    /// A free-form message describing the result of the verification process.
    pub message: String,
    /// Whether or not the asset was classified as its designated asset type.
    pub success: bool,
}
