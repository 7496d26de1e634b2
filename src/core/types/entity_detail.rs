use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An optional, purely human-facing set of fields describing a verifier to external consumers
/// browsing the asset definition query output.  None of these values drive contract behavior.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct EntityDetail {
    /// A short name describing the verifier entity.
    pub name: Option<String>,
    /// A longer description of the verifier's purpose or operation.
    pub description: Option<String>,
    /// A web link to the verifier's home page.
    pub home_url: Option<String>,
    /// A web link to the source code backing the verifier's process.
    pub source_url: Option<String>,
}
impl EntityDetail {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>, S4: Into<String>>(
        name: S1,
        description: S2,
        home_url: S3,
        source_url: S4,
    ) -> Self {
        EntityDetail {
            name: Some(name.into()),
            description: Some(description.into()),
            home_url: Some(home_url.into()),
            source_url: Some(source_url.into()),
        }
    }
}
