use anyhow::{Context, Result};
use serde::Deserialize;

/// Release event delivered by the webhook trigger, handed to the job as a
/// JSON document in the `payload` environment variable.
#[derive(Clone, Debug, Deserialize)]
pub struct ReleasePayload {
    pub tag: String,
    pub html_url: String,
    pub statuses_url: String,
    pub branch: String,
}

impl ReleasePayload {
    /// Parses the payload. Every field is required; a malformed or truncated
    /// payload fails the run before any command is issued.
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Parsing release payload")
    }

    /// HTML snippet shown as the Jenkins build description.
    pub fn description(&self) -> String {
        format!(
            "<h3><a href={}>{} is release</a></h3>",
            self.html_url, self.tag
        )
    }
}
