//! Best-effort progress reporting to the Jenkins dashboard and the GitHub
//! commit-status API. Failures here are printed and swallowed; the release
//! pipeline continues regardless.

use crate::config::JobEnv;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitState {
    Pending,
    Success,
    Failure,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    state: CommitState,
    target_url: &'a str,
}

pub struct StatusReporter {
    client: Option<Client>,
    jenkins_user: String,
    jenkins_password: String,
    github_token: String,
}

impl StatusReporter {
    pub fn new(env: &JobEnv) -> Self {
        let client = match Client::builder().timeout(Duration::from_secs(30)).build() {
            Ok(client) => Some(client),
            Err(err) => {
                eprintln!("[status] HTTP client unavailable: {err}");
                None
            }
        };
        Self {
            client,
            jenkins_user: env.jenkins_user.clone(),
            jenkins_password: env.jenkins_password.clone(),
            github_token: env.github_token.clone(),
        }
    }

    /// Updates the build description through the `submitDescription` form
    /// endpoint, the same request the Jenkins web UI issues.
    pub fn set_description(&self, description: &str, build_url: &str) {
        let Some(client) = &self.client else { return };
        let result = client
            .post(format!("{build_url}submitDescription"))
            .basic_auth(&self.jenkins_user, Some(&self.jenkins_password))
            .form(&[("description", description)])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status);
        if let Err(err) = result {
            eprintln!("[status] failed to set build description: {err}");
        }
    }

    /// Posts a commit status against the payload's `statuses_url`.
    pub fn post_commit_status(&self, statuses_url: &str, state: CommitState, target_url: &str) {
        let Some(client) = &self.client else { return };
        let result = client
            .post(statuses_url)
            .header("Authorization", format!("token {}", self.github_token))
            .json(&StatusBody { state, target_url })
            .send()
            .and_then(reqwest::blocking::Response::error_for_status);
        if let Err(err) = result {
            eprintln!("[status] failed to post commit status: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_state_wire_format() {
        assert_eq!(serde_json::to_string(&CommitState::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&CommitState::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&CommitState::Failure).unwrap(), "\"failure\"");
    }

    #[test]
    fn test_status_body_shape() {
        let body = StatusBody { state: CommitState::Pending, target_url: "https://ci/job/x/1/" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"state":"pending","target_url":"https://ci/job/x/1/"}"#
        );
    }
}
