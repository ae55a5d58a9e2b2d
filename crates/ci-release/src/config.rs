use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Job environment, read once at startup. Every variable is required; a
/// missing one fails the run by name before any side effect.
#[derive(Clone, Debug)]
pub struct JobEnv {
    pub workspace: PathBuf,
    pub jenkins_url: String,
    pub job_name: String,
    pub build_number: String,
    pub node_name: String,
    pub remote_home: String,
    pub jenkins_user: String,
    pub jenkins_password: String,
    pub github_token: String,
    pub payload: String,
}

impl JobEnv {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            workspace: PathBuf::from(required("WORKSPACE")?),
            jenkins_url: required("JENKINS_URL")?,
            job_name: required("JOB_NAME")?,
            build_number: required("BUILD_NUMBER")?,
            node_name: required("NODE_NAME")?,
            remote_home: required("REMOTE_HOME")?,
            jenkins_user: required("JENKINS_ADMIN")?,
            jenkins_password: required("JENKINS_ADMIN_PW")?,
            github_token: required("GITHUB_ACCESS_TOKEN")?,
            payload: required("payload")?,
        })
    }

    /// URL of the parent build, `<jenkins>/job/<job>/<build>/`. Multibranch
    /// job names carry extra path segments; only the first names the job.
    pub fn target_url(&self) -> String {
        let job = self.job_name.split('/').next().unwrap_or(&self.job_name);
        format!("{}job/{}/{}/", self.jenkins_url, job, self.build_number)
    }
}

fn required(name: &'static str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_fixture() -> JobEnv {
        JobEnv {
            workspace: PathBuf::from("/var/jenkins/workspace/release"),
            jenkins_url: "https://ci.example.com/".to_string(),
            job_name: "release-test/android".to_string(),
            build_number: "42".to_string(),
            node_name: "android_mac".to_string(),
            remote_home: "download-host".to_string(),
            jenkins_user: "admin".to_string(),
            jenkins_password: "pw".to_string(),
            github_token: "tok".to_string(),
            payload: String::new(),
        }
    }

    #[test]
    fn test_target_url_uses_first_job_segment() {
        assert_eq!(
            env_fixture().target_url(),
            "https://ci.example.com/job/release-test/42/"
        );
    }

    #[test]
    fn test_target_url_plain_job_name() {
        let mut env = env_fixture();
        env.job_name = "release-test".to_string();
        assert_eq!(env.target_url(), "https://ci.example.com/job/release-test/42/");
    }
}
