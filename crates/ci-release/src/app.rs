use crate::exec::SystemRunner;
use crate::pipeline::{self, PipelineContext};
use crate::status::{CommitState, StatusReporter};
use anyhow::Result;
use std::process::ExitCode;

pub fn run(cli: crate::cli::Cli) -> Result<ExitCode> {
    match cli.cmd {
        crate::cli::Cmd::Run => run_pipeline(),
        crate::cli::Cmd::Doctor => {
            crate::doctor::run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_pipeline() -> Result<ExitCode> {
    let env = crate::config::JobEnv::from_env()?;
    let payload = crate::payload::ReleasePayload::parse(&env.payload)?;
    println!("tag: {}", payload.tag);
    println!("url: {}", payload.html_url);

    let target_url = env.target_url();
    let reporter = StatusReporter::new(&env);
    reporter.set_description(&payload.description(), &target_url);
    reporter.post_commit_status(&payload.statuses_url, CommitState::Pending, &target_url);

    let ctx = PipelineContext {
        workspace: env.workspace.as_path(),
        tag: &payload.tag,
        branch: &payload.branch,
        node_name: &env.node_name,
        remote_home: &env.remote_home,
    };
    let result = pipeline::run(&SystemRunner, &ctx);

    let (state, code) = match &result {
        Ok(()) => (CommitState::Success, 0),
        Err(err) => {
            eprintln!("error: {err}");
            (CommitState::Failure, err.exit_code())
        }
    };
    reporter.post_commit_status(&payload.statuses_url, state, &target_url);
    Ok(ExitCode::from(code))
}
