//! Regenerates the JS binding glue before the build. Only the release branch
//! carries generated bindings.

use super::{PipelineContext, StageError, RELEASE_BRANCH};
use crate::exec::CommandRunner;
use std::process::Command;

pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    if ctx.branch != RELEASE_BRANCH {
        return Ok(());
    }

    println!("Regenerating binding glue...");
    let code = runner.run(
        Command::new("python")
            .current_dir(ctx.workspace)
            .arg("tools/jenkins-scripts/gen_jsb.py"),
    )?;
    if code != 0 {
        return Err(StageError::Codegen(code));
    }
    Ok(())
}
