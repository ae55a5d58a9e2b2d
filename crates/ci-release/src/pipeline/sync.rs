//! Working-tree reset and sync. The pull and the submodule update are
//! checkpoints; everything before them is fire-and-forget cleanup of a
//! possibly dirty job workspace.

use super::{PipelineContext, StageError, RELEASE_BRANCH};
use crate::exec::CommandRunner;
use std::process::Command;

pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    println!("Syncing {}...", RELEASE_BRANCH);

    let _ = runner.run(git(ctx).args(["reset", "--hard"]));
    let _ = runner.run(git(ctx).args(["clean", "-xdf", "-f"]));
    let _ = runner.run(git(ctx).args(["checkout", RELEASE_BRANCH]));
    let _ = runner.run(git(ctx).args(["clean", "-xdf", "-f"]));

    let code = runner.run(git(ctx).args(["pull", "origin", RELEASE_BRANCH]))?;
    if code != 0 {
        return Err(StageError::TreeSync(code));
    }

    let code = runner.run(git(ctx).args(["submodule", "update", "--init", "--force"]))?;
    if code != 0 {
        return Err(StageError::Submodule(code));
    }

    Ok(())
}

fn git(ctx: &PipelineContext) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(ctx.workspace);
    cmd
}
