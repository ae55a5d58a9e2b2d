//! Returns the checkout to a known branch state for the next run. Runs on
//! every exit path, abort paths included.

use super::{PipelineContext, RELEASE_BRANCH};
use crate::exec::CommandRunner;
use std::process::Command;

pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) {
    println!("Cleaning workspace...");
    let steps: [&[&str]; 3] = [
        &["reset", "--hard"],
        &["clean", "-xdf", "-f"],
        &["checkout", RELEASE_BRANCH],
    ];
    for args in steps {
        let _ = runner.run(Command::new("git").current_dir(ctx.workspace).args(args));
    }
}
