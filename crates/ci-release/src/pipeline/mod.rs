//! The release pipeline: tree sync, codegen, build matrix, upload, cleanup.
//!
//! Stages run strictly in order. Checkpoints (tree pull, submodule update,
//! codegen) abort the run with a distinct exit code; everything else is
//! fire-and-forget and only the final build command's status feeds the
//! overall result.

use crate::exec::CommandRunner;
use std::path::Path;
use thiserror::Error;

pub mod build;
pub mod cleanup;
pub mod codegen;
pub mod prepare;
pub mod sync;

/// The branch this job releases from. The checkout is pinned to it on sync
/// and cleanup; codegen and the build matrix only run for payloads targeting
/// it.
pub const RELEASE_BRANCH: &str = "develop";

/// Read-only inputs shared by every stage.
#[derive(Clone, Copy)]
pub struct PipelineContext<'a> {
    pub workspace: &'a Path,
    pub tag: &'a str,
    pub branch: &'a str,
    pub node_name: &'a str,
    pub remote_home: &'a str,
}

/// Pipeline-critical failures, carrying the exit code the orchestrating
/// scheduler expects.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("git pull failed with exit code {0}")]
    TreeSync(i32),
    #[error("submodule update failed with exit code {0}")]
    Submodule(i32),
    #[error("binding glue codegen failed with exit code {0}")]
    Codegen(i32),
    #[error("android build failed with exit code {0}")]
    Build(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Exit-code contract: 2 for tree-sync and submodule failures, 1 for
    /// everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TreeSync(_) | Self::Submodule(_) => 2,
            Self::Codegen(_) | Self::Build(_) | Self::Other(_) => 1,
        }
    }
}

/// Runs the full pipeline. Cleanup runs on every path, abort paths included,
/// so the checkout is left on a known branch for the next run.
pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    let result = stages(runner, ctx);
    cleanup::run(runner, ctx);
    result
}

fn stages(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    sync::run(runner, ctx)?;
    codegen::run(runner, ctx)?;
    prepare::run(runner, ctx)?;
    build::run(runner, ctx)
}
