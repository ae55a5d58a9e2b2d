use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ci-release")]
#[command(about = "Release pipeline runner for the Android test-build CI job")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Run the release pipeline: sync, codegen, build matrix, upload.
    ///
    /// Reads the job environment and the `payload` variable set by the
    /// webhook trigger. Exits 0 on success, 2 on tree-sync or submodule
    /// failure, 1 on any other failure.
    Run,

    /// Check that the external tools the pipeline shells out to are in PATH.
    Doctor,
}
