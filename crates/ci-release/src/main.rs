//! # ci-release
//!
//! Runner for the tag-release CI job: updates the Jenkins build description,
//! posts a pending GitHub commit status, syncs the checkout, regenerates the
//! binding glue, builds the Android test APKs for debug and release, uploads
//! them to the download host, and exits with the code the scheduler expects.
//!
//! ## Usage
//!
//! ```bash
//! ci-release run       # full pipeline, driven by the job environment
//! ci-release doctor    # preflight-check the external tools
//! ```

use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod doctor;
mod exec;
mod payload;
mod pipeline;
mod status;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match app::run(cli) {
        Ok(code) => code,
        Err(err) => {
            // The scheduler keys off the exit code; any uncaught error maps
            // to 1 so the process always terminates with a defined status.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
