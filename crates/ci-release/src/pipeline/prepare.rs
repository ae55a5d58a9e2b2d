//! Build-object staging: one shared obj directory, linked into each Android
//! project so the debug and release builds reuse the same NDK output tree.

use super::{PipelineContext, StageError};
use crate::exec::CommandRunner;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub const OBJ_DIR: &str = "android_build_objs";

/// Projects that share the NDK object directory.
#[cfg(any(target_os = "macos", windows))]
const LINKED_PROJECTS: [&str; 2] = ["cpp-empty-test", "cpp-tests"];

pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    let objs = ctx.workspace.join(OBJ_DIR);
    fs::create_dir(&objs)
        .with_context(|| format!("Creating {}", objs.display()))
        .map_err(StageError::Other)?;
    link_projects(runner, ctx, &objs);
    Ok(())
}

#[cfg(target_os = "macos")]
fn link_projects(_runner: &dyn CommandRunner, ctx: &PipelineContext, objs: &Path) {
    for project in LINKED_PROJECTS {
        let link = obj_link(ctx, project);
        if let Err(err) = std::os::unix::fs::symlink(objs, &link) {
            eprintln!("[prepare] failed to link {}: {err}", link.display());
        }
    }
}

#[cfg(windows)]
fn link_projects(runner: &dyn CommandRunner, ctx: &PipelineContext, objs: &Path) {
    use std::process::Command;

    for project in LINKED_PROJECTS {
        // mklink is a cmd builtin, not an executable.
        let _ = runner.run(
            Command::new("cmd")
                .args(["/C", "mklink", "/J"])
                .arg(obj_link(ctx, project))
                .arg(objs),
        );
    }
}

#[cfg(not(any(target_os = "macos", windows)))]
fn link_projects(_runner: &dyn CommandRunner, _ctx: &PipelineContext, _objs: &Path) {}

#[allow(dead_code)] // unused on build nodes that need no obj links
fn obj_link(ctx: &PipelineContext, project: &str) -> std::path::PathBuf {
    ctx.workspace
        .join("tests")
        .join(project)
        .join("proj.android")
        .join("obj")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::FakeRunner;

    fn ctx<'a>(workspace: &'a Path) -> PipelineContext<'a> {
        PipelineContext {
            workspace,
            tag: "v3.2",
            branch: "develop",
            node_name: "android_mac",
            remote_home: "download-host",
        }
    }

    #[test]
    fn test_creates_obj_dir() {
        let dir = tempfile::tempdir().unwrap();
        run(&FakeRunner::new(), &ctx(dir.path())).unwrap();
        assert!(dir.path().join(OBJ_DIR).is_dir());
    }

    #[test]
    fn test_existing_obj_dir_is_an_error() {
        // The sync stage wipes untracked files; a leftover obj dir means the
        // workspace was not cleaned and the run must not continue.
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(OBJ_DIR)).unwrap();
        let err = run(&FakeRunner::new(), &ctx(dir.path())).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_obj_link_path() {
        let link = obj_link(&ctx(Path::new("/ws")), "cpp-tests");
        assert_eq!(link, Path::new("/ws/tests/cpp-tests/proj.android/obj"));
    }
}
