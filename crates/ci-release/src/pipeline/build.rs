//! The build matrix: {debug, release} x test targets, driven through the
//! platform build script, packaged with ant and shipped to the download host.

use super::{PipelineContext, StageError, RELEASE_BRANCH};
use crate::exec::CommandRunner;
use std::process::Command;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub const ALL: [BuildMode; 2] = [BuildMode::Debug, BuildMode::Release];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }
}

/// An Android test project produced by the build.
pub struct TestTarget {
    pub name: &'static str,
    pub project_dir: &'static str,
}

pub const TARGETS: [TestTarget; 4] = [
    TestTarget { name: "cpp-empty-test", project_dir: "tests/cpp-empty-test/proj.android" },
    TestTarget { name: "cpp-tests", project_dir: "tests/cpp-tests/proj.android" },
    TestTarget { name: "lua-empty-test", project_dir: "tests/lua-empty-test/project/proj.android" },
    TestTarget { name: "lua-tests", project_dir: "tests/lua-tests/project/proj.android" },
];

/// Nodes that carry the Android SDK/NDK toolchain.
fn is_android_build_node(node: &str) -> bool {
    node == "android_mac" || node == "android_win7"
}

/// Runs the matrix. Only the last build command's status decides the overall
/// result; earlier iterations and all packaging/upload commands are
/// fire-and-forget. Kept as-is for compatibility with what the scheduler
/// observes today.
pub fn run(runner: &dyn CommandRunner, ctx: &PipelineContext) -> Result<(), StageError> {
    let mut last_build = 0;

    for mode in BuildMode::ALL {
        if ctx.branch != RELEASE_BRANCH || !is_android_build_node(ctx.node_name) {
            continue;
        }
        println!("Start build android ({})...", mode.as_str());
        last_build = runner.run(
            Command::new("python")
                .current_dir(ctx.workspace)
                .args(["build/android-build.py", "-b", mode.as_str(), "-n", "-j10", "all"]),
        )?;
        if last_build == 0 {
            package_and_upload(runner, ctx, mode);
        }
    }

    println!("build finished and returned {last_build}");
    if last_build != 0 {
        return Err(StageError::Build(last_build));
    }
    Ok(())
}

fn package_and_upload(runner: &dyn CommandRunner, ctx: &PipelineContext, mode: BuildMode) {
    let _ = runner.run(Command::new("android").current_dir(ctx.workspace).args([
        "update",
        "project",
        "-p",
        "cocos/2d/platform/android/java/",
        "-t",
        "android-13",
    ]));

    let remote_dir = format!("/data/download/{}/", ctx.tag);
    for target in &TARGETS {
        let _ = runner.run(Command::new("android").current_dir(ctx.workspace).args([
            "update",
            "project",
            "-p",
            target.project_dir,
            "-t",
            "android-13",
        ]));

        // ant's packaging target is always `debug`; the native libraries
        // already carry the requested build mode.
        let local_apk = ctx
            .workspace
            .join(target.project_dir)
            .join(format!("{}.apk", target.name));
        let build_xml = format!("{}/build.xml", target.project_dir);
        let out_file = format!("-Dout.final.file={}", local_apk.display());
        let _ = runner.run(Command::new("ant").current_dir(ctx.workspace).args([
            "debug",
            "-f",
            build_xml.as_str(),
            out_file.as_str(),
        ]));

        let _ = runner.run(
            Command::new("ssh")
                .current_dir(ctx.workspace)
                .arg(ctx.remote_home)
                .arg(format!("mkdir -p {remote_dir}")),
        );
        let remote_apk = format!(
            "{}:{}{}-{}-{}.apk",
            ctx.remote_home,
            remote_dir,
            target.name,
            ctx.tag,
            mode.as_str()
        );
        let _ = runner.run(
            Command::new("scp")
                .current_dir(ctx.workspace)
                .arg(&local_apk)
                .arg(&remote_apk),
        );
    }
}
