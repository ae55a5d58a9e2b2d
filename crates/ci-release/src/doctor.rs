use anyhow::{bail, Result};

/// External tools the pipeline shells out to.
const REQUIRED_TOOLS: [&str; 6] = ["git", "python", "android", "ant", "ssh", "scp"];

pub fn run() -> Result<()> {
    let mut ok = true;

    for tool in REQUIRED_TOOLS {
        if which::which(tool).is_ok() {
            eprintln!("[OK] {tool}");
        } else {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
