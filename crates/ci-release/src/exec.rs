//! Narrow seam around external command execution, so pipeline checkpoints can
//! be asserted uniformly and the stage sequencing can be tested without a
//! real checkout.

use anyhow::{Context, Result};
use std::process::Command;

pub trait CommandRunner {
    /// Runs the command to completion, inheriting stdio, and returns its exit
    /// code. A process killed by a signal is reported as -1.
    fn run(&self, cmd: &mut Command) -> Result<i32>;
}

/// Runs commands on the host, blocking until each completes.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &mut Command) -> Result<i32> {
        let status = cmd
            .status()
            .with_context(|| format!("Spawning `{}`", render(cmd)))?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Renders a command line for diagnostics and test assertions.
pub fn render(cmd: &Command) -> String {
    let mut out = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        out.push(' ');
        out.push_str(&arg.to_string_lossy());
    }
    out
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{render, CommandRunner};
    use anyhow::Result;
    use std::cell::{Cell, RefCell};
    use std::process::Command;

    struct FailRule {
        pattern: String,
        code: i32,
        /// 1-based occurrence to fail, or every occurrence when None.
        nth: Option<usize>,
        seen: Cell<usize>,
    }

    /// Records every command it is asked to run and fails the ones whose
    /// rendered command line matches a configured pattern.
    pub struct FakeRunner {
        log: RefCell<Vec<String>>,
        rules: Vec<FailRule>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self { log: RefCell::new(Vec::new()), rules: Vec::new() }
        }

        /// Every command containing `pattern` exits with `code`.
        pub fn fail_on(mut self, pattern: &str, code: i32) -> Self {
            self.rules.push(FailRule {
                pattern: pattern.to_string(),
                code,
                nth: None,
                seen: Cell::new(0),
            });
            self
        }

        /// Only the `nth` command containing `pattern` exits with `code`.
        pub fn fail_nth(mut self, pattern: &str, nth: usize, code: i32) -> Self {
            self.rules.push(FailRule {
                pattern: pattern.to_string(),
                code,
                nth: Some(nth),
                seen: Cell::new(0),
            });
            self
        }

        pub fn ran(&self, pattern: &str) -> bool {
            self.log.borrow().iter().any(|line| line.contains(pattern))
        }

        pub fn count(&self, pattern: &str) -> usize {
            self.log.borrow().iter().filter(|line| line.contains(pattern)).count()
        }

        pub fn commands(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, cmd: &mut Command) -> Result<i32> {
            let line = render(cmd);
            self.log.borrow_mut().push(line.clone());
            for rule in &self.rules {
                if line.contains(&rule.pattern) {
                    let seen = rule.seen.get() + 1;
                    rule.seen.set(seen);
                    if rule.nth.is_none() || rule.nth == Some(seen) {
                        return Ok(rule.code);
                    }
                }
            }
            Ok(0)
        }
    }
}
