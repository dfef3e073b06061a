//! Command Runner Port
//!
//! Abstracts spawning of the external `ssh`/`scp` executables so the deploy
//! flow can be exercised without touching the network.

use std::fmt;

/// A program plus its argument list, never passed through a local shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('\'') {
                write!(f, " {}", crate::domain::services::shell_quote(arg))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Capture stdout/stderr, stdin closed (tool probes)
    Captured,
    /// Child shares our terminal (password prompts, remote output)
    Inherited,
    /// Like `Inherited`, but the child's stdout goes to our stderr so our
    /// stdout stays machine-readable
    InheritedStdoutToStderr,
}

/// Exit code plus whatever output was captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the child was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs to completion, blocking.
pub trait CommandRunner {
    /// Spawn `invocation` and wait for it.
    ///
    /// `Err` means the program could not be started at all.
    fn run(&self, invocation: &Invocation, stdio: StdioMode) -> std::io::Result<ProcessOutput>;
}
