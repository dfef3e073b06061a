//! Process Runner
//!
//! Implements the CommandRunner port with `std::process::Command`.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, Invocation, ProcessOutput, StdioMode};

/// Spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &Invocation, stdio: StdioMode) -> std::io::Result<ProcessOutput> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        match stdio {
            StdioMode::Captured => {
                let output = cmd.stdin(Stdio::null()).output()?;
                Ok(ProcessOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                })
            }
            StdioMode::Inherited => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()?;
                Ok(ProcessOutput {
                    code: status.code(),
                    ..ProcessOutput::default()
                })
            }
            StdioMode::InheritedStdoutToStderr => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::from(std::io::stderr()))
                    .stderr(Stdio::inherit())
                    .status()?;
                Ok(ProcessOutput {
                    code: status.code(),
                    ..ProcessOutput::default()
                })
            }
        }
    }
}

/// Mock runner for testing
///
/// Answers with a fixed exit code per program and records every call.
/// Programs without an answer fail to spawn, like a missing executable.
#[cfg(test)]
#[derive(Default)]
pub struct MockCommandRunner {
    codes: std::collections::HashMap<String, i32>,
    pub calls: std::cell::RefCell<Vec<(Invocation, StdioMode)>>,
}

#[cfg(test)]
impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, program: &str, code: i32) -> Self {
        self.codes.insert(program.to_string(), code);
        self
    }

    /// Programs invoked, in order, with their first argument
    pub fn call_summary(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(inv, _)| match inv.args.first() {
                Some(first) => format!("{} {}", inv.program, first),
                None => inv.program.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
impl CommandRunner for MockCommandRunner {
    fn run(&self, invocation: &Invocation, stdio: StdioMode) -> std::io::Result<ProcessOutput> {
        self.calls.borrow_mut().push((invocation.clone(), stdio));
        match self.codes.get(&invocation.program) {
            Some(code) => Ok(ProcessOutput {
                code: Some(*code),
                ..ProcessOutput::default()
            }),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{}: not found", invocation.program),
            )),
        }
    }
}
