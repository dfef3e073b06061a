//! Test environment builder for isolated tcboot testing.
//!
//! The fake OpenSSH tools are shell scripts that append their argv to a
//! log file, so tests can assert exactly what would have been run.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the tcboot binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the run
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Directory holding the fake `ssh` and `scp`
    bin_dir: TempDir,
    tcboot_bin: PathBuf,
}

impl TestEnv {
    /// Create an environment with working fake `ssh` and `scp`.
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin_dir: TempDir::new().expect("Failed to create bin dir"),
            tcboot_bin: PathBuf::from(env!("CARGO_BIN_EXE_tcboot")),
        };
        env.install_fake_tools();
        env
    }

    /// Get path relative to the working directory
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn ssh_path(&self) -> PathBuf {
        self.bin_dir.path().join("ssh")
    }

    pub fn scp_path(&self) -> PathBuf {
        self.bin_dir.path().join("scp")
    }

    fn log_path(&self) -> PathBuf {
        self.bin_dir.path().join("calls.log")
    }

    /// Create a boot folder with one file in the working directory
    pub fn create_boot_folder(&self, name: &str) -> PathBuf {
        let boot = self.project_path(name);
        fs::create_dir_all(&boot).expect("Failed to create boot folder");
        fs::write(boot.join("CurrentConfig.xml"), "<TcConfig/>").expect("Failed to write file");
        boot
    }

    /// Write a file to the working directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Every fake tool call so far, one `program args...` line each
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run tcboot from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run tcboot with extra env vars (applied after the defaults)
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.tcboot_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("NO_COLOR", "1")
            .env_remove("CI")
            .env_remove("TCBOOT_USERNAME")
            .env_remove("TCBOOT_DESTINATION")
            .env_remove("TCBOOT_COLOR")
            .env("TCBOOT_SSH", self.ssh_path())
            .env("TCBOOT_SCP", self.scp_path());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tcboot");
        output_to_result(output)
    }

    #[cfg(unix)]
    fn install_fake_tools(&self) {
        let log = self.log_path();
        write_script(
            &self.ssh_path(),
            &format!(
                "#!/bin/sh\necho \"ssh $*\" >> '{log}'\nif [ \"$1\" = \"-V\" ]; then echo 'OpenSSH_fake' >&2; exit 0; fi\nexit ${{FAKE_SSH_EXIT:-0}}\n",
                log = log.display()
            ),
        );
        write_script(
            &self.scp_path(),
            &format!(
                "#!/bin/sh\necho \"scp $*\" >> '{log}'\nif [ \"$1\" = \"-h\" ]; then echo 'usage: scp' >&2; exit 1; fi\nexit ${{FAKE_SCP_EXIT:-0}}\n",
                log = log.display()
            ),
        );
    }

    #[cfg(not(unix))]
    fn install_fake_tools(&self) {}
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, body).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod fake tool");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
