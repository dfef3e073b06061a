//! Remote Script Composer
//!
//! Builds the chain of shell commands run on the device after the upload.
//!
//! Layout (no restart = 9 steps, restart = 13 steps):
//!
//! 1. banner
//! 2. create the destination directory if absent
//! 3. fix ownership if owner or group differs
//! 4. fix write permission if not writable
//! 5. copy the uploaded folder into the destination
//! 6. remove the upload from the home directory
//! 7.. restart tail, or skip notice, both ending in a mode query
//!
//! Every provisioning step is guarded so repeat runs against a correctly
//! provisioned device run no `doas` command at all. Steps are joined with
//! `&&`, so the first failing step ends the chain.

use crate::config::RemoteConfig;

/// What a step does, for callers that care more than the shell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Notice,
    EnsureDirectory,
    EnsureOwnership,
    EnsurePermissions,
    CopyFiles,
    RemoveUpload,
    EnsureDoasRule,
    Restart,
    QueryMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStep {
    pub kind: StepKind,
    pub command: String,
}

impl RemoteStep {
    fn new(kind: StepKind, command: impl Into<String>) -> Self {
        Self {
            kind,
            command: command.into(),
        }
    }

    fn notice(message: &str) -> Self {
        Self::new(StepKind::Notice, format!("echo {}", shell_quote(message)))
    }
}

/// Inputs to the composer
#[derive(Debug, Clone, Copy)]
pub struct ScriptParams<'a> {
    /// Name of the uploaded folder in the remote home directory
    pub folder_name: &'a str,
    /// SSH user; owns the destination and gets the doas rule
    pub username: &'a str,
    pub restart: bool,
    pub remote: &'a RemoteConfig,
}

/// Ordered, immutable list of remote steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteScript {
    steps: Vec<RemoteStep>,
}

impl RemoteScript {
    pub fn compose(params: &ScriptParams<'_>) -> Self {
        let remote = params.remote;
        let dest = shell_word(&remote.destination);
        let folder = shell_word(params.folder_name);
        let exe = shell_word(&remote.control_exe);

        let mut steps = vec![
            RemoteStep::notice(&format!(
                "Deploying {} to {}...",
                params.folder_name, remote.destination
            )),
            RemoteStep::new(
                StepKind::EnsureDirectory,
                format!(
                    "if [ ! -d {dest} ]; then echo 'Creating Boot directory...' && doas mkdir -p {dest}; fi"
                ),
            ),
            RemoteStep::new(
                StepKind::EnsureOwnership,
                format!(
                    "if [ \"$(stat -f '%Su' {dest})\" != {user} ] || [ \"$(stat -f '%Sg' {dest})\" != {group} ]; \
                     then echo 'Fixing Boot folder ownership...' && doas chown -R {owner} {dest}; fi",
                    user = shell_quote(params.username),
                    group = shell_quote(&remote.group),
                    owner = shell_word(&format!("{}:{}", params.username, remote.group)),
                ),
            ),
            RemoteStep::new(
                StepKind::EnsurePermissions,
                format!(
                    "if [ ! -w {dest} ]; then echo 'Fixing Boot folder write permission...' && doas chmod -R u+rwxX {dest}; fi"
                ),
            ),
            RemoteStep::new(
                StepKind::CopyFiles,
                format!("cd ~/{folder} && echo 'Copying files...' && cp -R ./* {dest}/"),
            ),
            RemoteStep::new(StepKind::RemoveUpload, format!("cd ~ && rm -rf {folder}")),
        ];

        if params.restart {
            let rule = doas_rule(params.username, &remote.control_exe);
            let conf = shell_word(&remote.doas_conf);
            steps.push(RemoteStep::notice(&format!(
                "Checking doas configuration for {}...",
                remote.control_exe
            )));
            steps.push(RemoteStep::new(
                StepKind::EnsureDoasRule,
                format!(
                    "if ! grep -qF {rule} {conf} 2>/dev/null; \
                     then echo {adding} && echo {rule} | doas tee -a {conf} > /dev/null; \
                     else echo {exists}; fi",
                    rule = shell_quote(&rule),
                    adding = shell_quote(&format!("Adding doas rule for {}...", remote.control_exe)),
                    exists = shell_quote(&format!(
                        "doas rule for {} already exists",
                        remote.control_exe
                    )),
                ),
            ));
            steps.push(RemoteStep::notice("Restarting TwinCAT..."));
            steps.push(RemoteStep::new(StepKind::Restart, format!("doas {exe} --run")));
            steps.push(RemoteStep::notice("Restart requested."));
        } else {
            steps.push(RemoteStep::notice("Skipping restart (use --restart)"));
        }

        steps.push(RemoteStep::notice("Mode:"));
        steps.push(RemoteStep::new(StepKind::QueryMode, format!("{exe} --mode")));

        Self { steps }
    }

    pub fn steps(&self) -> &[RemoteStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Single compound command for `ssh`
    pub fn joined(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.command.as_str())
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

/// The doas.conf line that lets `user` run the control executable
/// without a password prompt.
pub fn doas_rule(username: &str, control_exe: &str) -> String {
    format!("permit nopass {} cmd {}", username, control_exe)
}

/// Quote for POSIX sh, always.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote for POSIX sh only when the word needs it.
pub fn shell_word(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-/:@%+=,".contains(c));
    if safe {
        s.to_string()
    } else {
        shell_quote(s)
    }
}
