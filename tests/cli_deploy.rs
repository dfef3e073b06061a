//! End-to-end runs of the binary against fake `ssh`/`scp` scripts.
#![cfg(unix)]

mod common;

use common::TestEnv;

fn boot_args(boot: &std::path::Path) -> Vec<String> {
    vec![
        "--source-path".to_string(),
        boot.display().to_string(),
        "--remote-host".to_string(),
        "10.0.0.5".to_string(),
    ]
}

fn run(env: &TestEnv, args: &[String], extra: &[&str]) -> common::TestResult {
    let mut all: Vec<&str> = args.iter().map(String::as_str).collect();
    all.extend_from_slice(extra);
    env.run(&all)
}

#[test]
fn deploy_copies_then_runs_remote_script() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");
    let canonical = std::fs::canonicalize(&boot).unwrap();

    let result = run(&env, &boot_args(&boot), &[]);

    assert!(result.is_success(), "{}", result.combined_output());
    let calls = env.calls();
    assert_eq!(calls.len(), 4, "calls: {calls:?}");
    assert_eq!(calls[0], "ssh -V");
    assert_eq!(calls[1], "scp -h");
    assert_eq!(
        calls[2],
        format!("scp -r {} Administrator@10.0.0.5:~/", canonical.display())
    );
    assert!(calls[3].starts_with("ssh -t Administrator@10.0.0.5 echo 'Deploying Boot to "));
    assert!(calls[3].contains("TcSysExe.exe --mode"));
    assert!(!calls[3].contains("--run"));
    assert!(!calls[3].contains("doas.conf"));

    assert!(result.stdout.contains("=== TwinCAT Boot Folder Copy Script ==="));
    assert!(result.stdout.contains("Restart flag: No"));
    assert!(result.stdout.contains("1) Uploading to remote temp..."));
    assert!(result.stdout.contains("2) Setting up Boot directory and copying files..."));
    assert!(result.stdout.contains("=== Success ==="));
    assert!(result
        .stdout
        .contains("Boot folder updated (created and configured as needed)."));
}

#[test]
fn restart_adds_doas_rule_and_restart() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let result = run(&env, &boot_args(&boot), &["--restart", "--username", "myuser"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let calls = env.calls();
    let session = &calls[3];
    assert!(session.starts_with("ssh -t myuser@10.0.0.5 "));
    assert!(session.contains("permit nopass myuser cmd TcSysExe.exe"));
    assert!(session.contains("doas TcSysExe.exe --run"));
    assert!(result.stdout.contains("Restart flag: Yes"));
    assert!(result.stdout.contains("TwinCAT restart requested."));
}

#[test]
fn missing_source_shows_usage_and_never_copies() {
    let env = TestEnv::new();
    let missing = env.project_path("NoSuchBoot");

    let result = run(&env, &boot_args(&missing), &[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("not found"), "{}", result.stderr);
    assert!(result.stderr.contains("Examples:"));
    assert!(env.calls().iter().all(|c| !c.starts_with("scp -r")));
}

#[test]
fn missing_ssh_client_is_reported() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");
    let missing = env.project_path("no-ssh-here");

    let args = boot_args(&boot);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = env.run_with_env(&argv, &[("TCBOOT_SSH", missing.to_str().unwrap())]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("SSH client not found. Install OpenSSH."));
    assert!(env.calls().iter().all(|c| !c.starts_with("scp -r")));
}

#[test]
fn failed_copy_skips_remote_session() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let args = boot_args(&boot);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = env.run_with_env(&argv, &[("FAKE_SCP_EXIT", "1")]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("SCP failed (1)"), "{}", result.stderr);
    assert!(env.calls().iter().all(|c| !c.starts_with("ssh -t")));
}

#[test]
fn failed_remote_step_exits_one() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let args = boot_args(&boot);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = env.run_with_env(&argv, &[("FAKE_SSH_EXIT", "3")]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Remote step failed (exit 3)"));
    assert!(!result.stdout.contains("=== Success ==="));
}

#[test]
fn dry_run_prints_commands_without_transfer() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let result = run(&env, &boot_args(&boot), &["--dry-run", "-v"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.calls(), vec!["ssh -V", "scp -h"]);
    assert!(result.stdout.contains("Remote script (9 steps):"));
    assert!(result.stdout.contains("Dry run: nothing was copied or executed."));
    assert!(!result.stdout.contains("=== Success ==="));
}

#[test]
fn json_output_is_ndjson() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let result = run(&env, &boot_args(&boot), &["--json", "--restart"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad line {l:?}: {e}")))
        .collect();

    let names: Vec<&str> = events.iter().filter_map(|e| e["event"].as_str()).collect();
    assert_eq!(names.first(), Some(&"stage"));
    assert!(names.contains(&"start"));
    assert!(names.contains(&"script"));
    assert_eq!(names.last(), Some(&"complete"));

    let script = events.iter().find(|e| e["event"] == "script").unwrap();
    assert_eq!(script["step_count"], 13);
    assert!(!result.stdout.contains("=== TwinCAT"));
}

#[test]
fn json_error_is_an_event() {
    let env = TestEnv::new();
    let missing = env.project_path("NoSuchBoot");

    let result = run(&env, &boot_args(&missing), &["--json"]);

    assert_eq!(result.exit_code, 1);
    let last: serde_json::Value =
        serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["exit_code"], 1);
}

#[test]
fn project_config_and_env_username() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");
    env.write_project_file(
        "tcboot.toml",
        "[remote]\nusername = \"plc\"\ndestination = \"/usr/local/etc/TwinCAT/3.1/Boot.staging\"\n",
    );

    let result = run(&env, &boot_args(&boot), &[]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.calls()[3].starts_with("ssh -t plc@10.0.0.5 "));
    assert!(env.calls()[3].contains("/usr/local/etc/TwinCAT/3.1/Boot.staging"));

    let args = boot_args(&boot);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = env.run_with_env(&argv, &[("TCBOOT_USERNAME", "envuser")]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.calls()[7].starts_with("ssh -t envuser@10.0.0.5 "));
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");

    let result = run(&env, &boot_args(&boot), &["--config", "missing.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing.toml"), "{}", result.stderr);
    assert!(env.calls().is_empty());
}

#[test]
fn unknown_config_key_warns_but_deploys() {
    let env = TestEnv::new();
    let boot = env.create_boot_folder("Boot");
    env.write_project_file("tcboot.toml", "[remote]\nusernme = \"plc\"\n");

    let result = run(&env, &boot_args(&boot), &[]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key"));
    assert!(result.stderr.contains("Did you mean 'username'?"));
}
