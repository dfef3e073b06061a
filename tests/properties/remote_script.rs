//! Property tests for the composed remote script.

use proptest::prelude::*;

use tcboot::config::RemoteConfig;
use tcboot::{shell_quote, RemoteScript, ScriptParams, StepKind};

fn username() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_.-]{0,15}").unwrap()
}

fn folder_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ()'._-]{1,24}").unwrap()
}

fn compose(folder: &str, user: &str, restart: bool) -> RemoteScript {
    let remote = RemoteConfig::default();
    RemoteScript::compose(&ScriptParams {
        folder_name: folder,
        username: user,
        restart,
        remote: &remote,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: step count depends only on the restart flag.
    #[test]
    fn property_step_count_is_fixed(
        folder in folder_name(),
        user in username(),
        restart in any::<bool>(),
    ) {
        let script = compose(&folder, &user, restart);
        prop_assert_eq!(script.len(), if restart { 13 } else { 9 });
        prop_assert_eq!(script.steps().last().map(|s| s.kind), Some(StepKind::QueryMode));
    }

    /// PROPERTY: without restart, nothing touches doas.conf or starts the runtime.
    #[test]
    fn property_no_restart_never_escalates(
        folder in folder_name(),
        user in username(),
    ) {
        let script = compose(&folder, &user, false);
        let joined = script.joined();
        prop_assert!(!joined.contains("doas.conf"));
        prop_assert!(!joined.contains("--run"));
        prop_assert_eq!(script.count(StepKind::EnsureDoasRule), 0);
        prop_assert_eq!(script.count(StepKind::Restart), 0);
    }

    /// PROPERTY: with restart, the doas rule is checked exactly once and guarded.
    #[test]
    fn property_restart_adds_one_guarded_rule(
        folder in folder_name(),
        user in username(),
    ) {
        let script = compose(&folder, &user, true);
        prop_assert_eq!(script.count(StepKind::EnsureDoasRule), 1);
        prop_assert_eq!(script.count(StepKind::Restart), 1);

        let rule = script
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::EnsureDoasRule)
            .unwrap();
        prop_assert!(rule.command.starts_with("if ! grep -qF "));
    }

    /// PROPERTY: shell quoting always yields one single-quoted word.
    #[test]
    fn property_shell_quote_is_single_word(s in "(?s).{0,64}") {
        let quoted = shell_quote(&s);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
        // Embedded quotes are closed, escaped and reopened.
        let inner = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(inner.replace("'\\''", "'"), s);
    }
}
