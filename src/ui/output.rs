use tcboot::config::{ConfigWarning, LoadedConfig};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(warnings: &[ConfigWarning], unicode: bool) -> String {
    let icon = Icon::Warning.render(unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}:{}\n",
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}\n",
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Surface everything the config loader had to say. Goes to stderr so
/// NDJSON on stdout stays clean.
pub fn print_config_diagnostics(loaded: &LoadedConfig, ui: &UiContext) {
    eprint!("{}", render_config_warnings(&loaded.warnings, ui.unicode));

    if let Some(err) = &loaded.ignored {
        eprintln!(
            "{} {}; using defaults",
            Icon::Warning.render(ui.unicode),
            err
        );
    }
}
