use tcboot::presentation::USAGE_EXAMPLES;
use tcboot::TcbootError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Exit code for a failed run. Anything outside the domain error type is 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TcbootError>()
        .map(TcbootError::exit_code)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let mut out = String::new();

    match err.downcast_ref::<TcbootError>() {
        Some(tc) => {
            let icon = Icon::Error.colored(ui.color, ui.unicode);
            let message = ColoredText::error(format!("Error: {tc}")).render(ui.color);
            out.push_str(&format!("{icon} {message}\n"));
            if tc.wants_usage() {
                out.push('\n');
                out.push_str(USAGE_EXAMPLES);
                out.push('\n');
            }
        }
        None => {
            let message = ColoredText::error(format!("Unexpected error: {err:#}")).render(ui.color);
            out.push_str(&format!("{message}\n"));
        }
    }

    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "exit_code": exit_code(err),
        }));
        return;
    }

    eprint!("{}", format_error(err, ui));
}
