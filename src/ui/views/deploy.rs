use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const BANNER: &str = "=== TwinCAT Boot Folder Copy Script ===";

pub fn render_banner(supports_color: bool) -> String {
    format!("\n{}\n\n", ColoredText::info(BANNER).bold().render(supports_color))
}

pub fn render_configuration(
    source: &Path,
    remote_host: &str,
    username: &str,
    restart: bool,
    destination: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Configuration");
    header.add("Source", source.display().to_string());
    header.add("Remote host", remote_host);
    header.add("SSH user", username);
    header.add("Restart flag", if restart { "Yes" } else { "No" });
    header.add("Destination", destination);

    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out
}

pub fn render_stage(number: usize, title: &str, supports_color: bool) -> String {
    format!(
        "{}\n",
        ColoredText::info(format!("{number}) {title}")).render(supports_color)
    )
}

pub fn render_command(line: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(line).render(supports_color)
    )
}

pub fn render_script(steps: &[String], supports_color: bool) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::dim(format!("Remote script ({} steps):", steps.len())).render(supports_color)
    );
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, step));
    }
    out
}

pub fn render_plan_note(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\n{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Dry run: nothing was copied or executed.").render(supports_color)
    )
}

pub fn render_deploy_summary(restarted: bool, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "\n{}\n",
        ColoredText::success("=== Success ===").bold().render(supports_color)
    );
    out.push_str(&format!(
        "{} Boot folder updated (created and configured as needed).\n",
        Icon::Success.colored(supports_color, supports_unicode)
    ));
    if restarted {
        out.push_str(&format!(
            "{} TwinCAT restart requested.\n",
            Icon::Remote.colored(supports_color, supports_unicode)
        ));
    }
    out
}
