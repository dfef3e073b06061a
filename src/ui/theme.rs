use crossterm::style::Color;

/// Design tokens for the tcboot terminal UI.
///
/// All icons and colors must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "📦";
    pub const REMOTE: &str = "📡";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const REMOTE: &str = "[REMOTE]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_icons_are_ascii() {
        for icon in [
            icons_ascii::SUCCESS,
            icons_ascii::ERROR,
            icons_ascii::WARNING,
            icons_ascii::ARROW,
            icons_ascii::DEPLOY,
            icons_ascii::REMOTE,
        ] {
            assert!(icon.is_ascii(), "{icon} is not ascii");
        }
    }
}
