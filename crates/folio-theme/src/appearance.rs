use crate::resolver::SystemAppearance;

/// Reads the terminal's color scheme from `COLORFGBG`
///
/// Terminals such as rxvt, Konsole and iTerm export `fg;bg` (or
/// `fg;default;bg`) as ANSI color indices.
#[derive(Debug, Clone, Default)]
pub struct TerminalAppearance {
    colorfgbg: Option<String>,
}

impl TerminalAppearance {
    pub fn from_env() -> Self {
        Self {
            colorfgbg: std::env::var("COLORFGBG").ok(),
        }
    }

    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        Self {
            colorfgbg: value.map(str::to_string),
        }
    }
}

impl SystemAppearance for TerminalAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        let value = self.colorfgbg.as_deref()?;
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        // 7 is white, 9..=15 are the bright colors
        let light = background == 7 || (9..=15).contains(&background);
        Some(!light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefers_dark_for(value: Option<&str>) -> Option<bool> {
        TerminalAppearance::from_colorfgbg(value).prefers_dark()
    }

    #[test]
    fn test_dark_background() {
        assert_eq!(prefers_dark_for(Some("15;0")), Some(true));
        assert_eq!(prefers_dark_for(Some("7;default;0")), Some(true));
        assert_eq!(prefers_dark_for(Some("15;8")), Some(true));
    }

    #[test]
    fn test_light_background() {
        assert_eq!(prefers_dark_for(Some("0;15")), Some(false));
        assert_eq!(prefers_dark_for(Some("0;default;7")), Some(false));
        assert_eq!(prefers_dark_for(Some("0;11")), Some(false));
    }

    #[test]
    fn test_unavailable() {
        assert_eq!(prefers_dark_for(None), None);
        assert_eq!(prefers_dark_for(Some("")), None);
        assert_eq!(prefers_dark_for(Some("0;default")), None);
        assert_eq!(prefers_dark_for(Some("garbage")), None);
    }
}
