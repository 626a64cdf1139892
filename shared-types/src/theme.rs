use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Palette colors, keyed by their hyphen-joined path.
pub const BASE_COLORS: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("gray-50", "#FAFAFA"),
    ("gray-100", "#F5F5F5"),
    ("gray-200", "#E5E5E5"),
    ("gray-300", "#D4D4D4"),
    ("gray-400", "#A3A3A3"),
    ("gray-500", "#737373"),
    ("gray-600", "#525252"),
    ("gray-700", "#404040"),
    ("gray-800", "#262626"),
    ("gray-900", "#171717"),
    ("gray-950", "#1b1b1b"),
    ("accent-500", "#FF6101"),
];

/// Semantic element colors. Each one is backed by a CSS variable whose value
/// depends on the active theme mode.
pub const ELEMENT_COLORS: &[(&str, &str)] = &[
    ("fiddle-elements-borderColor", "--fiddle-elements-borderColor"),
    ("fiddle-elements-background-depth-1", "--fiddle-elements-bg-depth-1"),
    ("fiddle-elements-background-depth-2", "--fiddle-elements-bg-depth-2"),
    ("fiddle-elements-textPrimary", "--fiddle-elements-textPrimary"),
    ("fiddle-elements-code-background", "--fiddle-elements-code-background"),
];

// (variable, light, dark)
const ELEMENT_VALUES: &[(&str, &str, &str)] = &[
    ("--fiddle-elements-borderColor", "gray-200", "gray-800"),
    ("--fiddle-elements-bg-depth-1", "white", "gray-950"),
    ("--fiddle-elements-bg-depth-2", "gray-50", "gray-900"),
    ("--fiddle-elements-textPrimary", "gray-950", "white"),
    ("--fiddle-elements-code-background", "gray-800", "gray-700"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Selector that scopes rules to this mode, e.g. `[data-theme="dark"]`.
    pub fn selector(self) -> String {
        format!("[data-theme=\"{}\"]", self.as_str())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Color lookup used by the utility classes (`bg-*`, `text-*`, `border-*`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeColors;

impl ThemeColors {
    /// Resolves a color path such as `gray-500` or
    /// `fiddle-elements-background-depth-2` to a CSS value.
    pub fn lookup(&self, path: &str) -> Option<String> {
        if let Some((_, hex)) = BASE_COLORS.iter().find(|(name, _)| *name == path) {
            return Some((*hex).to_string());
        }
        ELEMENT_COLORS
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, var)| format!("var({var})"))
    }

    fn palette(&self, name: &str) -> &'static str {
        BASE_COLORS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, hex)| *hex)
            .unwrap_or("inherit")
    }

    /// CSS variable blocks for both theme modes.
    pub fn variables_css(&self) -> String {
        let mut css = String::new();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let scope = match mode {
                ThemeMode::Light => format!(":root, {}", mode.selector()),
                ThemeMode::Dark => mode.selector(),
            };
            css.push_str(&scope);
            css.push_str(" {\n");
            for (var, light, dark) in ELEMENT_VALUES {
                let value = match mode {
                    ThemeMode::Light => self.palette(light),
                    ThemeMode::Dark => self.palette(dark),
                };
                css.push_str(&format!("  {var}: {value};\n"));
            }
            css.push_str("}\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup() {
        let colors = ThemeColors;
        assert_eq!(colors.lookup("white").as_deref(), Some("#FFFFFF"));
        assert_eq!(colors.lookup("gray-950").as_deref(), Some("#1b1b1b"));
        assert_eq!(colors.lookup("accent-500").as_deref(), Some("#FF6101"));
        assert_eq!(colors.lookup("gray-1000"), None);
    }

    #[test]
    fn element_colors_resolve_to_variables() {
        let colors = ThemeColors;
        assert_eq!(
            colors.lookup("fiddle-elements-background-depth-2").as_deref(),
            Some("var(--fiddle-elements-bg-depth-2)")
        );
        assert_eq!(
            colors.lookup("fiddle-elements-borderColor").as_deref(),
            Some("var(--fiddle-elements-borderColor)")
        );
    }

    #[test]
    fn every_element_variable_has_a_value_in_both_modes() {
        let css = ThemeColors.variables_css();
        for (_, var) in ELEMENT_COLORS {
            assert_eq!(css.matches(&format!("{var}:")).count(), 2, "{var}");
        }
        assert!(css.contains("[data-theme=\"dark\"] {"));
        assert!(!css.contains("inherit"));
    }

    #[test]
    fn theme_mode_parsing() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }
}
