//! Explorer settings read from the environment (and `.env` on the server).

use std::sync::OnceLock;

use shared_types::ThemeMode;

use crate::error::ExplorerError;

pub const THEME_VAR: &str = "EXPLORER_THEME";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info,chip_explorer=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Written to `data-theme` on the document root.
    pub theme: ThemeMode,
    pub log_filter: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

static CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();

impl ExplorerConfig {
    pub fn from_env() -> Result<Self, ExplorerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ExplorerError> {
        let mut config = Self::default();
        if let Some(theme) = lookup(THEME_VAR) {
            config.theme = theme
                .parse()
                .map_err(|e| ExplorerError::Config(format!("{THEME_VAR}: {e}")))?;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }

    /// Makes this config the one returned by [`ExplorerConfig::current`].
    /// Only the first call has an effect.
    pub fn install(self) -> &'static ExplorerConfig {
        CONFIG.get_or_init(|| self)
    }

    pub fn current() -> &'static ExplorerConfig {
        CONFIG.get_or_init(ExplorerConfig::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_dark_theme() {
        let config = ExplorerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn reads_theme_and_filter() {
        let config = ExplorerConfig::from_lookup(lookup(&[
            ("EXPLORER_THEME", "light"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = ExplorerConfig::from_lookup(lookup(&[("EXPLORER_THEME", "sepia")])).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
        assert!(err.to_string().contains("EXPLORER_THEME"));
    }
}
