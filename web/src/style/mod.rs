//! Utility-first stylesheet generation.
//!
//! Class tokens used by the components are turned into CSS at startup. The
//! output is layered: reset first, then theme variables, then utilities, so
//! utilities always win over the reset regardless of where the sheet lands.

pub mod icons;
pub mod utility;

use std::collections::HashSet;
use std::sync::LazyLock;

use shared_types::{ChipClasses, ChipVariant, ThemeColors};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown utility `{0}`")]
    UnknownUtility(String),
    #[error("unknown theme color `{0}`")]
    UnknownColor(String),
    #[error("unknown icon `{collection}:{name}`")]
    UnknownIcon { collection: String, name: String },
}

/// Minimal reset so `border` alone draws a solid line and boxes size
/// predictably.
pub const PREFLIGHT: &str = "*,::before,::after{box-sizing:border-box;border-width:0;border-style:solid;border-color:currentColor;}\nbutton{background:transparent;padding:0;font:inherit;color:inherit;cursor:pointer;}\n";

#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    css: String,
    skipped: Vec<StyleError>,
}

impl Stylesheet {
    /// Generates CSS for the given tokens. Duplicates are emitted once, in
    /// first-seen order. Tokens that cannot be resolved are skipped and kept
    /// in [`Stylesheet::skipped`].
    pub fn generate<'a>(tokens: impl IntoIterator<Item = &'a str>, colors: &ThemeColors) -> Self {
        let mut seen = HashSet::new();
        let mut utilities = String::new();
        let mut skipped = Vec::new();

        for token in tokens {
            if !seen.insert(token) {
                continue;
            }
            match utility::rule_for(token, colors) {
                Ok(Some(rule)) => {
                    utilities.push_str(&rule.to_css());
                    utilities.push('\n');
                }
                Ok(None) => {}
                Err(e) => {
                    leptos::logging::warn!("skipping class `{}`: {}", token, e);
                    skipped.push(e);
                }
            }
        }

        let mut css = String::from(PREFLIGHT);
        css.push_str(&colors.variables_css());
        css.push_str(&utilities);

        Self { css, skipped }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn skipped(&self) -> &[StyleError] {
        &self.skipped
    }
}

/// Every class token any component in this crate can render.
pub fn component_tokens() -> Vec<String> {
    let mut tokens: Vec<String> = ChipVariant::all()
        .into_iter()
        .flat_map(|variant| {
            ChipClasses::for_variant(variant)
                .tokens()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    tokens.extend(
        crate::views::EXPLORER_CLASSES
            .iter()
            .flat_map(|classes| classes.split_whitespace())
            .map(str::to_string),
    );
    tokens
}

static APP_STYLESHEET: LazyLock<Stylesheet> = LazyLock::new(|| {
    let tokens = component_tokens();
    Stylesheet::generate(tokens.iter().map(String::as_str), &ThemeColors)
});

/// The stylesheet injected into the document head.
pub fn app_stylesheet() -> &'static Stylesheet {
    &APP_STYLESHEET
}
