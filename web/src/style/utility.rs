use shared_types::{ThemeColors, ThemeMode};

use super::{icons, StyleError};

/// A single generated rule: `selector { body }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub body: String,
}

impl CssRule {
    pub fn to_css(&self) -> String {
        format!("{}{{{}}}", self.selector, self.body)
    }
}

/// Named groups of utilities that expand into one rule.
const SHORTCUTS: &[(&str, &str)] = &[(
    "transition-theme",
    "transition-[background-color,border-color,color] duration-150",
)];

/// Marker classes that other utilities refer to but that emit nothing.
const MARKERS: &[&str] = &["group"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Hover,
    GroupHover,
    Theme(ThemeMode),
}

const VARIANT_PREFIXES: &[(&str, Variant)] = &[
    ("group-hover:", Variant::GroupHover),
    ("hover:", Variant::Hover),
    ("dark:", Variant::Theme(ThemeMode::Dark)),
    ("light:", Variant::Theme(ThemeMode::Light)),
];

fn split_variants(token: &str) -> (Vec<Variant>, &str) {
    let mut variants = Vec::new();
    let mut rest = token;
    'outer: loop {
        for (prefix, variant) in VARIANT_PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                variants.push(*variant);
                rest = stripped;
                continue 'outer;
            }
        }
        return (variants, rest);
    }
}

/// Escapes a class token for use in a selector, e.g. `group-hover:opacity-100`
/// becomes `group-hover\:opacity-100`.
pub fn escape_class(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len() + 4);
    for (i, ch) in token.chars().enumerate() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            if i == 0 && ch.is_ascii_digit() {
                escaped.push_str(&format!("\\3{ch} "));
            } else {
                escaped.push(ch);
            }
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }
    escaped
}

/// Maps one class token to its rule. Marker classes yield `Ok(None)`.
pub fn rule_for(token: &str, colors: &ThemeColors) -> Result<Option<CssRule>, StyleError> {
    if MARKERS.contains(&token) {
        return Ok(None);
    }

    let (variants, utility) = split_variants(token);
    let body = match SHORTCUTS.iter().find(|(name, _)| *name == utility) {
        Some((_, expansion)) => expansion
            .split_whitespace()
            .map(|part| declarations(part, colors))
            .collect::<Result<Vec<_>, _>>()?
            .concat(),
        None => declarations(utility, colors)?,
    };

    let mut selector = format!(".{}", escape_class(token));
    for variant in variants.iter().rev() {
        selector = match variant {
            Variant::Hover => format!("{selector}:hover"),
            Variant::GroupHover => format!(".group:hover {selector}"),
            Variant::Theme(mode) => format!("{} {selector}", mode.selector()),
        };
    }

    Ok(Some(CssRule { selector, body }))
}

/// `2` -> `0.5rem`, `0` -> `0`, on a 0.25rem scale.
fn spacing(value: &str) -> Option<String> {
    if value == "full" {
        return Some("100%".to_string());
    }
    if value == "px" {
        return Some("1px".to_string());
    }
    let steps: f64 = value.parse().ok()?;
    if steps < 0.0 {
        return None;
    }
    if steps == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{}rem", steps / 4.0))
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn font_size(size: &str) -> Option<(&'static str, &'static str)> {
    Some(match size {
        "xs" => ("0.75rem", "1rem"),
        "sm" => ("0.875rem", "1.25rem"),
        "base" => ("1rem", "1.5rem"),
        "lg" => ("1.125rem", "1.75rem"),
        "xl" => ("1.25rem", "1.75rem"),
        _ => return None,
    })
}

const SPACING_PROPERTIES: &[(&str, &[&str])] = &[
    ("p", &["padding"]),
    ("px", &["padding-left", "padding-right"]),
    ("py", &["padding-top", "padding-bottom"]),
    ("pt", &["padding-top"]),
    ("pr", &["padding-right"]),
    ("pb", &["padding-bottom"]),
    ("pl", &["padding-left"]),
    ("m", &["margin"]),
    ("mx", &["margin-left", "margin-right"]),
    ("my", &["margin-top", "margin-bottom"]),
    ("mt", &["margin-top"]),
    ("mr", &["margin-right"]),
    ("mb", &["margin-bottom"]),
    ("ml", &["margin-left"]),
    ("gap", &["gap"]),
    ("w", &["width"]),
    ("h", &["height"]),
    ("top", &["top"]),
    ("right", &["right"]),
    ("bottom", &["bottom"]),
    ("left", &["left"]),
];

const TIMING: &str = "transition-timing-function:cubic-bezier(0.4,0,0.2,1);transition-duration:150ms;";

fn declarations(utility: &str, colors: &ThemeColors) -> Result<String, StyleError> {
    let unknown = || StyleError::UnknownUtility(utility.to_string());

    let fixed = match utility {
        "flex" => Some("display:flex;"),
        "inline-flex" => Some("display:inline-flex;"),
        "block" => Some("display:block;"),
        "hidden" => Some("display:none;"),
        "relative" => Some("position:relative;"),
        "absolute" => Some("position:absolute;"),
        "items-center" => Some("align-items:center;"),
        "justify-center" => Some("justify-content:center;"),
        "border" => Some("border-width:1px;"),
        "rounded" => Some("border-radius:0.25rem;"),
        "rounded-full" => Some("border-radius:9999px;"),
        _ => None,
    };
    if let Some(fixed) = fixed {
        return Ok(fixed.to_string());
    }

    if utility == "transition-opacity" {
        return Ok(format!("transition-property:opacity;{TIMING}"));
    }
    if let Some(properties) = utility.strip_prefix("transition-").and_then(arbitrary) {
        return Ok(format!("transition-property:{properties};{TIMING}"));
    }
    if let Some(ms) = utility.strip_prefix("duration-") {
        let ms: u32 = ms.parse().map_err(|_| unknown())?;
        return Ok(format!("transition-duration:{ms}ms;"));
    }
    if let Some(percent) = utility.strip_prefix("opacity-") {
        let percent: u32 = percent.parse().map_err(|_| unknown())?;
        if percent > 100 {
            return Err(unknown());
        }
        return Ok(format!("opacity:{};", f64::from(percent) / 100.0));
    }

    if let Some((collection, name)) = icons::parse_icon_token(utility) {
        return icons::icon_declarations(collection, name);
    }

    if let Some(rest) = utility.strip_prefix("text-") {
        if let Some((size, line_height)) = font_size(rest) {
            return Ok(format!("font-size:{size};line-height:{line_height};"));
        }
        if let Some(size) = arbitrary(rest) {
            return Ok(format!("font-size:{size};"));
        }
        return color_declaration("color", rest, colors);
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return color_declaration("background-color", rest, colors);
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return color_declaration("border-color", rest, colors);
    }

    let (negative, unsigned) = match utility.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, utility),
    };
    if let Some((key, value)) = unsigned.rsplit_once('-') {
        if let Some((_, properties)) = SPACING_PROPERTIES.iter().find(|(k, _)| *k == key) {
            let mut value = spacing(value).ok_or_else(unknown)?;
            if negative {
                if value == "0" {
                    return Err(unknown());
                }
                value = format!("-{value}");
            }
            return Ok(properties
                .iter()
                .map(|property| format!("{property}:{value};"))
                .collect());
        }
    }

    Err(unknown())
}

fn color_declaration(
    property: &str,
    path: &str,
    colors: &ThemeColors,
) -> Result<String, StyleError> {
    colors
        .lookup(path)
        .map(|value| format!("{property}:{value};"))
        .ok_or_else(|| StyleError::UnknownColor(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(token: &str) -> CssRule {
        rule_for(token, &ThemeColors).unwrap().unwrap()
    }

    #[test]
    fn escapes_selector_characters() {
        assert_eq!(escape_class("px-3"), "px-3");
        assert_eq!(
            escape_class("group-hover:opacity-100"),
            "group-hover\\:opacity-100"
        );
        assert_eq!(escape_class("text-[10px]"), "text-\\[10px\\]");
        assert_eq!(escape_class("-top-2"), "-top-2");
    }

    #[test]
    fn spacing_scale() {
        assert_eq!(rule("px-3").body, "padding-left:0.75rem;padding-right:0.75rem;");
        assert_eq!(rule("h-6").body, "height:1.5rem;");
        assert_eq!(rule("gap-1").body, "gap:0.25rem;");
        assert_eq!(rule("mr-2").body, "margin-right:0.5rem;");
    }

    #[test]
    fn negative_inset() {
        let top = rule("-top-2");
        assert_eq!(top.selector, ".-top-2");
        assert_eq!(top.body, "top:-0.5rem;");
        assert_eq!(rule("-right-2").body, "right:-0.5rem;");
    }

    #[test]
    fn font_sizes() {
        assert_eq!(rule("text-xs").body, "font-size:0.75rem;line-height:1rem;");
        assert_eq!(rule("text-base").body, "font-size:1rem;line-height:1.5rem;");
        let arbitrary = rule("text-[10px]");
        assert_eq!(arbitrary.selector, ".text-\\[10px\\]");
        assert_eq!(arbitrary.body, "font-size:10px;");
    }

    #[test]
    fn theme_colors() {
        assert_eq!(rule("text-white").body, "color:#FFFFFF;");
        assert_eq!(
            rule("bg-fiddle-elements-background-depth-2").body,
            "background-color:var(--fiddle-elements-bg-depth-2);"
        );
        assert_eq!(
            rule("border-fiddle-elements-borderColor").body,
            "border-color:var(--fiddle-elements-borderColor);"
        );
        assert_eq!(rule("border").body, "border-width:1px;");
    }

    #[test]
    fn group_hover_targets_descendants_of_group() {
        let hover = rule("group-hover:opacity-100");
        assert_eq!(hover.selector, ".group:hover .group-hover\\:opacity-100");
        assert_eq!(hover.body, "opacity:1;");
        assert_eq!(rule("opacity-0").body, "opacity:0;");
        assert_eq!(rule_for("group", &ThemeColors), Ok(None));
    }

    #[test]
    fn stacked_variants() {
        let rule = rule("dark:hover:bg-gray-800");
        assert_eq!(
            rule.selector,
            "[data-theme=\"dark\"] .dark\\:hover\\:bg-gray-800:hover"
        );
    }

    #[test]
    fn shortcut_expands_into_one_rule() {
        let rule = rule("transition-theme");
        assert!(rule
            .body
            .starts_with("transition-property:background-color,border-color,color;"));
        assert!(rule.body.ends_with("transition-duration:150ms;"));
    }

    #[test]
    fn unknown_tokens_are_errors() {
        assert_eq!(
            rule_for("text-rainbow", &ThemeColors),
            Err(StyleError::UnknownColor("rainbow".into()))
        );
        assert_eq!(
            rule_for("px-x", &ThemeColors),
            Err(StyleError::UnknownUtility("px-x".into()))
        );
        assert_eq!(
            rule_for("grid-cols-3", &ThemeColors),
            Err(StyleError::UnknownUtility("grid-cols-3".into()))
        );
        assert!(rule_for("opacity-150", &ThemeColors).is_err());
    }
}
