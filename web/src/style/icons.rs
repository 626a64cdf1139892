use super::StyleError;

struct Glyph {
    name: &'static str,
    view_box: &'static str,
    path: &'static str,
}

struct Collection {
    prefix: &'static str,
    glyphs: &'static [Glyph],
}

// Phosphor subset, only the glyphs the chip renders.
const PH: Collection = Collection {
    prefix: "ph",
    glyphs: &[
        Glyph {
            name: "github-logo-fill",
            view_box: "0 0 16 16",
            path: "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0 0 16 8c0-4.42-3.58-8-8-8Z",
        },
        Glyph {
            name: "x",
            view_box: "0 0 256 256",
            path: "M205.66 194.34a8 8 0 0 1-11.32 11.32L128 139.31l-66.34 66.35a8 8 0 0 1-11.32-11.32L116.69 128 50.34 61.66a8 8 0 0 1 11.32-11.32L128 116.69l66.34-66.35a8 8 0 0 1 11.32 11.32L139.31 128Z",
        },
    ],
};

const COLLECTIONS: &[Collection] = &[PH];

/// Splits `i-ph:x` into `("ph", "x")`.
pub fn parse_icon_token(token: &str) -> Option<(&str, &str)> {
    token.strip_prefix("i-")?.split_once(':')
}

pub fn svg_source(collection: &str, name: &str) -> Result<String, StyleError> {
    let glyph = COLLECTIONS
        .iter()
        .find(|c| c.prefix == collection)
        .and_then(|c| c.glyphs.iter().find(|g| g.name == name))
        .ok_or_else(|| StyleError::UnknownIcon {
            collection: collection.to_string(),
            name: name.to_string(),
        })?;

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="1.2em" height="1.2em"><path fill="currentColor" d="{}"/></svg>"#,
        glyph.view_box, glyph.path
    ))
}

/// Declarations that paint the glyph as a mask filled with `currentColor`,
/// so icons pick up the surrounding text color and size.
pub fn icon_declarations(collection: &str, name: &str) -> Result<String, StyleError> {
    let svg = svg_source(collection, name)?;
    let uri = format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg));

    Ok(format!(
        "--un-icon:url(\"{uri}\");-webkit-mask:var(--un-icon) no-repeat;mask:var(--un-icon) no-repeat;-webkit-mask-size:100% 100%;mask-size:100% 100%;background-color:currentColor;color:inherit;display:inline-block;vertical-align:middle;width:1.2em;height:1.2em;"
    ))
}
