pub const STYLESHEET_PATH: &str = "/explorer.css";

/// Serves the generated utility stylesheet.
#[cfg(feature = "ssr")]
pub async fn stylesheet() -> impl axum::response::IntoResponse {
    use http::header;

    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        crate::style::app_stylesheet().css().to_string(),
    )
}
