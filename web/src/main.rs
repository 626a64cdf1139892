#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), chip_explorer::error::ExplorerError> {
    use axum::{routing::get, Router};
    use chip_explorer::app::*;
    use chip_explorer::config::ExplorerConfig;
    use chip_explorer::error::ExplorerError;
    use chip_explorer::server::{stylesheet, STYLESHEET_PATH};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Load .env from the workspace root first (cargo leptos watch runs from web/)
    dotenvy::from_filename("../.env")
        .or_else(|_| dotenvy::dotenv())
        .ok();

    let config = ExplorerConfig::from_env()?.install();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sheet = chip_explorer::style::app_stylesheet();
    tracing::info!(
        theme = %config.theme,
        bytes = sheet.css().len(),
        skipped = sheet.skipped().len(),
        "stylesheet generated"
    );

    let conf = get_configuration(None).map_err(|e| ExplorerError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(STYLESHEET_PATH, get(stylesheet))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This function is required for the binary target but not used in WASM builds
}
