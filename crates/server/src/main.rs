use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use page::{assets::hero_background_svg, PageOptions, PageRenderer};
use shared::{
    content::SiteContent,
    domain::SectionId,
    error::ApiError,
    settings::{load_settings, Settings},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    renderer: PageRenderer,
    index_html: Arc<str>,
    site_json: Arc<str>,
    hero_background: Arc<str>,
}

impl AppState {
    /// Renders everything once; the page never changes while the server runs.
    fn prerender(settings: &Settings) -> anyhow::Result<Self> {
        let renderer = PageRenderer::new(SiteContent::default(), PageOptions::from(settings));
        Ok(Self {
            index_html: renderer.render_html()?.into(),
            site_json: renderer.site_json()?.into(),
            hero_background: hero_background_svg().into(),
            renderer,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let state = AppState::prerender(&settings)?;
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "dev server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/healthz", get(healthz))
        .route("/site.json", get(site_json))
        .route("/assets/hero-bg.svg", get(hero_background))
        .route("/sections/:section_id", get(section_fragment))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.to_string())
}

async fn site_json(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.site_json.to_string(),
    )
}

async fn hero_background(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        state.hero_background.to_string(),
    )
}

async fn section_fragment(
    State(state): State<Arc<AppState>>,
    Path(section_id): Path<String>,
) -> Result<Html<String>, (StatusCode, Json<ApiError>)> {
    let id = section_id
        .parse::<SectionId>()
        .map_err(|e| (StatusCode::NOT_FOUND, Json(ApiError::from(e))))?;
    let section = state.renderer.render_section(id).map_err(|e| {
        tracing::error!(%id, error = %e, "section render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::from(e)))
    })?;
    tracing::debug!(
        %id,
        targets = section.manifest.targets.len(),
        "rendered section fragment"
    );
    Ok(Html(section.html))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
