use crate::article::Article;
use crate::config::Config;
use crate::edition::Newsroom;
use crate::i18n::Language;
use crate::render::{render_page, PageView};
use crate::security;
use crate::theme::Theme;
use anyhow::Result;
use axum::{
    extract::{Form, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Display settings as they arrive in a query string or form
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DisplayParams {
    pub lang: Option<String>,
    pub theme: Option<String>,
}

impl DisplayParams {
    /// Resolve to concrete settings; unknown or absent values use the defaults
    pub fn resolve(&self, config: &Config) -> (Language, Theme) {
        let language = self
            .lang
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
            .unwrap_or(config.default_language);
        let theme = self
            .theme
            .as_deref()
            .and_then(|code| Theme::from_code(code).ok())
            .unwrap_or(config.default_theme);
        (language, theme)
    }

    /// Fields present here win over `other`
    fn or(self, other: DisplayParams) -> DisplayParams {
        DisplayParams {
            lang: self.lang.or(other.lang),
            theme: self.theme.or(other.theme),
        }
    }
}

/// Build the application router
pub fn router(newsroom: Newsroom) -> Router {
    Router::new()
        .route("/", get(front_page))
        .route("/refresh", post(refresh))
        .route("/api/edition", get(edition_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(newsroom)
}

/// Bind `0.0.0.0:{port}` and serve until shutdown
pub async fn serve(newsroom: Newsroom, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("✓ Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(newsroom)).await?;
    Ok(())
}

async fn front_page(
    State(newsroom): State<Newsroom>,
    Query(params): Query<DisplayParams>,
) -> Html<String> {
    let (language, theme) = params.resolve(newsroom.config());
    let state = newsroom.snapshot().await;

    Html(render_page(&PageView {
        theme,
        language,
        date: state.date,
        batch: state.batch.as_deref().map(Vec::as_slice),
        loading: state.loading,
        refresh_enabled: newsroom.config().api_key.is_none(),
    }))
}

async fn refresh(
    State(newsroom): State<Newsroom>,
    headers: HeaderMap,
    Query(query): Query<DisplayParams>,
    form: Option<Form<DisplayParams>>,
) -> Response {
    let presented = headers.get("x-api-key").and_then(|v| v.to_str().ok());
    if !security::is_authorized(newsroom.config().api_key.as_deref(), presented) {
        warn!("Rejected refresh request with missing or invalid API key");
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let params = form.map(|Form(f)| f).unwrap_or_default().or(query);
    let (language, theme) = params.resolve(newsroom.config());

    info!("Refresh requested");
    let background = newsroom.clone();
    tokio::spawn(async move { background.refresh().await });

    Redirect::to(&format!("/?lang={}&theme={}", language.code(), theme.code())).into_response()
}

async fn edition_json(State(newsroom): State<Newsroom>) -> Json<serde_json::Value> {
    let state = newsroom.snapshot().await;
    let articles: &[Article] = state.batch.as_deref().map(Vec::as_slice).unwrap_or(&[]);

    Json(json!({
        "date": state.date.to_string(),
        "loading": state.loading,
        "lastUpdated": state.last_updated.map(|t| t.to_rfc3339()),
        "articles": articles,
    }))
}

async fn health() -> &'static str {
    "OK"
}
