// Axum API Server Module
//
// Purpose: serve curriculum unit documents as JSON, Markdown and HTML pages.
// All content is computed per request from static tables; no cache, no store.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use crate::curriculum::{
    build_navigation, build_unit_document, parse_unit_param, program_overview, render_markdown,
    resolve_content, unit_summaries, validate_coordinates, CurriculumError, UnitProgress,
};
use crate::web::handlers::pages;

// ============================================================================
// Configuration
// ============================================================================

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ANALYZER_URL: &str = "http://127.0.0.1:8000";

/// Server settings read from the environment.
///
/// - `BIND_ADDR`: listen address (default 0.0.0.0)
/// - `PORT`: listen port (default 3000)
/// - `ANALYZER_URL`: Student Analyzer link shown on unit pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub analyzer_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            analyzer_url: DEFAULT_ANALYZER_URL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("BIND_ADDR") {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => tracing::warn!("Ignoring invalid BIND_ADDR {:?}", raw),
            }
        }

        if let Some(raw) = lookup("PORT") {
            match raw.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT {:?}", raw),
            }
        }

        if let Some(url) = lookup("ANALYZER_URL").filter(|u| !u.trim().is_empty()) {
            config.analyzer_url = url;
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub progress: Arc<UnitProgress>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_progress(config, UnitProgress::default())
    }

    pub fn with_progress(config: ServerConfig, progress: UnitProgress) -> Self {
        Self {
            config: Arc::new(config),
            progress: Arc::new(progress),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Unit endpoints (JSON + Markdown)
        .route("/api/units", get(list_units))
        .route("/api/units/:unit", get(get_unit))
        .route("/api/units/:unit/markdown", get(get_unit_markdown))
        .route("/api/units/:unit/sections/:section", get(get_section))

        // Page models (JSON)
        .route("/api/navigation", get(get_navigation))
        .route("/api/program", get(get_program))

        // HTML pages
        .route("/edp", get(pages::program_page))
        .route("/unit/:unit", get(pages::unit_page))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_units() -> impl IntoResponse {
    Json(unit_summaries())
}

async fn get_unit(Path(unit): Path<String>) -> impl IntoResponse {
    let unit = parse_unit_param(Some(&unit));
    tracing::debug!("Building unit document {}", unit);
    Json(build_unit_document(unit))
}

async fn get_unit_markdown(Path(unit): Path<String>) -> impl IntoResponse {
    let doc = build_unit_document(parse_unit_param(Some(&unit)));
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_markdown(&doc),
    )
}

async fn get_section(
    Path((unit, section)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let unit = parse_unit_param(Some(&unit));
    let section: i64 = section
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("section must be an integer, got {:?}", section)))?;

    validate_coordinates(unit, section)?;
    Ok(Json(resolve_content(unit, section)))
}

async fn get_navigation(
    State(state): State<AppState>,
    Query(params): Query<ActiveUnitQuery>,
) -> impl IntoResponse {
    let active = parse_unit_param(params.active.as_deref());
    Json(build_navigation(active, &state.progress))
}

async fn get_program(Query(params): Query<ActiveUnitQuery>) -> impl IntoResponse {
    Json(program_overview(parse_unit_param(params.active.as_deref())))
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug, Default)]
pub(crate) struct ActiveUnitQuery {
    pub(crate) active: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub(crate) enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<CurriculumError> for AppError {
    fn from(err: CurriculumError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
