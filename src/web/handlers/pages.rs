// Page handlers for HTML rendering with Askama

use axum::extract::{Path, Query, State};
use axum::response::Html;
use askama::Template;

use crate::api_server::{ActiveUnitQuery, AppError, AppState};
use crate::curriculum::{
    build_navigation, build_unit_document, parse_unit_param, program_overview, ProgramOverview,
    UnitDocument, UnitNavigation,
};

// ============================================================================
// Unit Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/unit.html")]
pub struct UnitTemplate {
    pub doc: UnitDocument,
    pub navigation: UnitNavigation,
    pub analyzer_url: String,
}

pub async fn unit_page(
    State(state): State<AppState>,
    Path(unit): Path<String>,
) -> Result<Html<String>, AppError> {
    let unit = parse_unit_param(Some(&unit));
    let template = UnitTemplate {
        doc: build_unit_document(unit),
        navigation: build_navigation(unit, &state.progress),
        analyzer_url: state.config.analyzer_url.clone(),
    };
    render(&template)
}

// ============================================================================
// EDP Program Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/program.html")]
pub struct ProgramTemplate {
    pub overview: ProgramOverview,
    pub navigation: UnitNavigation,
}

pub async fn program_page(
    State(state): State<AppState>,
    Query(params): Query<ActiveUnitQuery>,
) -> Result<Html<String>, AppError> {
    let active = parse_unit_param(params.active.as_deref());
    let template = ProgramTemplate {
        overview: program_overview(active),
        navigation: build_navigation(active, &state.progress),
    };
    render(&template)
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}
