//! EDP Curriculum
//!
//! Deterministic lesson content for the Entrepreneurship Development Program.
//!
//! Layout:
//! - `curriculum/`: lookup tables, section synthesis, content resolution,
//!   unit documents, navigation and program overview
//! - `api_server`: Axum JSON/HTML server (feature `api`)
//! - `web/`: Askama page handlers (feature `api`)

pub mod curriculum;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use curriculum::{
    build_unit_document, parse_unit_param, resolve_content, section_count, section_title,
    ContentRecord, CurriculumError, UnitDocument,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, ServerConfig};
