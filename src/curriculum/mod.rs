//! Curriculum Content Module
//!
//! Derives EDP lesson content from a unit number and a section number.
//!
//! ## Pipeline
//! 1. Lookup tables - unit titles, section titles, body paragraphs, images
//! 2. Synthesizer - section count and section titles per unit
//! 3. Resolver - one content record per (unit, section)
//! 4. Generator - full unit document, Markdown rendering
//!
//! Navigation and program overview models sit beside the pipeline and feed
//! the unit and EDP landing pages.

pub mod utils;
pub mod types;
pub mod view_models;
pub mod synthesizer;
pub mod resolver;
pub mod generator;
pub mod route;
pub mod navigation;
pub mod program;

pub use types::{CurriculumError, TOTAL_UNITS, UNKNOWN_UNIT_TITLE, FALLBACK_SECTION_TITLE};
pub use view_models::{ContentRecord, ProgramOverview, UnitDocument, UnitNavigation, UnitSummary};
pub use synthesizer::{section_count, section_title};
pub use resolver::{resolve_content, validate_coordinates};
pub use generator::{build_unit_document, render_markdown, unit_summaries};
pub use route::parse_unit_param;
pub use navigation::{build_navigation, ProgressTone, UnitProgress};
pub use program::program_overview;
