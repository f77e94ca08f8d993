//! Shared constants and error types for curriculum generation.

use thiserror::Error;

/// Number of curriculum units in the program.
pub const TOTAL_UNITS: i64 = 8;

/// Title used for any unit outside 1..=TOTAL_UNITS.
pub const UNKNOWN_UNIT_TITLE: &str = "Unknown Unit";

/// Section title used when a unit's title table has no entry.
pub const FALLBACK_SECTION_TITLE: &str = "Topic";

/// Unit used when a route parameter cannot be read as a number.
pub const DEFAULT_UNIT: i64 = 1;

/// Domain validation failures.
///
/// Content generation itself never fails; these are only raised by callers
/// that opt into strict coordinate checks (see `validate_coordinates`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurriculumError {
    #[error("unit must be a positive integer, got {0}")]
    InvalidUnit(i64),

    #[error("section must be a positive integer, got {0}")]
    InvalidSection(i64),
}
