//! Content Resolver
//!
//! Maps a (unit, section) pair to its content record. Body and image use two
//! independent wraparound indexes:
//! - body:  (unit - 1) mod bodies   (shared by every section of a unit)
//! - image: (unit + section) mod images

use crate::curriculum::synthesizer::section_title;
use crate::curriculum::types::CurriculumError;
use crate::curriculum::utils::lookup_tables::{body_at, image_at, SECTION_IMAGES, UNIT_BODIES};
use crate::curriculum::view_models::ContentRecord;

/// Body table position for a unit.
pub fn body_index(unit: i64) -> usize {
    let len = UNIT_BODIES.len() as i64;
    // (unit - 1) mod len without overflowing at i64::MIN
    (unit.rem_euclid(len) - 1).rem_euclid(len) as usize
}

/// Image table position for a (unit, section) pair.
pub fn image_index(unit: i64, section: i64) -> usize {
    let len = SECTION_IMAGES.len() as i64;
    ((unit.rem_euclid(len) + section.rem_euclid(len)) % len) as usize
}

/// Resolve the content record for one section of a unit.
///
/// Deterministic and total: every integer pair produces a well-formed record.
///
/// # Examples
/// ```
/// use edp_curriculum::resolve_content;
///
/// let record = resolve_content(1, 1);
/// assert_eq!(record.title, "Section 1: Entrepreneurial Mindset");
/// assert!(record.body.starts_with("Entrepreneurship is about identifying opportunities"));
/// assert!(record.image_ref.is_some());
/// ```
pub fn resolve_content(unit: i64, section: i64) -> ContentRecord {
    ContentRecord {
        title: format!("Section {}: {}", section, section_title(unit, section)),
        body: body_at(body_index(unit)),
        image_ref: Some(image_at(image_index(unit, section))),
    }
}

/// Strict coordinate check for callers that want to reject non-positive input.
///
/// `resolve_content` never calls this; it stays total.
pub fn validate_coordinates(unit: i64, section: i64) -> Result<(), CurriculumError> {
    if unit < 1 {
        return Err(CurriculumError::InvalidUnit(unit));
    }
    if section < 1 {
        return Err(CurriculumError::InvalidSection(section));
    }
    Ok(())
}
