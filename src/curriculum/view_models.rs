//! View Models for Curriculum API
//!
//! Structured data types for JSON responses and page templates.

use serde::Serialize;

// ============================================================================
// Unit Content
// ============================================================================

/// Content for one section of a unit.
///
/// Pure output of `resolve_content`; identified only by its (unit, section)
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ContentRecord {
    pub title: String,
    pub body: &'static str,
    pub image_ref: Option<&'static str>,
}

/// Complete unit page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct UnitDocument {
    pub unit: i64,
    pub title: String,   // e.g., "Financial Planning" or "Unknown Unit"
    pub heading: String, // e.g., "Unit 4: Financial Planning"
    pub description: String,
    pub sections: Vec<ContentRecord>,
}

impl UnitDocument {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// One row of the unit index listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSummary {
    pub unit: i64,
    pub title: &'static str,
    pub heading: String,
    pub section_count: usize,
}

// ============================================================================
// Navigation
// ============================================================================

/// Completion band for a progress segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressTone {
    Low,    // Red - under 30%
    Medium, // Yellow - under 70%
    High,   // Green - 70% and above
}

impl ProgressTone {
    pub fn from_percent(percent: u8) -> Self {
        if percent < 30 {
            ProgressTone::Low
        } else if percent < 70 {
            ProgressTone::Medium
        } else {
            ProgressTone::High
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressTone::Low => "bg-red-500",
            ProgressTone::Medium => "bg-yellow-500",
            ProgressTone::High => "bg-green-500",
        }
    }
}

/// A unit tab in the navigation strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub unit: i64,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One slice of the progress bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSegment {
    pub unit: i64,
    pub percent: u8,
    pub tone: ProgressTone,
    pub css_class: &'static str,
    pub width_percent: f64,
    pub opacity: f64,
}

/// Unit tabs plus the progress bar beneath them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitNavigation {
    pub active_unit: i64,
    pub tabs: Vec<NavTab>,
    pub progress: Vec<ProgressSegment>,
}

// ============================================================================
// Program Overview
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub image_url: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartLink {
    pub label: String,
    pub href: String,
}

/// EDP landing page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramOverview {
    pub title: &'static str,
    pub tagline: &'static str,
    pub slides: Vec<Slide>,
    pub outcomes: Vec<&'static str>,
    pub start: StartLink,
}
