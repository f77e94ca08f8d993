//! Unit Navigation
//!
//! Builds the unit tab strip and progress bar shown above unit content and
//! on the EDP landing page.

use crate::curriculum::types::TOTAL_UNITS;
use crate::curriculum::view_models::{NavTab, ProgressSegment, UnitNavigation};

pub use crate::curriculum::view_models::ProgressTone;

/// Sample completion percentages used until real learner progress exists.
const SAMPLE_PROGRESS: [u8; TOTAL_UNITS as usize] = [100, 85, 70, 50, 30, 10, 0, 0];

/// Per-unit completion percentages, unit 1 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitProgress {
    percents: Vec<u8>,
}

impl UnitProgress {
    /// Values above 100 are clamped.
    pub fn new(percents: impl IntoIterator<Item = u8>) -> Self {
        Self {
            percents: percents.into_iter().map(|p| p.min(100)).collect(),
        }
    }

    pub fn percents(&self) -> &[u8] {
        &self.percents
    }
}

impl Default for UnitProgress {
    fn default() -> Self {
        Self::new(SAMPLE_PROGRESS)
    }
}

/// Build the navigation model with `active_unit` highlighted.
///
/// An active unit outside 1..=8 simply leaves every tab inactive.
pub fn build_navigation(active_unit: i64, progress: &UnitProgress) -> UnitNavigation {
    let tabs = (1..=TOTAL_UNITS)
        .map(|unit| NavTab {
            unit,
            label: format!("Home Unit {}", unit),
            href: format!("/unit/{}", unit),
            active: unit == active_unit,
        })
        .collect();

    let width_percent = 100.0 / TOTAL_UNITS as f64;
    let progress = progress
        .percents()
        .iter()
        .zip(1..)
        .map(|(&percent, unit)| {
            let tone = ProgressTone::from_percent(percent);
            ProgressSegment {
                unit,
                percent,
                tone,
                css_class: tone.css_class(),
                width_percent,
                opacity: f64::from(percent) / 100.0,
            }
        })
        .collect();

    UnitNavigation {
        active_unit,
        tabs,
        progress,
    }
}
