//! Section Synthesizer
//!
//! Decides how many sections a unit has and what each one is called.
//! Both functions are total: any integer unit or section yields a value.

use crate::curriculum::types::FALLBACK_SECTION_TITLE;
use crate::curriculum::utils::lookup_tables::section_titles;

/// Number of sections in a unit: `3 + (unit mod 3)`, always 3, 4 or 5.
///
/// Uses Euclidean remainder so negative units stay in range.
///
/// # Examples
/// ```
/// use edp_curriculum::section_count;
///
/// assert_eq!(section_count(1), 4);
/// assert_eq!(section_count(3), 3);
/// assert_eq!(section_count(8), 5);
/// ```
pub fn section_count(unit: i64) -> usize {
    3 + unit.rem_euclid(3) as usize
}

/// Title of a section within a unit.
///
/// Falls back to "Topic" when the unit is not a curriculum unit or the
/// section is past the end of that unit's title table.
pub fn section_title(unit: i64, section: i64) -> &'static str {
    let title = section_titles(unit).and_then(|titles| {
        usize::try_from(section)
            .ok()
            .and_then(|s| s.checked_sub(1))
            .and_then(|idx| titles.get(idx).copied())
    });

    match title {
        Some(title) => title,
        None => {
            tracing::debug!(unit, section, "no section title, using fallback");
            FALLBACK_SECTION_TITLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_count_formula() {
        for unit in 1..=8 {
            let count = section_count(unit);
            assert_eq!(count, 3 + (unit % 3) as usize);
            assert!((3..=5).contains(&count), "unit {} gave {}", unit, count);
        }
    }

    #[test]
    fn test_section_count_is_total() {
        for unit in [-7, -1, 0, 9, 100, i64::MIN, i64::MAX] {
            let count = section_count(unit);
            assert!((3..=5).contains(&count), "unit {} gave {}", unit, count);
        }
        assert_eq!(section_count(0), 3);
        assert_eq!(section_count(-1), 5);
    }

    #[test]
    fn test_section_title_lookup() {
        assert_eq!(section_title(1, 1), "Entrepreneurial Mindset");
        assert_eq!(section_title(6, 4), "Pitch Deck Creation");
        assert_eq!(section_title(8, 5), "Sustainable Growth");
    }

    #[test]
    fn test_section_title_fallbacks() {
        assert_eq!(section_title(4, 6), "Topic");
        assert_eq!(section_title(4, 0), "Topic");
        assert_eq!(section_title(4, -1), "Topic");
        assert_eq!(section_title(9, 1), "Topic");
        assert_eq!(section_title(0, 1), "Topic");
    }
}
