//! EDP Program Overview
//!
//! Landing page content for the Entrepreneurship Development Program: hero
//! slides, learning outcomes and the link into the selected unit.

use crate::curriculum::view_models::{ProgramOverview, Slide, StartLink};

const PROGRAM_TITLE: &str = "Entrepreneurship Development Program";
const PROGRAM_TAGLINE: &str =
    "Explore the fundamentals of entrepreneurship through interactive lessons";

static SLIDES: &[(&str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        "Entrepreneurship Development Program - Building Future Leaders",
    ),
    (
        "https://images.unsplash.com/photo-1519389950473-47ba0277781c?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        "Learn Business Fundamentals and Market Analysis",
    ),
    (
        "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        "Develop Your Business Plan and Pitch Skills",
    ),
    (
        "https://images.unsplash.com/photo-1531482615713-2afd69097998?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        "Connect with Mentors and Investors",
    ),
];

static OUTCOMES: &[&str] = &[
    "Fundamentals of entrepreneurship and business planning",
    "Market research and customer discovery",
    "Financial modeling and funding strategies",
    "Pitching and presentation skills",
];

/// Build the program overview with a start link for `active_unit`.
pub fn program_overview(active_unit: i64) -> ProgramOverview {
    ProgramOverview {
        title: PROGRAM_TITLE,
        tagline: PROGRAM_TAGLINE,
        slides: SLIDES
            .iter()
            .map(|&(image_url, caption)| Slide { image_url, caption })
            .collect(),
        outcomes: OUTCOMES.to_vec(),
        start: StartLink {
            label: format!("Start Learning Unit {}", active_unit),
            href: format!("/unit/{}", active_unit),
        },
    }
}
