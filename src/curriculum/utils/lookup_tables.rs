//! Curriculum Lookup Tables
//!
//! Fixed read-only dataset behind every unit page: unit titles, per-unit
//! section titles, one body paragraph per unit and a small pool of section
//! images. All tables are compile-time statics; nothing here is mutable.
//!
//! Tables:
//! - UNIT_TITLES: 8 unit titles (unit 1 at index 0)
//! - SECTION_TITLES: 8 rows x 5 section titles
//! - UNIT_BODIES: 8 long-form paragraphs
//! - SECTION_IMAGES: 5 image URLs

// ============================================================================
// EMBEDDED CURRICULUM DATA
// ============================================================================

pub static UNIT_TITLES: &[&str] = &[
    "Introduction to Entrepreneurship",
    "Market Research and Validation",
    "Business Model Development",
    "Financial Planning",
    "Marketing and Sales Strategies",
    "Funding and Investment",
    "Legal and Regulatory Aspects",
    "Scaling and Growth Strategies",
];

pub static SECTION_TITLES: &[&[&str]] = &[
    &["Entrepreneurial Mindset", "Identifying Opportunities", "Idea Validation", "Entrepreneurial Ecosystem", "Case Studies"],
    &["Market Research Basics", "Customer Discovery", "Competitive Analysis", "Market Sizing", "Validation Techniques"],
    &["Business Model Canvas", "Value Proposition", "Customer Segments", "Revenue Models", "Cost Structure"],
    &["Financial Projections", "Cash Flow Management", "Break-even Analysis", "Pricing Strategies", "Financial Statements"],
    &["Brand Development", "Digital Marketing", "Sales Funnel", "Customer Acquisition", "Retention Strategies"],
    &["Bootstrapping", "Angel Investment", "Venture Capital", "Pitch Deck Creation", "Negotiation Skills"],
    &["Business Registration", "Intellectual Property", "Contracts and Agreements", "Compliance", "Risk Management"],
    &["Team Building", "Operational Efficiency", "International Expansion", "Exit Strategies", "Sustainable Growth"],
];

pub static UNIT_BODIES: &[&str] = &[
    "Entrepreneurship is about identifying opportunities, taking calculated risks, and creating value through innovative solutions. This section explores the entrepreneurial mindset and how to develop it. You'll learn about the key traits of successful entrepreneurs and how to cultivate them in your own approach to business.",
    "Market research is the foundation of any successful business venture. In this section, you'll learn how to conduct effective market research to validate your business idea. We'll cover techniques for gathering data, analyzing market trends, and identifying customer needs that your business can address.",
    "A well-defined business model is essential for translating your idea into a viable enterprise. This section introduces the Business Model Canvas as a tool for mapping out the key components of your business. You'll learn how to articulate your value proposition, identify customer segments, and define revenue streams.",
    "Financial planning is critical for business success. This section covers the fundamentals of financial projections, cash flow management, and break-even analysis. You'll learn how to create financial statements that will help you make informed decisions and attract potential investors.",
    "Effective marketing and sales strategies are essential for reaching your target customers. This section explores various marketing channels, customer acquisition techniques, and sales funnel optimization. You'll learn how to develop a comprehensive marketing plan that aligns with your business goals.",
    "Securing funding is often necessary for business growth. This section covers different funding options, from bootstrapping to venture capital. You'll learn how to create a compelling pitch deck, approach investors, and negotiate favorable terms for your business.",
    "Understanding the legal and regulatory aspects of business is crucial for long-term success. This section covers business registration, intellectual property protection, and compliance requirements. You'll learn how to navigate the legal landscape and protect your business interests.",
    "Scaling your business requires strategic planning and execution. This section explores team building, operational efficiency, and international expansion strategies. You'll learn how to grow your business sustainably while maintaining your core values and vision.",
];

pub static SECTION_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1551836022-d5d88e9218df?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1531482615713-2afd69097998?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Zero-based table row for a curriculum unit, or None outside 1..=8.
fn unit_row(unit: i64) -> Option<usize> {
    if (1..=UNIT_TITLES.len() as i64).contains(&unit) {
        Some((unit - 1) as usize)
    } else {
        None
    }
}

/// Get the title of a curriculum unit.
///
/// Returns None for anything outside units 1..=8; callers pick the fallback.
///
/// # Examples
/// ```
/// use edp_curriculum::curriculum::utils::lookup_tables::unit_title;
///
/// assert_eq!(unit_title(4), Some("Financial Planning"));
/// assert_eq!(unit_title(9), None);
/// ```
pub fn unit_title(unit: i64) -> Option<&'static str> {
    unit_row(unit).map(|row| UNIT_TITLES[row])
}

/// Get the section title table for a curriculum unit.
pub fn section_titles(unit: i64) -> Option<&'static [&'static str]> {
    unit_row(unit).map(|row| SECTION_TITLES[row])
}

/// Body paragraph at a wrapped position. Any index is valid.
pub fn body_at(index: usize) -> &'static str {
    UNIT_BODIES[index % UNIT_BODIES.len()]
}

/// Image reference at a wrapped position. Any index is valid.
pub fn image_at(index: usize) -> &'static str {
    SECTION_IMAGES[index % SECTION_IMAGES.len()]
}
