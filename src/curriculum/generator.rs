//! Unit Document Generator
//!
//! Main entry point for unit pages. Assembles the ordered section records of
//! a unit into a `UnitDocument`, and renders documents to Markdown.
//!
//! Public API (consumed by api_server.rs and the page handlers):
//! - build_unit_document(unit) -> UnitDocument
//! - render_markdown(&UnitDocument) -> String
//! - unit_summaries() -> Vec<UnitSummary>

use crate::curriculum::resolver::resolve_content;
use crate::curriculum::synthesizer::section_count;
use crate::curriculum::types::{TOTAL_UNITS, UNKNOWN_UNIT_TITLE};
use crate::curriculum::utils::lookup_tables::unit_title;
use crate::curriculum::view_models::{UnitDocument, UnitSummary};

/// Build the complete document for a unit.
///
/// Never fails. Units outside 1..=8 get a document built from fallback
/// values ("Unknown Unit", "Topic" section titles) with wrapped body and
/// image selection.
pub fn build_unit_document(unit: i64) -> UnitDocument {
    let title = unit_title(unit).unwrap_or_else(|| {
        tracing::debug!(unit, "unit outside curriculum, using fallback title");
        UNKNOWN_UNIT_TITLE
    });

    let sections = (1..=section_count(unit) as i64)
        .map(|section| resolve_content(unit, section))
        .collect();

    UnitDocument {
        unit,
        title: title.to_string(),
        heading: unit_heading(unit, title),
        description: unit_description(title),
        sections,
    }
}

/// Summaries of every curriculum unit, in order.
pub fn unit_summaries() -> Vec<UnitSummary> {
    (1..=TOTAL_UNITS)
        .map(|unit| {
            let title = unit_title(unit).unwrap_or(UNKNOWN_UNIT_TITLE);
            UnitSummary {
                unit,
                title,
                heading: unit_heading(unit, title),
                section_count: section_count(unit),
            }
        })
        .collect()
}

/// Render a unit document as Markdown.
///
/// Output is deterministic: frontmatter, heading and description, then one
/// block per section separated by horizontal rules.
pub fn render_markdown(doc: &UnitDocument) -> String {
    let mut blocks = Vec::with_capacity(doc.sections.len() + 1);

    blocks.push(format!(
        "{}\n\n# {}\n\n{}",
        generate_frontmatter(doc),
        doc.heading,
        doc.description
    ));

    for section in &doc.sections {
        let mut block = format!("## {}\n\n", section.title);
        if let Some(image) = section.image_ref {
            block.push_str(&format!("![{}]({})\n\n", section.title, image));
        }
        block.push_str(section.body);
        blocks.push(block);
    }

    let mut result = blocks.join("\n\n---\n\n");
    result.push('\n');
    result
}

fn unit_heading(unit: i64, title: &str) -> String {
    format!("Unit {}: {}", unit, title)
}

fn unit_description(title: &str) -> String {
    format!(
        "This unit covers the fundamental concepts of {} in entrepreneurship development.",
        title.to_lowercase()
    )
}

/// YAML frontmatter with unit metadata.
fn generate_frontmatter(doc: &UnitDocument) -> String {
    format!(
        r#"---
unit: {}
title: "{}"
sections: {}
---"#,
        doc.unit,
        doc.title,
        doc.section_count()
    )
}
