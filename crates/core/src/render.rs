//! Rendering of a structured explanation into fixed display regions.
//!
//! [`render_cards`] is a pure function of its input: five regions,
//! populated deterministically, with the list regions rendered as one
//! bullet line per entry in input order and the disclaimer left as
//! plain text. Malformed responses are handled at the deserialisation
//! boundary, so there is no error path here.

use std::fmt;

use meds_types::Explanation;

/// The five display regions of the medical-info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationCards {
    /// What the medicine is for (single paragraph)
    pub purpose: String,
    /// How to take it safely (single paragraph)
    pub usage: String,
    /// Common side effects, one bullet line per entry
    pub side_effects: String,
    /// Things that need immediate medical attention, one bullet line per entry
    pub warnings: String,
    /// Plain-text disclaimer, no markup
    pub disclaimer: String,
}

/// Maps an explanation onto the five display regions.
pub fn render_cards(explanation: &Explanation) -> ExplanationCards {
    ExplanationCards {
        purpose: explanation.purpose.clone(),
        usage: explanation.usage.clone(),
        side_effects: bullet_lines(&explanation.side_effects),
        warnings: bullet_lines(&explanation.warnings),
        disclaimer: explanation.disclaimer.clone(),
    }
}

fn bullet_lines(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("- {entry}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for ExplanationCards {
    /// Formats the regions as the terminal page layout, in the fixed
    /// order purpose, usage, side effects, warnings, disclaimer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();

        output.push_str("What it is for\n");
        output.push_str(&self.purpose);
        output.push_str("\n\nHow to take it\n");
        output.push_str(&self.usage);
        output.push_str("\n\nSide effects\n");
        output.push_str(&self.side_effects);
        output.push_str("\n\nWhen to seek help\n");
        output.push_str(&self.warnings);
        output.push_str("\n\n");
        output.push_str(&self.disclaimer);

        write!(f, "{output}")
    }
}
