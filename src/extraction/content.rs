//! Heading-grouped content extraction
//!
//! This module walks a parsed page and partitions its visible text into
//! blocks labeled by the nearest preceding heading, with any discovered
//! social links appended as a synthetic trailing block.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::filter::NoiseFilter;
use crate::extraction::links::SocialLinkExtractor;

/// Heading levels that open a new labeled block.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Container tags treated as text-bearing during the walk.
const TEXT_CONTAINER_TAGS: [&str; 4] = ["p", "li", "div", "span"];

/// Title of the synthetic trailing block holding social links.
const SOCIAL_BLOCK_TITLE: &str = "SOCIAL MEDIA LINKS";

/// The structured document produced by extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredContent {
    /// Final plain-text document, blocks separated by a blank line
    pub text: String,
    /// Number of blocks in the document, social-links block included
    pub block_count: usize,
    /// Social links found on the page, lexicographically sorted
    pub social_links: Vec<String>,
    /// Character count of the final text
    pub char_count: usize,
}

/// Walk state for heading-grouped collection.
///
/// Holds the current heading, the pending block, and the blocks emitted so
/// far, so the traversal logic stays testable without a parsed document.
#[derive(Debug, Default)]
pub struct BlockAccumulator {
    current_heading: Option<String>,
    block: Vec<String>,
    blocks: Vec<String>,
}

impl BlockAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading visit.
    ///
    /// Flushes the pending block under the previous heading first, but only
    /// if one exists and the block is non-empty. Text collected before any
    /// heading is discarded here: headings always start a fresh collection
    /// context, and only the terminal step may emit unlabeled text.
    pub fn on_heading(&mut self, title: &str) {
        if self.current_heading.is_some() && !self.block.is_empty() {
            self.flush();
        }
        self.current_heading = Some(title.trim().to_string());
        self.block.clear();
    }

    /// Record a text-bearing container visit; empty text is ignored.
    pub fn on_text(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.block.push(text.to_string());
        }
    }

    /// Flush the pending block under the current heading, uppercasing the
    /// trimmed title and space-joining the body.
    fn flush(&mut self) {
        if let Some(title) = self.current_heading.take() {
            let body = self.block.join(" ").trim().to_string();
            self.blocks
                .push(format!("=== {} ===\n{}", title.to_uppercase(), body));
        }
        self.block.clear();
    }

    /// Complete the walk and return the emitted blocks in encounter order.
    ///
    /// A pending block under a heading flushes as usual; residual text that
    /// never saw a heading is emitted as a single unlabeled, newline-joined
    /// block instead.
    pub fn finish(mut self) -> Vec<String> {
        if self.current_heading.is_some() && !self.block.is_empty() {
            self.flush();
        } else if !self.block.is_empty() {
            let residual = self.block.join("\n").trim().to_string();
            self.blocks.push(residual);
        }
        self.blocks
    }
}

/// Content extraction functionality
pub struct ContentExtractor;

impl ContentExtractor {
    /// Extract a structured plain-text document from raw HTML.
    ///
    /// The parse is best-effort: malformed or partial HTML never fails, it
    /// just yields whatever the tree builder recovered. A document with no
    /// body produces an empty result.
    pub fn extract(html: &str) -> StructuredContent {
        let mut document = Html::parse_document(html);
        NoiseFilter::strip(&mut document);
        let social_links = SocialLinkExtractor::extract(&document);

        let body_selector = Selector::parse("body").unwrap();
        let mut accumulator = BlockAccumulator::new();

        if let Some(body) = document.select(&body_selector).next() {
            // Every descendant is visited, so a container nested inside
            // another container contributes its text again.
            for node in body.descendants() {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                let tag = element.value().name();
                if HEADING_TAGS.contains(&tag) {
                    accumulator.on_heading(&Self::visible_text(element));
                } else if TEXT_CONTAINER_TAGS.contains(&tag) {
                    accumulator.on_text(&Self::visible_text(element));
                }
            }
        }

        let mut blocks = accumulator.finish();
        if !social_links.is_empty() {
            let rendered = social_links
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push(format!("=== {SOCIAL_BLOCK_TITLE} ===\n{rendered}"));
        }

        let blocks: Vec<String> = blocks.into_iter().filter(|b| !b.is_empty()).collect();
        let text = blocks.join("\n\n");

        debug!(
            blocks = blocks.len(),
            social_links = social_links.len(),
            chars = text.chars().count(),
            "Extraction complete"
        );

        StructuredContent {
            block_count: blocks.len(),
            social_links: social_links.into_iter().collect(),
            char_count: text.chars().count(),
            text,
        }
    }

    /// Assemble an element's visible text: every descendant text fragment,
    /// trimmed, empties dropped, joined with a single space.
    fn visible_text(element: ElementRef) -> String {
        element
            .text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
