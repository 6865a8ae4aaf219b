//! Social link extraction
//!
//! Collects anchor hrefs pointing at known social platforms. Runs over the
//! already noise-filtered document, independently of heading structure.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use tracing::debug;

/// Substring markers identifying social-platform hosts.
pub const SOCIAL_DOMAINS: [&str; 7] = [
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "t.me",
    "wa.me",
];

/// Social link extraction functionality
pub struct SocialLinkExtractor;

impl SocialLinkExtractor {
    /// Collect every social-platform href in the document.
    ///
    /// Matching is by substring against [`SOCIAL_DOMAINS`]; values are
    /// trimmed but otherwise kept verbatim (no scheme or trailing-slash
    /// normalization), and deduplicated by exact string. The returned set
    /// iterates in lexicographic order, which is also the render order.
    pub fn extract(document: &Html) -> BTreeSet<String> {
        let anchors = Selector::parse("a[href]").unwrap();

        let links: BTreeSet<String> = document
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| SOCIAL_DOMAINS.iter().any(|domain| href.contains(domain)))
            .map(|href| href.trim().to_string())
            .collect();

        debug!("Collected {} social links", links.len());
        links
    }
}
