//! Noise filtering
//!
//! Strips non-content subtrees from a parsed document before any text or
//! link collection happens, so denylisted markup contributes nothing to
//! either pass.

use scraper::Html;
use tracing::debug;

/// Tags whose subtrees never carry visible page content.
pub const NOISE_TAGS: [&str; 11] = [
    "script", "style", "header", "footer", "nav", "form", "noscript", "svg", "aside", "dialog",
    "iframe",
];

/// Noise removal functionality
pub struct NoiseFilter;

impl NoiseFilter {
    /// Detach every denylisted element from the tree, descendants included.
    ///
    /// Mutates the document in place; detached subtrees are unreachable from
    /// the root afterwards, so neither the link scan nor the content walk
    /// will see them.
    pub fn strip(document: &mut Html) {
        let doomed: Vec<_> = document
            .tree
            .root()
            .descendants()
            .filter(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|el| NOISE_TAGS.contains(&el.name()))
            })
            .map(|node| node.id())
            .collect();

        for id in &doomed {
            if let Some(mut node) = document.tree.get_mut(*id) {
                node.detach();
            }
        }

        debug!("Detached {} noise elements", doomed.len());
    }
}
