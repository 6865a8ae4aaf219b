//! Content extraction module
//!
//! Turns raw HTML into a heading-grouped plain-text document: noise
//! subtrees are removed, social links are collected, and visible text is
//! gathered under the nearest preceding heading.

pub mod content;
pub mod filter;
pub mod links;

pub use content::{BlockAccumulator, ContentExtractor, StructuredContent};
pub use filter::{NoiseFilter, NOISE_TAGS};
pub use links::{SocialLinkExtractor, SOCIAL_DOMAINS};
