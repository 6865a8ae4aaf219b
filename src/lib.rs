//! Pagesift - Web Page Content Sifter
//!
//! This crate fetches a public web page, sifts its visible text into a
//! heading-grouped plain-text document, optionally asks a chat-completion
//! model to clean the result up, and persists the conversation to a
//! document store.
//!
//! # Features
//!
//! - **Extraction**: noise-filtered, heading-grouped structural segmentation
//!   of page text, with social links gathered into a trailing block
//! - **LLM Structuring**: deterministic cleanup pass through an
//!   Azure-OpenAI-style chat deployment
//! - **Sessions**: caller-owned conversation context, persisted per session
//! - **Exports**: `.txt` and `.json` renditions of the structured text
//!
//! # Architecture
//!
//! ```text
//! URL ──▶ PageFetcher ──▶ ContentExtractor ──▶ ChatClient (optional)
//!              │                 │                    │
//!              ▼                 ▼                    ▼
//!          raw HTML      Structured Document    cleaned text
//!                                │
//!                                ▼
//!                    SessionContext ──▶ SessionStore
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagesift::extraction::ContentExtractor;
//!
//! let html = "<body><h2>Overview</h2><p>Hello</p><p>World</p></body>";
//! let content = ContentExtractor::extract(html);
//!
//! assert_eq!(content.text, "=== OVERVIEW ===\nHello World");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod session;
pub mod store;
pub mod tokenizer;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{Error, Result};
pub use export::Export;
pub use extraction::{ContentExtractor, StructuredContent};
pub use fetch::PageFetcher;
pub use llm::ChatClient;
pub use pipeline::{Pipeline, ProcessOutcome};
pub use session::SessionContext;
pub use store::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
