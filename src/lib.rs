//! AI-grounded daily snapshot client for Indian stock markets.
//!
//! Builds a web-search-grounded Gemini `generateContent` request with a
//! fixed JSON response schema, parses the generated payload into typed
//! models, and attaches the provider's grounding citations as sources.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod schema;

pub use client::SnapshotFetcher;
pub use error::{HarshadError, Result};
