//! Gemini `generateContent` wire types.
//!
//! Request and response shapes for the REST endpoint, plus the extraction
//! helpers that pull the generated text and grounding citations out of a
//! response. Only the fields this crate consumes are modeled; anything
//! else the provider sends is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::models::snapshot::SourceRef;

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Builds the fixed snapshot request around `prompt`: web search
    /// enabled, JSON-only output constrained by the schema from
    /// [`crate::schema`].
    pub fn market_snapshot(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: crate::schema::market_snapshot_schema(),
            },
        }
    }
}

/// A single-turn message, in either direction.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One text fragment of a message. Non-text parts deserialize with an
/// empty `text`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Tool capability flags. Only web search is ever enabled.
#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Empty marker object enabling the provider's search tool.
#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

/// Output constraints: MIME type and response schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Decoded `generateContent` response.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated answer. Grounding metadata is attached per candidate
/// and is entirely optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// One entry of the grounding metadata. Only web-backed chunks carry a
/// citation this crate can surface.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

/// Web citation inside a grounding chunk. Either field may be missing.
#[derive(Debug, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Search-grounding block attached to a candidate: the citations the
/// provider claims to have consulted while answering.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or `None` when the
    /// response carries no content.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect(),
        )
    }

    /// Grounding citations that carry a web URI, in provider order.
    ///
    /// A chunk without a URI is skipped; a missing or empty title falls
    /// back to the URI itself.
    pub fn sources(&self) -> Vec<SourceRef> {
        let Some(candidate) = self.candidates.first() else {
            return Vec::new();
        };
        let Some(metadata) = candidate.grounding_metadata.as_ref() else {
            return Vec::new();
        };

        metadata
            .grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| {
                let uri = web.uri.clone()?;
                let title = web
                    .title
                    .clone()
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| uri.clone());
                Some(SourceRef { uri, title })
            })
            .collect()
    }
}
