use crate::dom::node::ElementNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "browser")]
use crate::error::{PromptError, Result};
#[cfg(feature = "browser")]
use headless_chrome::Tab;
#[cfg(feature = "browser")]
use std::sync::Arc;

/// A read-only snapshot of a rendered page.
///
/// The snapshot is the input to [`crate::extract::extract_page_content`]; the
/// extractor never mutates it. `captured_at` records the capture instant, so
/// extraction stays a pure function of the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    /// Document title
    pub title: String,

    /// Page URL
    pub url: String,

    /// ISO-8601 instant the snapshot was taken
    #[serde(default = "Utc::now")]
    pub captured_at: DateTime<Utc>,

    /// Root element of the snapshot tree (the document body)
    pub root: ElementNode,
}

impl PageSnapshot {
    /// Create a snapshot from an already-built tree
    pub fn new(title: impl Into<String>, url: impl Into<String>, root: ElementNode) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            captured_at: Utc::now(),
            root,
        }
    }

    /// Parse a snapshot from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the snapshot to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Capture a snapshot from a live browser tab.
    ///
    /// Injects a capture script that walks the rendered DOM and returns the
    /// tree as a JSON string, including per-element computed visibility.
    #[cfg(feature = "browser")]
    pub fn from_tab(tab: &Arc<Tab>) -> Result<Self> {
        let js_code = include_str!("snapshot.js");

        let result = tab
            .evaluate(js_code, false)
            .map_err(|e| PromptError::SnapshotFailed(format!("Failed to execute capture script: {}", e)))?;

        let json_value = result
            .value
            .ok_or_else(|| PromptError::SnapshotFailed("No value returned from capture script".to_string()))?;

        // The capture script returns a JSON string, so parse the string first
        let json_str: String = serde_json::from_value(json_value)
            .map_err(|e| PromptError::SnapshotFailed(format!("Failed to get JSON string: {}", e)))?;

        let snapshot: PageSnapshot = serde_json::from_str(&json_str)
            .map_err(|e| PromptError::SnapshotFailed(format!("Failed to parse snapshot JSON: {}", e)))?;

        log::debug!(
            "captured snapshot of {} ({} elements)",
            snapshot.url,
            snapshot.root.descendant_element_count() + 1
        );

        Ok(snapshot)
    }
}
