//! Readable-content extraction
//!
//! Turns a [`PageSnapshot`] into an ordered sequence of typed content blocks
//! plus a deduplicated image list. Three cooperating stages, all pure and
//! deterministic given a snapshot:
//! - region: pick the subtree holding the main content (semantic probe)
//! - density: fallback ranking of containers by text density
//! - blocks: walk the chosen subtree and emit heading/text blocks and images
//!
//! Extraction never fails. A page with nothing extractable yields a result
//! with empty `blocks` and `images`.

pub mod blocks;
pub mod config;
pub mod density;
pub mod filter;
pub mod region;

pub use blocks::{BlockExtractor, ContentBlock, ImageRef};
pub use config::{ExtractorConfig, SemanticSelector};
pub use density::find_by_density;
pub use filter::{is_excluded, is_valid_image};
pub use region::{is_valid_content_area, select_main_region};

use crate::dom::PageSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one extraction call.
///
/// `blocks` preserves the document order of the source subtree; `images` is
/// in first-occurrence order with unique `src` values. Immutable once
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionResult {
    /// Document title
    pub title: String,

    /// Page URL
    pub url: String,

    /// When the underlying snapshot was captured (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Extracted content blocks in document order
    pub blocks: Vec<ContentBlock>,

    /// Extracted images in first-occurrence order
    pub images: Vec<ImageRef>,
}

impl ExtractionResult {
    /// Whether extraction found neither blocks nor images.
    ///
    /// This is a valid outcome; downstream prompt building falls back to
    /// title and URL only.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.images.is_empty()
    }
}

/// Extract the readable content of a page with default thresholds.
///
/// The sole entry point of the core. Deterministic for a given snapshot,
/// read-only, and infallible: structurally empty pages produce an empty
/// result.
///
/// ```
/// use page_prompt::dom::{ElementNode, PageSnapshot};
/// use page_prompt::extract::{ContentBlock, extract_page_content};
///
/// let root = ElementNode::new("body").with_child(
///     ElementNode::new("article")
///         .with_child(ElementNode::new("h1").with_text("Hello"))
///         .with_child(ElementNode::new("p").with_text(
///             "A paragraph with enough text to be kept as a content block, \
///              repeated until the region is plausibly an article. \
///              More filler text so the region validator accepts it. \
///              And a little more for good measure, well past two hundred \
///              characters of visible prose in total.",
///         ))
///         .with_child(ElementNode::new("hr")),
/// );
/// let snapshot = PageSnapshot::new("Hello", "https://example.com", root);
///
/// let result = extract_page_content(&snapshot);
/// assert_eq!(result.blocks[0], ContentBlock::Heading { level: 1, text: "Hello".into() });
/// ```
pub fn extract_page_content(snapshot: &PageSnapshot) -> ExtractionResult {
    extract_with_config(snapshot, &ExtractorConfig::default())
}

/// Extract with custom thresholds
pub fn extract_with_config(snapshot: &PageSnapshot, config: &ExtractorConfig) -> ExtractionResult {
    let region = select_main_region(snapshot, config);
    let (blocks, images) = BlockExtractor::new(config).extract(region);

    log::debug!(
        "extracted {} blocks and {} images from {}",
        blocks.len(),
        images.len(),
        snapshot.url
    );

    ExtractionResult {
        title: snapshot.title.clone(),
        url: snapshot.url.clone(),
        timestamp: snapshot.captured_at,
        blocks,
        images,
    }
}
