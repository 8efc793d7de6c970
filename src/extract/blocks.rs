use crate::dom::{ElementNode, PageNode};
use crate::extract::config::{BLOCK_BOUNDARY_TAGS, ExtractorConfig};
use crate::extract::filter::{is_excluded, is_valid_image};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One typed unit of extracted content, in document order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A heading with its level (1..=6)
    Heading { level: u8, text: String },

    /// A merged run of inline text, longer than the flush threshold
    Text { text: String },
}

/// A content image, deduplicated by `src` across the whole extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    /// Image source URL, unique within one extraction
    pub src: String,

    /// Alternative text, possibly empty
    #[serde(default)]
    pub alt: String,

    /// Rendered or intrinsic width in pixels
    pub width: u32,

    /// Rendered or intrinsic height in pixels
    pub height: u32,
}

/// Walks a content region and emits typed blocks and images.
///
/// State is scoped to one extraction call: a text accumulator that merges
/// inline runs until a block boundary, and the set of image sources already
/// recorded.
pub struct BlockExtractor<'a> {
    config: &'a ExtractorConfig,
    blocks: Vec<ContentBlock>,
    images: Vec<ImageRef>,
    buffer: String,
    seen_srcs: HashSet<String>,
}

impl<'a> BlockExtractor<'a> {
    /// Create an extractor with the given policy thresholds
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            images: Vec::new(),
            buffer: String::new(),
            seen_srcs: HashSet::new(),
        }
    }

    /// Walk `root`'s subtree in pre-order and return the collected blocks
    /// and images.
    ///
    /// The root itself was chosen by the region selector and is not
    /// re-filtered; every descendant element that the exclusion predicate
    /// rejects is skipped together with its whole subtree.
    pub fn extract(mut self, root: &ElementNode) -> (Vec<ContentBlock>, Vec<ImageRef>) {
        for child in &root.children {
            self.walk(child);
        }
        self.flush_text();
        (self.blocks, self.images)
    }

    fn walk(&mut self, node: &PageNode) {
        match node {
            PageNode::Text { text } => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    self.buffer.push_str(trimmed);
                    self.buffer.push(' ');
                }
            }
            PageNode::Element(el) => {
                if is_excluded(el) {
                    return;
                }
                self.visit_element(el);
                for child in &el.children {
                    self.walk(child);
                }
            }
        }
    }

    // The boundary, heading, and image tag sets are disjoint, so at most one
    // rule fires per element.
    fn visit_element(&mut self, el: &ElementNode) {
        if BLOCK_BOUNDARY_TAGS.iter().any(|t| el.is_tag(t)) {
            self.flush_text();
            return;
        }

        if let Some(level) = heading_level(&el.tag_name) {
            let text = el.text_content();
            let len = text.chars().count();
            if len > 0 && len < self.config.max_heading_len {
                self.blocks.push(ContentBlock::Heading { level, text });
                // An emitted heading drops any pending short text
                self.buffer.clear();
            }
            return;
        }

        if el.is_tag("img") {
            self.visit_image(el);
        }
    }

    fn visit_image(&mut self, el: &ElementNode) {
        let src = match el.get_attribute("src") {
            Some(src) => src.trim(),
            None => return,
        };
        if src.is_empty() || self.seen_srcs.contains(src) {
            return;
        }
        if !is_valid_image(el, self.config) {
            return;
        }

        self.seen_srcs.insert(src.to_string());
        self.images.push(ImageRef {
            src: src.to_string(),
            alt: el.get_attribute("alt").cloned().unwrap_or_default(),
            width: el.dimension("width"),
            height: el.dimension("height"),
        });
    }

    // A buffer at or below the threshold is left in place: short fragments
    // keep accumulating until a flush succeeds or a heading clears them.
    fn flush_text(&mut self) {
        let trimmed = self.buffer.trim();
        if trimmed.chars().count() > self.config.min_text_block_len {
            self.blocks.push(ContentBlock::Text { text: trimmed.to_string() });
            self.buffer.clear();
        }
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag.to_ascii_lowercase().as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(root: &ElementNode) -> (Vec<ContentBlock>, Vec<ImageRef>) {
        let config = ExtractorConfig::default();
        BlockExtractor::new(&config).extract(root)
    }

    #[test]
    fn test_paragraphs_become_text_blocks() {
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text("The first paragraph has plenty of text."))
            .with_child(ElementNode::new("p").with_text("And the second paragraph does as well."));

        let (blocks, _) = extract(&root);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Text { text: "The first paragraph has plenty of text.".to_string() },
                ContentBlock::Text { text: "And the second paragraph does as well.".to_string() },
            ]
        );
    }

    #[test]
    fn test_inline_runs_merge() {
        let root = ElementNode::new("article")
            .with_child(
                ElementNode::new("p")
                    .with_text("Inline text with")
                    .with_child(ElementNode::new("em").with_text("emphasis"))
                    .with_text("in the middle."),
            )
            .with_child(ElementNode::new("br"));

        let (blocks, _) = extract(&root);
        assert_eq!(
            blocks,
            vec![ContentBlock::Text { text: "Inline text with emphasis in the middle.".to_string() }]
        );
    }

    #[test]
    fn test_short_buffer_not_emitted() {
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text("too short"))
            .with_child(ElementNode::new("p"));

        let (blocks, _) = extract(&root);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_short_fragments_accumulate() {
        // The short buffer is retained at a boundary, so fragments from
        // consecutive blocks merge once they cross the threshold.
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text("first bit"))
            .with_child(ElementNode::new("p").with_text("second bit makes it long enough"));

        let (blocks, _) = extract(&root);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            ContentBlock::Text { text: "first bit second bit makes it long enough".to_string() }
        );
    }

    #[test]
    fn test_heading_emitted() {
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("h2").with_text("Section Title"))
            .with_child(ElementNode::new("p").with_text("Paragraph following the section title."));

        let (blocks, _) = extract(&root);
        assert_eq!(blocks[0], ContentBlock::Heading { level: 2, text: "Section Title".to_string() });
        // The heading's own text also feeds the buffer as the walk descends,
        // which the next flush picks up together with the paragraph.
        assert!(matches!(&blocks[1], ContentBlock::Text { text } if text.contains("Paragraph following")));
    }

    #[test]
    fn test_heading_clears_pending_buffer() {
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("span").with_text("stray bit"))
            .with_child(ElementNode::new("h3").with_text("A Heading"))
            .with_child(ElementNode::new("p"));

        let (blocks, _) = extract(&root);
        assert_eq!(blocks[0], ContentBlock::Heading { level: 3, text: "A Heading".to_string() });
        // "stray bit" was discarded by the heading; only the heading's own
        // re-accumulated text remains, and it is below the flush threshold.
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_overlong_heading_suppressed() {
        let long: String = "x".repeat(250);
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("span").with_text("text before the heading survives"))
            .with_child(ElementNode::new("h2").with_text(long))
            .with_child(ElementNode::new("p"));

        let (blocks, _) = extract(&root);
        // No heading block; the pending buffer was not cleared and flushes
        // together with the heading's text at the boundary.
        assert!(blocks.iter().all(|b| matches!(b, ContentBlock::Text { .. })));
        assert!(matches!(&blocks[0], ContentBlock::Text { text } if text.starts_with("text before the heading survives")));
    }

    #[test]
    fn test_empty_heading_suppressed() {
        let root = ElementNode::new("article").with_child(ElementNode::new("h1"));
        let (blocks, _) = extract(&root);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_excluded_subtree_skipped() {
        let root = ElementNode::new("article")
            .with_child(
                ElementNode::new("div")
                    .with_attribute("class", "social-share")
                    .with_child(ElementNode::new("p").with_text("Share this article with your friends!")),
            )
            .with_child(ElementNode::new("p").with_text("Actual article text that should survive."))
            .with_child(ElementNode::new("hr"));

        let (blocks, _) = extract(&root);
        assert_eq!(
            blocks,
            vec![ContentBlock::Text { text: "Actual article text that should survive.".to_string() }]
        );
    }

    #[test]
    fn test_hidden_subtree_skipped() {
        let root = ElementNode::new("article")
            .with_child(
                ElementNode::new("div")
                    .with_visibility(false)
                    .with_child(ElementNode::new("p").with_text("Invisible text that must not appear.")),
            )
            .with_child(ElementNode::new("p").with_text("Visible text that should be extracted."));

        let (blocks, _) = extract(&root);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], ContentBlock::Text { text } if text.starts_with("Visible")));
    }

    #[test]
    fn test_final_flush() {
        let root = ElementNode::new("article")
            .with_child(ElementNode::new("span").with_text("trailing text with no boundary after it"));

        let (blocks, _) = extract(&root);
        assert_eq!(
            blocks,
            vec![ContentBlock::Text { text: "trailing text with no boundary after it".to_string() }]
        );
    }

    #[test]
    fn test_images_recorded_and_deduplicated() {
        let img = |src: &str| {
            ElementNode::new("img")
                .with_attribute("src", src)
                .with_attribute("alt", "a photo")
                .with_attribute("width", "200")
                .with_attribute("height", "150")
        };
        let root = ElementNode::new("article")
            .with_child(img("a.jpg"))
            .with_child(img("b.png"))
            .with_child(img("a.jpg"));

        let (_, images) = extract(&root);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].src, "a.jpg");
        assert_eq!(images[0].alt, "a photo");
        assert_eq!(images[0].width, 200);
        assert_eq!(images[1].src, "b.png");
    }

    #[test]
    fn test_tracking_pixel_dropped() {
        let root = ElementNode::new("article").with_child(
            ElementNode::new("img")
                .with_attribute("src", "track-pixel.gif")
                .with_attribute("width", "1")
                .with_attribute("height", "1"),
        );

        let (_, images) = extract(&root);
        assert!(images.is_empty());
    }

    #[test]
    fn test_block_serialization() {
        let heading = ContentBlock::Heading { level: 2, text: "T".to_string() };
        let json = serde_json::to_string(&heading).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":2,"text":"T"}"#);

        let text = ContentBlock::Text { text: "body".to_string() };
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"type":"text","text":"body"}"#);
    }

    #[test]
    fn test_heading_level_parsing() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("H4"), Some(4));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("div"), None);
    }
}
