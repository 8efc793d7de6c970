use crate::dom::ElementNode;

/// Heuristic policy thresholds for content extraction.
///
/// The defaults are empirically chosen and tunable; out-of-range values
/// degrade extraction quality, never control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Minimum visible text length for a semantic container to be accepted
    pub min_region_text_len: usize,

    /// Maximum ratio of anchor text to total text before a container is
    /// considered navigation
    pub max_link_ratio: f64,

    /// Minimum visible text length for a density-scored candidate
    pub min_density_text_len: usize,

    /// Minimum text density (chars per descendant tag) for a candidate
    pub min_density: f64,

    /// A flushed text buffer shorter than this (after trim) is not emitted
    pub min_text_block_len: usize,

    /// Headings with this many characters or more are suppressed
    pub max_heading_len: usize,

    /// Images smaller than this in both dimensions are treated as icons
    pub min_image_dimension: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_region_text_len: 200,
            max_link_ratio: 0.5,
            min_density_text_len: 500,
            min_density: 0.3,
            min_text_block_len: 20,
            max_heading_len: 200,
            min_image_dimension: 100,
        }
    }
}

/// Class/id substrings that mark an element as page chrome or noise
pub const NOISE_KEYWORDS: &[&str] = &[
    "header", "footer", "nav", "sidebar", "menu",
    "advertisement", "ads", "ad-", "widget",
    "comment", "related", "share", "social",
    "popup", "modal", "dialog", "banner",
    "cookie", "subscribe", "newsletter",
];

/// Tags that are page chrome regardless of class or id
pub const CHROME_TAGS: &[&str] = &["header", "footer", "nav", "aside"];

/// Tags considered as candidates by the density scorer
pub const CONTAINER_TAGS: &[&str] = &["div", "section", "article"];

/// Tags that signal a block boundary during extraction
pub const BLOCK_BOUNDARY_TAGS: &[&str] = &["p", "div", "br", "hr"];

/// File extensions accepted as images
pub const IMAGE_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp"];

/// Substrings that mark an image URL as a tracking pixel
pub const TRACKER_KEYWORDS: &[&str] = &["track", "pixel", "beacon"];

/// A probe for a semantic content container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SemanticSelector {
    /// Match by tag name
    Tag(&'static str),
    /// Match by class name
    Class(&'static str),
    /// Match by element id
    Id(&'static str),
    /// Match by `role` attribute
    Role(&'static str),
}

impl SemanticSelector {
    /// Whether the element matches this selector
    pub fn matches(&self, el: &ElementNode) -> bool {
        match self {
            SemanticSelector::Tag(tag) => el.is_tag(tag),
            SemanticSelector::Class(class) => el.has_class(class),
            SemanticSelector::Id(id) => el.id().is_some_and(|v| v == id),
            SemanticSelector::Role(role) => {
                el.get_attribute("role").is_some_and(|v| v == role)
            }
        }
    }
}

/// Semantic container probes, in priority order.
///
/// Order is the tie-break: an earlier selector wins even if a later one
/// would match a better container.
pub const SEMANTIC_SELECTORS: &[SemanticSelector] = &[
    SemanticSelector::Tag("article"),
    SemanticSelector::Tag("main"),
    SemanticSelector::Role("main"),
    SemanticSelector::Class("article-content"),
    SemanticSelector::Class("post-content"),
    SemanticSelector::Class("entry-content"),
    SemanticSelector::Class("content-body"),
    SemanticSelector::Class("story-body"),
    SemanticSelector::Id("article"),
    SemanticSelector::Id("content"),
    SemanticSelector::Class("article"),
];
