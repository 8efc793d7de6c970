use crate::dom::ElementNode;
use crate::extract::config::{
    CHROME_TAGS, ExtractorConfig, IMAGE_EXTENSIONS, NOISE_KEYWORDS, TRACKER_KEYWORDS,
};

/// Whether an element's subtree should be pruned as non-content.
///
/// This is advisory keyword/tag/visibility pruning, not semantic
/// understanding: false positives and negatives are expected. A page that
/// names its article container `.news-header`, for instance, loses it.
pub fn is_excluded(el: &ElementNode) -> bool {
    let class_id = el.class_id().to_lowercase();
    if NOISE_KEYWORDS.iter().any(|k| class_id.contains(k)) {
        return true;
    }

    if CHROME_TAGS.iter().any(|t| el.is_tag(t)) {
        return true;
    }

    if !el.is_visible {
        return true;
    }

    false
}

/// Whether an `img` element is worth recording.
///
/// Rejects tracking pixels by URL substring, icon-sized images, and sources
/// that are neither a known image extension nor a data-image URI.
pub fn is_valid_image(el: &ElementNode, config: &ExtractorConfig) -> bool {
    let src = match el.get_attribute("src") {
        Some(src) => src.trim(),
        None => return false,
    };
    if src.is_empty() {
        return false;
    }

    if TRACKER_KEYWORDS.iter().any(|k| src.contains(k)) {
        return false;
    }

    let width = el.dimension("width");
    let height = el.dimension("height");
    if width < config.min_image_dimension && height < config.min_image_dimension {
        return false;
    }

    let lower = src.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) || src.starts_with("data:image/")
}
