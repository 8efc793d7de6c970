use crate::dom::{ElementNode, PageSnapshot};
use crate::extract::config::{ExtractorConfig, SEMANTIC_SELECTORS};
use crate::extract::density::find_by_density;

/// Choose the subtree judged to hold the page's main content.
///
/// Strategy, first match wins:
/// 1. Probe the semantic selector list in order; for each selector the first
///    matching element is checked with [`is_valid_content_area`].
/// 2. Fall back to the density scorer.
/// 3. Fall back to the document root; block-level filtering then has to
///    suppress the noise.
///
/// This never fails: at worst the whole page is the region.
pub fn select_main_region<'a>(
    snapshot: &'a PageSnapshot,
    config: &ExtractorConfig,
) -> &'a ElementNode {
    for selector in SEMANTIC_SELECTORS {
        if let Some(el) = snapshot.root.find_element(&mut |e| selector.matches(e)) {
            if is_valid_content_area(el, config) {
                log::debug!("main region matched {:?}", selector);
                return el;
            }
        }
    }

    if let Some(el) = find_by_density(&snapshot.root, config) {
        log::debug!("main region found by content density");
        return el;
    }

    log::debug!("no main region candidate, using document root");
    &snapshot.root
}

/// Whether an element plausibly holds readable content.
///
/// Rejects containers with little text and containers whose text is mostly
/// anchor text (navigation blocks).
pub fn is_valid_content_area(el: &ElementNode, config: &ExtractorConfig) -> bool {
    let text_len = el.visible_text_len();
    if text_len < config.min_region_text_len {
        return false;
    }

    let link_ratio = el.anchor_text_len() as f64 / text_len as f64;
    link_ratio <= config.max_link_ratio
}
