use crate::dom::{ElementNode, PageNode};
use crate::extract::config::{CONTAINER_TAGS, ExtractorConfig};
use crate::extract::filter::is_excluded;

struct Candidate<'a> {
    element: &'a ElementNode,
    score: f64,
}

/// Find the densest content container, if any qualifies.
///
/// Every non-excluded `div`/`section`/`article` is a candidate. A candidate
/// is admitted when its visible text exceeds `min_density_text_len` and its
/// density (text chars per descendant tag) exceeds `min_density`; the score
/// `density * ln(len)` balances raw length (which favors boilerplate
/// containers) against raw density (which favors small widgets). Ties go to
/// the first candidate in document order.
pub fn find_by_density<'a>(
    root: &'a ElementNode,
    config: &ExtractorConfig,
) -> Option<&'a ElementNode> {
    let mut best: Option<Candidate<'a>> = None;
    visit(root, config, &mut best);

    if let Some(candidate) = &best {
        log::debug!(
            "density scorer selected <{}> with score {:.2}",
            candidate.element.tag_name,
            candidate.score
        );
    }

    best.map(|c| c.element)
}

fn visit<'a>(el: &'a ElementNode, config: &ExtractorConfig, best: &mut Option<Candidate<'a>>) {
    // Exclusion only disqualifies the element itself as a candidate; its
    // descendants are still enumerated.
    if CONTAINER_TAGS.iter().any(|t| el.is_tag(t)) && !is_excluded(el) {
        let text_len = el.visible_text_len();
        if text_len > config.min_density_text_len {
            let density = text_len as f64 / (el.descendant_element_count() + 1) as f64;
            if density > config.min_density {
                let score = density * (text_len as f64).ln();
                // Strict improvement keeps the first candidate on ties
                if best.as_ref().is_none_or(|b| score > b.score) {
                    *best = Some(Candidate { element: el, score });
                }
            }
        }
    }

    for child in &el.children {
        if let PageNode::Element(child_el) = child {
            visit(child_el, config, best);
        }
    }
}
