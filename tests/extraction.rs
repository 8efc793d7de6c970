//! End-to-end extraction tests over synthetic snapshot trees.

use page_prompt::dom::{ElementNode, PageSnapshot};
use page_prompt::extract::{ContentBlock, extract_page_content};
use page_prompt::prompt::{PromptTemplate, build_prompt};

fn prose(len: usize) -> String {
    "reading maketh a full man conference a ready man and writing an exact man "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn snapshot(root: ElementNode) -> PageSnapshot {
    PageSnapshot::new("Test Page", "https://example.com/test", root)
}

#[test]
fn article_wins_over_link_heavy_nav() {
    // Scenario: an <article> with real prose next to a <nav> full of links.
    let mut nav = ElementNode::new("nav");
    for i in 0..10 {
        nav.add_child(ElementNode::new("a").with_text(format!("site section {}", i)));
    }
    let article = ElementNode::new("article")
        .with_child(ElementNode::new("p").with_text(prose(300)))
        .with_child(ElementNode::new("hr"));
    let root = ElementNode::new("body").with_child(nav).with_child(article);

    let result = extract_page_content(&snapshot(root));

    assert_eq!(result.blocks.len(), 1);
    match &result.blocks[0] {
        ContentBlock::Text { text } => {
            assert!(text.starts_with("reading maketh"));
            assert!(!text.contains("site section"));
        }
        other => panic!("expected a text block, got {:?}", other),
    }
}

#[test]
fn density_fallback_skips_ad_container() {
    // Scenario: no semantic markup; one dense prose div, one ad div.
    let mut prose_div = ElementNode::new("div");
    for _ in 0..40 {
        prose_div.add_child(ElementNode::new("span").with_text(prose(15)));
    }
    prose_div.add_child(ElementNode::new("hr"));

    let ad = ElementNode::new("div")
        .with_attribute("class", "ad-banner")
        .with_child(ElementNode::new("p").with_text(prose(50)));

    let root = ElementNode::new("body").with_child(ad).with_child(prose_div);
    let result = extract_page_content(&snapshot(root));

    assert!(!result.blocks.is_empty());
    let all_text: String = result
        .blocks
        .iter()
        .map(|b| match b {
            ContentBlock::Text { text } | ContentBlock::Heading { text, .. } => text.as_str(),
        })
        .collect();
    assert!(all_text.contains("reading maketh"));
    // The ad div was not the selected region
    assert!(all_text.chars().count() > 500);
}

#[test]
fn duplicate_image_sources_collapse() {
    let img = || {
        ElementNode::new("img")
            .with_attribute("src", "a.jpg")
            .with_attribute("width", "200")
            .with_attribute("height", "150")
    };
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text(prose(250)))
            .with_child(img())
            .with_child(img()),
    );

    let result = extract_page_content(&snapshot(root));
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].src, "a.jpg");
}

#[test]
fn tracking_pixel_absent_from_images() {
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text(prose(250)))
            .with_child(
                ElementNode::new("img")
                    .with_attribute("src", "track-pixel.gif")
                    .with_attribute("width", "1")
                    .with_attribute("height", "1"),
            ),
    );

    let result = extract_page_content(&snapshot(root));
    assert!(result.images.is_empty());
}

#[test]
fn overlong_heading_suppressed_and_buffer_survives() {
    // Scenario: a 250-char <h2> emits no heading block, and the pending text
    // before it is not discarded.
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text(prose(230)))
            .with_child(ElementNode::new("span").with_text("short lead-in"))
            .with_child(ElementNode::new("h2").with_text("H".repeat(250)))
            .with_child(ElementNode::new("p")),
    );

    let result = extract_page_content(&snapshot(root));
    assert!(result.blocks.iter().all(|b| matches!(b, ContentBlock::Text { .. })));
    // The lead-in merged with the suppressed heading's text at the next flush
    assert!(result.blocks.iter().any(|b| matches!(
        b,
        ContentBlock::Text { text } if text.contains("short lead-in")
    )));
}

#[test]
fn blocks_preserve_document_order() {
    // Each paragraph is followed by a boundary so its text flushes before
    // the next heading resets the buffer.
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("h1").with_text("Title Of The Piece"))
            .with_child(ElementNode::new("p").with_text(prose(120)))
            .with_child(ElementNode::new("br"))
            .with_child(ElementNode::new("h2").with_text("Second Section Here"))
            .with_child(ElementNode::new("p").with_text(prose(120)))
            .with_child(ElementNode::new("hr")),
    );

    let result = extract_page_content(&snapshot(root));

    let shape: Vec<&str> = result
        .blocks
        .iter()
        .map(|b| match b {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Text { .. } => "text",
        })
        .collect();
    assert_eq!(shape, vec!["heading", "text", "heading", "text"]);

    match (&result.blocks[0], &result.blocks[2]) {
        (ContentBlock::Heading { level: 1, text: first }, ContentBlock::Heading { level: 2, text: second }) => {
            assert_eq!(first, "Title Of The Piece");
            assert_eq!(second, "Second Section Here");
        }
        other => panic!("unexpected heading pair: {:?}", other),
    }
}

#[test]
fn extraction_is_idempotent() {
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("h1").with_text("Stable Title"))
            .with_child(ElementNode::new("p").with_text(prose(300)))
            .with_child(
                ElementNode::new("img")
                    .with_attribute("src", "photo.png")
                    .with_attribute("width", "640")
                    .with_attribute("height", "480"),
            )
            .with_child(ElementNode::new("hr")),
    );
    let snapshot = snapshot(root);

    let first = extract_page_content(&snapshot);
    let second = extract_page_content(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn text_blocks_exceed_flush_threshold() {
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("p").with_text(prose(250)))
            .with_child(ElementNode::new("p").with_text("tiny"))
            .with_child(ElementNode::new("p").with_text(prose(60)))
            .with_child(ElementNode::new("hr")),
    );

    let result = extract_page_content(&snapshot(root));
    for block in &result.blocks {
        if let ContentBlock::Text { text } = block {
            assert!(text.trim().chars().count() > 20, "short block emitted: {:?}", text);
        }
    }
}

#[test]
fn unique_image_sources() {
    let mut article = ElementNode::new("article").with_child(ElementNode::new("p").with_text(prose(250)));
    for i in 0..5 {
        let src = format!("img-{}.jpg", i % 3);
        article.add_child(
            ElementNode::new("img")
                .with_attribute("src", src)
                .with_attribute("width", "300")
                .with_attribute("height", "200"),
        );
    }
    let root = ElementNode::new("body").with_child(article);

    let result = extract_page_content(&snapshot(root));
    let mut srcs: Vec<&str> = result.images.iter().map(|i| i.src.as_str()).collect();
    assert_eq!(srcs, vec!["img-0.jpg", "img-1.jpg", "img-2.jpg"]);
    srcs.dedup();
    assert_eq!(srcs.len(), result.images.len());
}

#[test]
fn empty_page_round_trips_into_prompt() {
    let result = extract_page_content(&snapshot(ElementNode::new("body")));
    assert!(result.is_empty());

    // The prompt builder still produces something useful
    let prompt = build_prompt(&result, &PromptTemplate::default_template());
    assert!(prompt.contains("**Title**: Test Page"));
    assert!(prompt.contains("**URL**: https://example.com/test"));
}

#[test]
fn whole_page_fallback_still_filters_chrome() {
    // No semantic container and nothing dense enough: extraction runs over
    // the document root and exclusion pruning does the cleanup.
    let mut footer = ElementNode::new("footer");
    footer.add_child(ElementNode::new("p").with_text("copyright notice and legal boilerplate"));

    let root = ElementNode::new("body")
        .with_child(ElementNode::new("p").with_text(prose(120)))
        .with_child(footer)
        .with_child(ElementNode::new("hr"));

    let result = extract_page_content(&snapshot(root));
    assert_eq!(result.blocks.len(), 1);
    match &result.blocks[0] {
        ContentBlock::Text { text } => assert!(!text.contains("copyright")),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn serialized_result_shape() {
    let root = ElementNode::new("body").with_child(
        ElementNode::new("article")
            .with_child(ElementNode::new("h2").with_text("Shape Check"))
            .with_child(ElementNode::new("p").with_text(prose(100)))
            .with_child(ElementNode::new("hr")),
    );

    let result = extract_page_content(&snapshot(root));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["title"], "Test Page");
    assert_eq!(json["blocks"][0]["type"], "heading");
    assert_eq!(json["blocks"][0]["level"], 2);
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
}
