use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in a page snapshot: an element or a run of character data.
///
/// Serialized with a `kind` tag so capture scripts can emit the tree as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageNode {
    /// An element with a tag, attributes, and children
    Element(ElementNode),

    /// A text node
    Text { text: String },
}

/// An element in the snapshot tree.
///
/// Elements are assumed displayed unless the capture marked them hidden
/// (`display: none` or `visibility: hidden` at capture time).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "article", "img")
    pub tag_name: String,

    /// Element attributes (id, class, src, alt, etc.)
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageNode>,

    /// Whether the element was displayed and visible at capture time
    #[serde(default = "default_visible")]
    pub is_visible: bool,

    /// Bounding box information (x, y, width, height)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

fn default_visible() -> bool {
    true
}

/// Bounding box coordinates for an element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementNode {
    /// Create a new visible ElementNode with no attributes or children
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
            is_visible: true,
            bounding_box: None,
        }
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: HashMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: set a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder method: append a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(PageNode::Text { text: text.into() });
        self
    }

    /// Builder method: append an element child
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(PageNode::Element(child));
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: set visibility
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Builder method: set bounding box
    pub fn with_bounding_box(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bounding_box = Some(BoundingBox { x, y, width, height });
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(PageNode::Element(child));
    }

    /// Add a child text node
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(PageNode::Text { text: text.into() });
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.attributes.get("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Class attribute and id concatenated, for keyword matching
    pub fn class_id(&self) -> String {
        format!(
            "{} {}",
            self.attributes.get("class").map(String::as_str).unwrap_or(""),
            self.attributes.get("id").map(String::as_str).unwrap_or("")
        )
    }

    /// Parse a numeric attribute such as `width` or `height`, defaulting to 0
    pub fn dimension(&self, key: &str) -> u32 {
        self.get_attribute(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Visible text of this subtree, whitespace-normalized.
    ///
    /// Equivalent to `innerText`: text inside hidden elements is skipped.
    pub fn visible_text(&self) -> String {
        let mut raw = String::new();
        self.collect_visible_text(&mut raw);
        normalize_text(&raw)
    }

    /// Length of [`Self::visible_text`] in characters
    pub fn visible_text_len(&self) -> usize {
        self.visible_text().chars().count()
    }

    fn collect_visible_text(&self, out: &mut String) {
        if !self.is_visible {
            return;
        }
        for child in &self.children {
            match child {
                PageNode::Text { text } => {
                    out.push_str(text);
                    out.push(' ');
                }
                PageNode::Element(el) => el.collect_visible_text(out),
            }
        }
    }

    /// Full text of this subtree, whitespace-normalized.
    ///
    /// Equivalent to `textContent`: hidden descendants are included.
    pub fn text_content(&self) -> String {
        let mut raw = String::new();
        self.collect_text_content(&mut raw);
        normalize_text(&raw)
    }

    fn collect_text_content(&self, out: &mut String) {
        for child in &self.children {
            match child {
                PageNode::Text { text } => {
                    out.push_str(text);
                    out.push(' ');
                }
                PageNode::Element(el) => el.collect_text_content(out),
            }
        }
    }

    /// Total visible text length of all descendant anchor elements
    pub fn anchor_text_len(&self) -> usize {
        let mut total = 0;
        self.for_each_element(&mut |el| {
            if el.is_tag("a") {
                total += el.visible_text_len();
            }
        });
        total
    }

    /// Number of descendant elements (the element itself is not counted)
    pub fn descendant_element_count(&self) -> usize {
        let mut count = 0;
        self.for_each_element(&mut |_| count += 1);
        count
    }

    /// Visit every descendant element in document (pre-order) order
    pub fn for_each_element<'a>(&'a self, f: &mut dyn FnMut(&'a ElementNode)) {
        for child in &self.children {
            if let PageNode::Element(el) = child {
                f(el);
                el.for_each_element(f);
            }
        }
    }

    /// Find the first element (pre-order, including self) matching a predicate
    pub fn find_element(
        &self,
        pred: &mut dyn FnMut(&ElementNode) -> bool,
    ) -> Option<&ElementNode> {
        if pred(self) {
            return Some(self);
        }
        for child in &self.children {
            if let PageNode::Element(el) = child {
                if let Some(found) = el.find_element(pred) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl BoundingBox {
    /// Create a new BoundingBox
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check if the bounding box has non-zero dimensions
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Collapse whitespace runs and trim
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
