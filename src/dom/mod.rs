//! Page snapshot tree
//!
//! A read-only, typed representation of a rendered page, decoupled from any
//! live DOM binding so the extraction core can run against synthetic trees:
//! - PageNode / ElementNode: element-or-text nodes with typed accessors
//! - PageSnapshot: title, URL, capture time, and the root element
//!
//! Snapshots are built either in code (tests, embedders) or captured from a
//! live tab via an injected script (feature `browser`).

pub mod node;
pub mod snapshot;

pub use node::{BoundingBox, ElementNode, PageNode};
pub use snapshot::PageSnapshot;
