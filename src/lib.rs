//! # page-prompt
//!
//! A Rust library that extracts the readable content of a web page into typed
//! blocks, assembles it into an AI chat prompt, and delivers the prompt into
//! a third-party chat page via Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Content Extraction**: Readability-style heuristics pick the main
//!   content region of an arbitrary page (semantic tags first, then a text
//!   density score) and turn it into an ordered sequence of headings, text
//!   blocks, and images
//! - **Prompt Assembly**: Extracted content plus a user-configurable prompt
//!   template becomes one chat-ready prompt
//! - **Snapshot Abstraction**: Extraction runs against a typed snapshot
//!   tree, so it works the same on captured pages and synthetic test trees
//! - **Delivery** (feature `browser`): Best-effort filling and submitting of
//!   a chat page's input element
//!
//! ## Extracting from a live page
//!
//! ```rust,no_run
//! use page_prompt::browser::{BrowserSession, LaunchOptions};
//! use page_prompt::extract::extract_page_content;
//!
//! # fn main() -> page_prompt::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://example.com/article")?;
//! session.wait_for_navigation()?;
//!
//! let snapshot = session.capture_snapshot()?;
//! let result = extract_page_content(&snapshot);
//! println!("{} blocks, {} images", result.blocks.len(), result.images.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Extracting from a synthetic tree
//!
//! The core never touches a browser; any [`dom::PageSnapshot`] works:
//!
//! ```rust
//! use page_prompt::dom::{ElementNode, PageSnapshot};
//! use page_prompt::extract::extract_page_content;
//!
//! let root = ElementNode::new("body").with_child(
//!     ElementNode::new("article")
//!         .with_child(ElementNode::new("p").with_text(
//!             "Enough prose to count as readable content for the region \
//!              validator, which wants a couple hundred characters before \
//!              it accepts a container as the page's main content area. \
//!              This paragraph provides exactly that kind of filler.",
//!         ))
//!         .with_child(ElementNode::new("hr")),
//! );
//! let snapshot = PageSnapshot::new("Title", "https://example.com", root);
//! let result = extract_page_content(&snapshot);
//! assert_eq!(result.blocks.len(), 1);
//! ```
//!
//! ## Building and delivering a prompt
//!
//! ```rust,no_run
//! use page_prompt::browser::{BrowserSession, LaunchOptions};
//! use page_prompt::deliver::{ChatTarget, deliver_prompt};
//! use page_prompt::extract::extract_page_content;
//! use page_prompt::prompt::{TemplateStore, build_prompt};
//!
//! # fn main() -> page_prompt::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::new().headless(false))?;
//! session.navigate("https://example.com/article")?;
//! session.wait_for_navigation()?;
//!
//! let result = extract_page_content(&session.capture_snapshot()?);
//!
//! let store = TemplateStore::with_defaults();
//! let template = store.active().expect("store has a default template");
//! let prompt = build_prompt(&result, template);
//!
//! deliver_prompt(&session, &ChatTarget::gemini(), &prompt)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: Page snapshot tree and typed accessors
//! - [`extract`]: The extraction core (region selection, density scoring,
//!   block extraction)
//! - [`prompt`]: Prompt templates and prompt assembly
//! - [`browser`]: Browser session and snapshot capture (feature `browser`)
//! - [`deliver`]: Prompt delivery into chat pages (feature `browser`)
//! - [`error`]: Error types and result alias

pub mod dom;
pub mod error;
pub mod extract;
pub mod prompt;

#[cfg(feature = "browser")]
pub mod browser;
#[cfg(feature = "browser")]
pub mod deliver;

pub use dom::{BoundingBox, ElementNode, PageNode, PageSnapshot};
pub use error::{PromptError, Result};
pub use extract::{ContentBlock, ExtractionResult, ExtractorConfig, ImageRef, extract_page_content};
pub use prompt::{PromptTemplate, TemplateStore, build_prompt};

#[cfg(feature = "browser")]
pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
#[cfg(feature = "browser")]
pub use deliver::{ChatTarget, deliver_prompt};
