//! Prompt assembly
//!
//! Turns an [`crate::extract::ExtractionResult`] into the text handed to a
//! chat page: a fixed header and content rendering plus the instructions of
//! the active [`PromptTemplate`]. Templates live in a small insertion-ordered
//! store with JSON persistence.

pub mod builder;
pub mod template;

pub use builder::{MAX_PROMPT_IMAGES, build_prompt};
pub use template::{DEFAULT_PROMPT_TEXT, MAX_TEMPLATES, PromptTemplate, TemplateStore};
