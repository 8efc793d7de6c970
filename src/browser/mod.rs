//! Browser session management
//!
//! Thin orchestration around Chrome DevTools Protocol (CDP) via
//! `headless_chrome`: launching or connecting to a browser, navigating, and
//! capturing [`crate::dom::PageSnapshot`]s from live tabs. Everything in
//! here is a collaborator of the extraction core, not part of it.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
