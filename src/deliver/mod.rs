//! Prompt delivery into third-party chat pages
//!
//! A best-effort UI-automation adapter, deliberately separate from the
//! extraction core: given assembled prompt text, open the chat page, find
//! its input element by probing a list of selectors, type the text, and
//! attempt a submit. Chat pages change their markup without notice; failures
//! here are expected and reported, never fatal to extraction.

use crate::browser::BrowserSession;
use crate::error::{PromptError, Result};
use std::time::Duration;

/// A chat page that can receive a prompt
#[derive(Debug, Clone)]
pub struct ChatTarget {
    /// Short name used in logs and errors
    pub name: String,

    /// URL of the chat page
    pub url: String,

    /// CSS selectors probed in order to find the prompt input
    pub input_selectors: Vec<String>,

    /// Whether to attempt a submit by pressing Enter after typing
    pub submit_with_enter: bool,

    /// How long to let the page's scripts settle after load
    pub settle_delay: Duration,
}

impl ChatTarget {
    /// The Google Gemini chat page
    pub fn gemini() -> Self {
        Self {
            name: "gemini".to_string(),
            url: "https://gemini.google.com/app".to_string(),
            input_selectors: vec![
                "rich-textarea [contenteditable=\"true\"]".to_string(),
                ".ql-editor[contenteditable=\"true\"]".to_string(),
                "div[contenteditable=\"true\"][role=\"textbox\"]".to_string(),
                "[contenteditable=\"true\"]".to_string(),
                "textarea".to_string(),
            ],
            submit_with_enter: true,
            settle_delay: Duration::from_secs(3),
        }
    }

    /// Look up a built-in target by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "gemini" => Some(Self::gemini()),
            _ => None,
        }
    }
}

/// Open the chat page in a new tab and type the prompt into its input.
///
/// Fails with [`PromptError::DeliveryFailed`] when no input selector
/// matches or typing fails; the tab is left open either way so the user can
/// finish by hand.
pub fn deliver_prompt(session: &BrowserSession, target: &ChatTarget, prompt: &str) -> Result<()> {
    log::info!("delivering {} chars to {}", prompt.len(), target.name);

    let tab = session.new_tab()?;

    tab.navigate_to(&target.url).map_err(|e| {
        PromptError::NavigationFailed(format!("Failed to navigate to {}: {}", target.url, e))
    })?;

    tab.wait_until_navigated().map_err(|e| {
        PromptError::NavigationFailed(format!("Navigation to {} did not complete: {}", target.url, e))
    })?;

    tab.activate().map_err(|e| {
        PromptError::TabOperationFailed(format!("Failed to activate tab: {}", e))
    })?;

    // Chat pages build their input after load; give their scripts a moment
    std::thread::sleep(target.settle_delay);

    let mut input = None;
    for selector in &target.input_selectors {
        match tab.find_element(selector) {
            Ok(element) => {
                log::debug!("input matched selector {}", selector);
                input = Some(element);
                break;
            }
            Err(e) => log::debug!("selector {} did not match: {}", selector, e),
        }
    }

    let input = input.ok_or_else(|| PromptError::DeliveryFailed {
        target: target.name.clone(),
        reason: "no input element matched any selector".to_string(),
    })?;

    input.click().map_err(|e| PromptError::DeliveryFailed {
        target: target.name.clone(),
        reason: format!("failed to focus input: {}", e),
    })?;

    input.type_into(prompt).map_err(|e| PromptError::DeliveryFailed {
        target: target.name.clone(),
        reason: format!("failed to type prompt: {}", e),
    })?;

    if target.submit_with_enter {
        tab.press_key("Enter").map_err(|e| PromptError::DeliveryFailed {
            target: target.name.clone(),
            reason: format!("failed to submit: {}", e),
        })?;
    }

    log::info!("prompt delivered to {}", target.name);
    Ok(())
}
