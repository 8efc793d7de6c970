use thiserror::Error;

/// Errors produced by snapshot capture, prompt assembly, and delivery.
///
/// Extraction itself never fails: a page with no usable content yields an
/// empty [`crate::extract::ExtractionResult`], not an error.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Failed to launch a browser instance
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser instance
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Tab creation, lookup, or close failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// No element matched a CSS selector
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// JavaScript evaluation in the page failed
    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The injected capture script returned no snapshot or malformed JSON
    #[error("Snapshot capture failed: {0}")]
    SnapshotFailed(String),

    /// Delivering a prompt into a chat page failed
    #[error("Failed to deliver prompt to {target}: {reason}")]
    DeliveryFailed { target: String, reason: String },

    /// The template store is at its capacity
    #[error("Template store is full (maximum {0} templates)")]
    TemplateLimitReached(usize),

    /// A template id was already present in the store
    #[error("Template '{0}' already exists")]
    DuplicateTemplate(String),

    /// No template with the given id
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Filesystem error while loading or saving templates
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`PromptError`]
pub type Result<T> = std::result::Result<T, PromptError>;
