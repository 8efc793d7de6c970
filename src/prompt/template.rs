use crate::error::{PromptError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of stored templates
pub const MAX_TEMPLATES: usize = 5;

/// Default analysis instructions appended to every prompt when the user has
/// not configured a template of their own.
pub const DEFAULT_PROMPT_TEXT: &str = "\
## Analysis instructions

Read the page content above in full, then answer:

1. What is the page about as a whole? Identify the main theme and how the
   author develops it into subordinate topics.
2. What is said in detail, and how? Find the key ideas, claims, and
   arguments that make up the author's message.
3. Is it sound - entirely, or only in part? Check whether the author's
   knowledge is lacking or mistaken, the logic flawed, or the analysis
   incomplete.
4. What of it? Explain what the information means for the reader and what
   deeper implications or suggestions are worth taking away.

Answer in a clear, structured form with explicit conclusions.";

/// A user-configurable prompt template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptTemplate {
    /// Stable identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Instructions appended after the extracted page content
    pub prompt_text: String,

    /// Whether this is the template currently in use
    #[serde(default)]
    pub is_active: bool,
}

impl PromptTemplate {
    /// Create a new inactive template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prompt_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prompt_text: prompt_text.into(),
            is_active: false,
        }
    }

    /// The built-in default template
    pub fn default_template() -> Self {
        Self {
            id: "default".to_string(),
            name: "Deep reading analysis".to_string(),
            prompt_text: DEFAULT_PROMPT_TEXT.to_string(),
            is_active: true,
        }
    }
}

/// Insertion-ordered store of at most [`MAX_TEMPLATES`] prompt templates.
///
/// Exactly one template is active while the store is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStore {
    templates: IndexMap<String, PromptTemplate>,
}

impl TemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { templates: IndexMap::new() }
    }

    /// Create a store holding the built-in default template
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store
            .add(PromptTemplate::default_template())
            .unwrap_or_else(|_| unreachable!("empty store accepts one template"));
        store
    }

    /// Number of stored templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate templates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PromptTemplate> {
        self.templates.values()
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.get(id)
    }

    /// The currently active template, if any
    pub fn active(&self) -> Option<&PromptTemplate> {
        self.templates.values().find(|t| t.is_active)
    }

    /// Add a template.
    ///
    /// The first template added becomes active. Fails when the store is full
    /// or the id is already taken.
    pub fn add(&mut self, mut template: PromptTemplate) -> Result<()> {
        if self.templates.len() >= MAX_TEMPLATES {
            return Err(PromptError::TemplateLimitReached(MAX_TEMPLATES));
        }
        if self.templates.contains_key(&template.id) {
            return Err(PromptError::DuplicateTemplate(template.id));
        }

        if self.templates.is_empty() {
            template.is_active = true;
        } else if template.is_active {
            self.clear_active();
        }

        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Replace the name and text of an existing template
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        prompt_text: impl Into<String>,
    ) -> Result<()> {
        let template = self
            .templates
            .get_mut(id)
            .ok_or_else(|| PromptError::TemplateNotFound(id.to_string()))?;
        template.name = name.into();
        template.prompt_text = prompt_text.into();
        Ok(())
    }

    /// Remove a template; if it was active, the first remaining template
    /// becomes active.
    pub fn remove(&mut self, id: &str) -> Result<PromptTemplate> {
        // shift_remove keeps the display order of the remaining templates
        let removed = self
            .templates
            .shift_remove(id)
            .ok_or_else(|| PromptError::TemplateNotFound(id.to_string()))?;

        if removed.is_active {
            if let Some(first) = self.templates.values_mut().next() {
                first.is_active = true;
            }
        }
        Ok(removed)
    }

    /// Mark the given template as active and all others inactive
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        if !self.templates.contains_key(id) {
            return Err(PromptError::TemplateNotFound(id.to_string()));
        }
        for template in self.templates.values_mut() {
            template.is_active = template.id == id;
        }
        Ok(())
    }

    fn clear_active(&mut self) {
        for template in self.templates.values_mut() {
            template.is_active = false;
        }
    }

    /// Load a store from a JSON file written by [`Self::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let templates: Vec<PromptTemplate> = serde_json::from_str(&json)?;

        let mut store = Self::new();
        for template in templates {
            store.add(template)?;
        }
        Ok(store)
    }

    /// Save the store as a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let templates: Vec<&PromptTemplate> = self.templates.values().collect();
        let json = serde_json::to_string_pretty(&templates)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
