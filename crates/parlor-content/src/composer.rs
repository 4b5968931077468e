//! Prompt composition.

use parlor_core::error::DomainError;

use crate::kind::ContentKind;
use crate::templates::TemplateStore;

/// Name of the one file-backed template.
const THEME_SELECTION_TEMPLATE: &str = "theme_selection";

/// Builds the provider instruction for a (content kind, theme) pair.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    templates: TemplateStore,
}

impl PromptComposer {
    /// Creates a composer backed by the given template store.
    #[must_use]
    pub fn new(templates: TemplateStore) -> Self {
        Self { templates }
    }

    /// Composes the full instruction string for `kind`, with `theme`
    /// substituted verbatim.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` only for the file-backed
    /// `ThemeSelection` kind, when its template cannot be loaded.
    pub fn compose(&self, kind: ContentKind, theme: &str) -> Result<String, DomainError> {
        match kind.instruction() {
            Some(template) => Ok(template.replace("{theme}", theme)),
            None => self.templates.render(THEME_SELECTION_TEMPLATE, theme),
        }
    }
}
