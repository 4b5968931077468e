//! File-backed template store.
//!
//! Templates are plain text files with `{{theme}}` placeholders, rendered
//! with minijinja. Files are read per call, matching the original
//! authoring workflow where prompt files are edited without a restart.

use std::path::PathBuf;

use minijinja::{Environment, context};

use parlor_core::error::DomainError;

/// Loads and renders prompt templates from a directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Renders `<dir>/<name>.prompt` with the given theme.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read or
    /// the template fails to render.
    pub fn render(&self, name: &str, theme: &str) -> Result<String, DomainError> {
        let path = self.dir.join(format!("{name}.prompt"));
        let source = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::Infrastructure(format!("cannot read template {}: {e}", path.display()))
        })?;

        let env = Environment::new();
        env.render_str(&source, context! { theme })
            .map_err(|e| DomainError::Infrastructure(format!("template {name} failed: {e}")))
    }
}
