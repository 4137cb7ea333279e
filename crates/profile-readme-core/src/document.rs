use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::items::Item;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Intro paragraph followed by an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    intro: String,
    items: Vec<Item>,
}

impl Document {
    pub fn new(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(self.intro.clone());
        lines.extend(self.items.iter().map(Item::markdown));
        lines.join("\n")
    }

    /// Writes the rendered document, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), DocumentError> {
        let rendered = self.render();
        fs::write(path, rendered.as_bytes()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            target: "profile_readme_core",
            path = %path.display(),
            bytes = rendered.len(),
            "wrote document"
        );
        Ok(())
    }
}
