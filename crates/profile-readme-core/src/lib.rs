use std::{fs, io::ErrorKind, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

pub mod badge;
pub mod document;
pub mod items;
pub mod markdown;
pub mod profile;
pub mod settings;

pub use document::{Document, DocumentError};
pub use items::{Header, Item, SimpleIcon};
pub use profile::{profile_document, profile_items};
pub use settings::GeneratorConfig;

/// State of an existing output file compared with a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Renders the profile and writes it to the configured output path.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    let document = profile_document();
    debug!(
        target: "profile_readme_core",
        items = document.items().len(),
        "rendering profile document"
    );
    document.write_to(&config.output)?;
    info!(
        target: "profile_readme_core",
        output = %config.output.display(),
        "profile README written"
    );
    Ok(config.output.clone())
}

pub fn check(config: &GeneratorConfig) -> Result<CheckOutcome> {
    let existing = match fs::read(&config.output) {
        Ok(contents) => contents,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read {}", config.output.display()));
        }
    };

    let outcome = if existing == profile_document().render().into_bytes() {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Stale
    };
    debug!(
        target: "profile_readme_core",
        output = %config.output.display(),
        outcome = ?outcome,
        "checked existing README"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_then_check_is_up_to_date() {
        let dir = tempdir().expect("tempdir");
        let config = GeneratorConfig::default().with_output(dir.path().join("README.md"));

        let written = generate(&config).expect("generate succeeds");
        assert_eq!(written, config.output);
        assert_eq!(check(&config).expect("check runs"), CheckOutcome::UpToDate);
    }

    #[test]
    fn check_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let config = GeneratorConfig::default().with_output(dir.path().join("README.md"));
        assert_eq!(check(&config).expect("check runs"), CheckOutcome::Missing);
    }

    #[test]
    fn check_reports_edited_file_as_stale() {
        let dir = tempdir().expect("tempdir");
        let config = GeneratorConfig::default().with_output(dir.path().join("README.md"));
        generate(&config).expect("generate succeeds");
        fs::write(&config.output, "hand edited").expect("overwrite");

        assert_eq!(check(&config).expect("check runs"), CheckOutcome::Stale);
    }

    #[test]
    fn check_reports_non_utf8_file_as_stale() {
        let dir = tempdir().expect("tempdir");
        let config = GeneratorConfig::default().with_output(dir.path().join("README.md"));
        fs::write(&config.output, [0xff, 0xfe, b'#']).expect("write invalid utf-8");

        assert_eq!(check(&config).expect("check runs"), CheckOutcome::Stale);
    }

    #[test]
    fn generate_into_missing_directory_fails() {
        let dir = tempdir().expect("tempdir");
        let config =
            GeneratorConfig::default().with_output(dir.path().join("nope").join("README.md"));

        let error = generate(&config).expect_err("generate should fail");
        assert!(error.downcast_ref::<DocumentError>().is_some());
    }
}
