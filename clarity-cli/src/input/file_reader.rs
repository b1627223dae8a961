//! File and stdin reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of a reader as UTF-8 text
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input stream")?;
        Ok(content)
    }

    /// Read a file, or stdin when no path is given
    pub fn read_input(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Self::read_text(path),
            None => {
                log::debug!("Reading text from stdin");
                Self::read_from(io::stdin().lock())
            }
        }
    }
}
