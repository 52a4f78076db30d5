//! This module provides the `DescriptionLoader` struct, responsible for
//! loading machine descriptions from files and strings.

use crate::parser::{parse, Description};
use crate::types::NtmError;
use std::fs;
use std::path::Path;

/// `DescriptionLoader` is a utility struct for loading machine descriptions.
pub struct DescriptionLoader;

impl DescriptionLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the description file.
    ///
    /// # Returns
    ///
    /// * `Ok(Description)` if the file is successfully read and parsed.
    /// * `Err(NtmError::FileError)` if the file cannot be read.
    /// * `Err(NtmError::ParseError)` if the content is not a valid description.
    pub fn load_description(path: &Path) -> Result<Description, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a machine description from the provided string content.
    ///
    /// This is useful for descriptions that are not stored in files, e.g.
    /// piped input or embedded demos.
    pub fn load_description_from_str(content: &str) -> Result<Description, NtmError> {
        parse(content)
    }
}
