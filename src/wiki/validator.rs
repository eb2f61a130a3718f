//! # Title Validator
//!
//! Matches a whole request path against `^/(<op>|...)/([A-Za-z0-9]+)$` and
//! hands back the title. The pattern is compiled once from the operation
//! prefixes the dispatcher registers.

use regex::Regex;

use super::errors::{WikiError, WikiResult};
use super::title::Title;

/// Operation prefixes served by a default wiki
pub const DEFAULT_OPERATIONS: [&str; 3] = ["edit", "save", "view"];

/// Extracts validated titles from `/<op>/<title>` paths
#[derive(Debug, Clone)]
pub struct TitleValidator {
    pattern: Regex,
    operations: Vec<String>,
}

impl TitleValidator {
    /// Build a validator accepting the given operation prefixes
    pub fn new<I, S>(operations: I) -> WikiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let operations: Vec<String> = operations.into_iter().map(Into::into).collect();

        if operations.is_empty() {
            return Err(WikiError::InvalidOperation(String::new()));
        }
        if let Some(bad) = operations.iter().find(|op| !Title::is_valid(op)) {
            return Err(WikiError::InvalidOperation(bad.clone()));
        }

        let alternation = operations
            .iter()
            .map(|op| regex::escape(op))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("^/({})/([A-Za-z0-9]+)$", alternation))
            .map_err(|e| WikiError::InvalidOperation(e.to_string()))?;

        Ok(Self {
            pattern,
            operations,
        })
    }

    /// Extract the title from a request path
    pub fn extract_title(&self, path: &str) -> WikiResult<Title> {
        self.extract(path).map(|(_, title)| title)
    }

    /// Extract both the operation prefix and the title from a request path
    pub fn extract<'p>(&self, path: &'p str) -> WikiResult<(&'p str, Title)> {
        let caps = self
            .pattern
            .captures(path)
            .ok_or_else(|| WikiError::InvalidTitle(path.to_string()))?;

        let op = caps.get(1).map_or("", |m| m.as_str());
        let title = Title::parse(caps.get(2).map_or("", |m| m.as_str()))?;
        Ok((op, title))
    }

    pub fn operations(&self) -> &[String] {
        &self.operations
    }
}
