//! # Page Entity

use std::borrow::Cow;

use super::title::Title;

/// A wiki page as held for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: Title,
    body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// Page with no content, shown when editing a title that was never saved
    pub fn empty(title: Title) -> Self {
        Self::new(title, Vec::new())
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
