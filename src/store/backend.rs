//! # Page Store Trait

use super::errors::StoreResult;
use crate::wiki::{Page, Title};

/// Backend trait for page persistence
///
/// Implementations receive only validated titles; mapping a [`Title`] to a
/// storage location must be injective and must stay inside the backend's
/// namespace.
pub trait PageStore: Send + Sync + std::fmt::Debug {
    /// Read the page stored under `title`.
    ///
    /// Fails with [`StoreError::NotExist`](super::StoreError::NotExist) when
    /// nothing has been saved under that title.
    fn load(&self, title: &Title) -> StoreResult<Page>;

    /// Write `body` under `title`, replacing any previous content
    fn save(&self, title: &Title, body: &[u8]) -> StoreResult<()>;
}
