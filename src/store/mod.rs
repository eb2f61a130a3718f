//! # Page Store
//!
//! Persistence for wiki pages behind the [`PageStore`] trait.
//!
//! - [`FileStore`]: one `<title>.txt` file per page under a root directory
//! - [`MemoryStore`]: process-local map, for tests and throwaway wikis
//!
//! Writers are not serialized: two concurrent saves of one title race and
//! the last write wins.

pub mod backend;
pub mod errors;
pub mod local;
pub mod memory;

pub use backend::PageStore;
pub use errors::{StoreError, StoreResult};
pub use local::{FileStore, PAGE_EXTENSION};
pub use memory::MemoryStore;
