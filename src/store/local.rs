//! # Local Filesystem Store

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::backend::PageStore;
use super::errors::{StoreError, StoreResult};
use crate::wiki::{Page, Title};

/// File extension for stored pages
pub const PAGE_EXTENSION: &str = "txt";

/// Stores each page as `<root>/<title>.txt`
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { root: root.into() };
        store.ensure_root()?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a page is stored in.
    ///
    /// A title is ASCII alphanumerics only, so the result is always a direct
    /// child of the root and distinct titles never share a file.
    pub fn page_path(&self, title: &Title) -> PathBuf {
        self.root
            .join(format!("{}.{}", title.as_str(), PAGE_EXTENSION))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        if self.root.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Root {
            path: self.root.clone(),
            source,
        })
    }
}

impl PageStore for FileStore {
    fn load(&self, title: &Title) -> StoreResult<Page> {
        let body = fs::read(self.page_path(title))
            .map_err(|e| StoreError::from_read(title.as_str(), e))?;
        Ok(Page::new(title.clone(), body))
    }

    fn save(&self, title: &Title, body: &[u8]) -> StoreResult<()> {
        // The root may have been removed since open.
        self.ensure_root()?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(self.page_path(title))
            .map_err(|e| StoreError::io(title.as_str(), e))?;
        file.write_all(body)
            .map_err(|e| StoreError::io(title.as_str(), e))
    }
}
