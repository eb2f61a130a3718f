//! # In-Memory Store

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::PageStore;
use super::errors::{StoreError, StoreResult};
use crate::wiki::{Page, Title};

/// Pages held in a process-local map; contents vanish on drop
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: RwLock<HashMap<Title, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pages, counted through a poisoned lock too
    pub fn len(&self) -> usize {
        match self.pages.read() {
            Ok(pages) => pages.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PageStore for MemoryStore {
    fn load(&self, title: &Title) -> StoreResult<Page> {
        let pages = self
            .pages
            .read()
            .map_err(|_| StoreError::io(title.as_str(), lock_poisoned()))?;
        pages
            .get(title)
            .map(|body| Page::new(title.clone(), body.clone()))
            .ok_or_else(|| StoreError::NotExist(title.to_string()))
    }

    fn save(&self, title: &Title, body: &[u8]) -> StoreResult<()> {
        let mut pages = self
            .pages
            .write()
            .map_err(|_| StoreError::io(title.as_str(), lock_poisoned()))?;
        pages.insert(title.clone(), body.to_vec());
        Ok(())
    }
}

fn lock_poisoned() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, "page map lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_save_load() {
        let store = MemoryStore::new();
        let title = Title::parse("Mem").unwrap();

        assert!(store.load(&title).unwrap_err().is_not_exist());

        store.save(&title, b"in memory").unwrap();
        assert_eq!(store.load(&title).unwrap().body(), b"in memory");
    }

    #[test]
    fn test_repeated_save_keeps_one_entry() {
        let store = MemoryStore::new();
        let title = Title::parse("Twice").unwrap();

        store.save(&title, b"same").unwrap();
        store.save(&title, b"same").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(&title).unwrap().body(), b"same");
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let store = Arc::new(MemoryStore::new());
        store.save(&Title::parse("Kept").unwrap(), b"kept").unwrap();

        let poisoner = Arc::clone(&store);
        let result = thread::spawn(move || {
            let _guard = poisoner.pages.write().unwrap();
            panic!("poison the page map");
        })
        .join();
        assert!(result.is_err());
        assert!(store.pages.is_poisoned());

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(store.load(&Title::parse("Kept").unwrap()).is_err());
    }
}
