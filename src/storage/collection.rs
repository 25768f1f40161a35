//! In-memory collection mirrored to a single file.
//!
//! The `Vec` is the source of truth; the file is rewritten in full after
//! every mutation. Storage failures never reach the caller of a mutation:
//! they are logged and kept as the collection's diagnostic until the next
//! successful load or save.

use super::file::{read_collection, write_collection};
use crate::error::StorageError;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Collection<T> {
    path: PathBuf,
    items: Vec<T>,
    diagnostic: Option<StorageError>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    /// Creates the collection and loads whatever is stored at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut collection = Self {
            path: path.into(),
            items: Vec::new(),
            diagnostic: None,
        };
        collection.load();
        collection
    }

    /// Replaces the in-memory items with the stored ones.
    ///
    /// Missing, empty, unreadable and corrupt storage all leave the
    /// collection empty; only the last two are recorded as a diagnostic.
    pub fn load(&mut self) -> &[T] {
        match read_collection(&self.path) {
            Ok(items) => {
                info!("Loaded {} records from {}", items.len(), self.path.display());
                self.items = items;
                self.diagnostic = None;
            }
            Err(e) if e.is_no_data() => {
                debug!("{e}, starting empty");
                self.items.clear();
                self.diagnostic = None;
            }
            Err(e) => {
                warn!("{e}, starting empty");
                self.items.clear();
                self.diagnostic = Some(e);
            }
        }
        &self.items
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Last storage failure, if the most recent load or save failed.
    pub fn diagnostic(&self) -> Option<&StorageError> {
        self.diagnostic.as_ref()
    }

    /// Adds `item` unless an equal one exists, then persists either way.
    /// Returns whether the item was inserted.
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = self.push_unique(item);
        self.persist();
        inserted
    }

    /// Removes the element equal to `item`, then persists either way.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let removed = self.take(item);
        self.persist();
        removed
    }

    /// Rewrites the file with the current items. Returns `false` on failure.
    pub fn persist(&mut self) -> bool {
        match write_collection(&self.path, &self.items) {
            Ok(()) => {
                debug!("Saved {} records to {}", self.items.len(), self.path.display());
                self.diagnostic = None;
                true
            }
            Err(e) => {
                warn!("{e}");
                self.diagnostic = Some(e);
                false
            }
        }
    }

    pub(crate) fn push_unique(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub(crate) fn take(&mut self, item: &T) -> Option<T> {
        let index = self.items.iter().position(|existing| existing == item)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Drops later duplicates left behind by in-place edits, keeping order.
    pub(crate) fn dedup(&mut self) {
        for item in std::mem::take(&mut self.items) {
            self.push_unique(item);
        }
    }
}
