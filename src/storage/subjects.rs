use super::{Collection, EditOutcome};
use crate::error::{ModelError, StorageError};
use crate::models::Subject;
use std::path::PathBuf;

/// Owns the list of subjects and mirrors it to disk after every change.
#[derive(Debug)]
pub struct SubjectStore {
    collection: Collection<Subject>,
}

impl SubjectStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: Collection::open(path),
        }
    }

    pub fn load(&mut self) -> &[Subject] {
        self.collection.load()
    }

    pub fn subjects(&self) -> &[Subject] {
        self.collection.items()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn contains(&self, subject: &Subject) -> bool {
        self.collection.contains(subject)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Subject> {
        self.subjects().iter().find(|s| s.code == code)
    }

    pub fn diagnostic(&self) -> Option<&StorageError> {
        self.collection.diagnostic()
    }

    pub fn add(&mut self, subject: Subject) -> bool {
        self.collection.insert(subject)
    }

    /// Renames `existing` and changes its level count; the code never changes.
    ///
    /// When `existing` is not stored the edited subject is added as new and
    /// [`EditOutcome::Inserted`] is returned. If the edited subject equals one
    /// already stored, the result is [`EditOutcome::Merged`].
    pub fn edit(
        &mut self,
        existing: &Subject,
        name: impl Into<String>,
        level_count: u32,
    ) -> Result<EditOutcome, ModelError> {
        if level_count == 0 {
            return Err(ModelError::ZeroLevels(existing.code.clone()));
        }

        let taken = self.collection.take(existing);
        let found = taken.is_some();
        let mut subject = taken.unwrap_or_else(|| existing.clone());
        subject.name = name.into();
        subject.level_count = level_count;

        let pushed = self.collection.push_unique(subject);
        self.collection.persist();
        Ok(EditOutcome::after_push(found, pushed))
    }

    pub fn remove(&mut self, subject: &Subject) -> Option<Subject> {
        self.collection.remove(subject)
    }
}
