use super::{Collection, EditOutcome};
use crate::error::StorageError;
use crate::export::QuestionBank;
use crate::models::{Answer, Question, Subject, questions_for_subject};
use log::info;
use std::path::PathBuf;

/// Owns the question bank and mirrors it to disk after every change.
///
/// Questions handed out for play should be copied first: rendering and
/// wildcards mutate the question they are given.
#[derive(Debug)]
pub struct QuestionStore {
    collection: Collection<Question>,
}

impl QuestionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: Collection::open(path),
        }
    }

    pub fn load(&mut self) -> &[Question] {
        self.collection.load()
    }

    pub fn questions(&self) -> &[Question] {
        self.collection.items()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn contains(&self, question: &Question) -> bool {
        self.collection.contains(question)
    }

    pub fn diagnostic(&self) -> Option<&StorageError> {
        self.collection.diagnostic()
    }

    pub fn for_subject(&self, subject: &Subject) -> Vec<&Question> {
        questions_for_subject(self.questions(), subject)
    }

    pub fn add(&mut self, question: Question) -> bool {
        self.collection.insert(question)
    }

    /// Replaces text, level and answers of `existing`; the subject is kept.
    ///
    /// When `existing` is not stored the edited question is added as new and
    /// [`EditOutcome::Inserted`] is returned. [`EditOutcome::Merged`] means the
    /// edited question equals one already stored.
    pub fn edit(
        &mut self,
        existing: &Question,
        text: impl Into<String>,
        level: u32,
        answers: Vec<Answer>,
    ) -> EditOutcome {
        let taken = self.collection.take(existing);
        let found = taken.is_some();
        let mut question = taken.unwrap_or_else(|| existing.copy());
        question.text = text.into();
        question.level = level;
        question.answers = answers;

        let pushed = self.collection.push_unique(question);
        self.collection.persist();
        EditOutcome::after_push(found, pushed)
    }

    pub fn remove(&mut self, question: &Question) -> Option<Question> {
        self.collection.remove(question)
    }

    /// Re-tags every question on `old` with `new`. Returns how many changed.
    ///
    /// Questions that become equal to one already stored are dropped.
    pub fn replace_subject(&mut self, old: &Subject, new: &Subject) -> usize {
        let mut changed = 0;
        for question in self.collection.items_mut() {
            if question.subject == *old {
                question.subject = new.clone();
                changed += 1;
            }
        }

        if changed > 0 {
            self.collection.dedup();
        }
        self.collection.persist();
        changed
    }

    /// Adds every question of `bank`, tagged with the bank's subject.
    /// Returns how many were new.
    pub fn import_bank(&mut self, bank: QuestionBank) -> usize {
        let QuestionBank { subject, questions } = bank;
        let mut added = 0;
        for mut question in questions {
            question.subject = subject.clone();
            if self.collection.push_unique(question) {
                added += 1;
            }
        }
        info!("Imported {added} questions for {subject}");
        self.collection.persist();
        added
    }
}
