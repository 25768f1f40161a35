//! Question is a quiz item: text, difficulty level, subject and answer options.
//!
//! Equality compares text, level, subject and answers (order-sensitive).
//! `wildcard_used` is play-session state: it is never persisted and never
//! takes part in equality.

use super::{Answer, Subject, Wildcard};
use crate::error::ModelError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub level: u32,
    pub subject: Subject,
    pub answers: Vec<Answer>,
    #[serde(skip)]
    wildcard_used: Option<Wildcard>,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        level: u32,
        subject: Subject,
        answers: Vec<Answer>,
    ) -> Self {
        Self {
            text: text.into(),
            level,
            subject,
            answers,
            wildcard_used: None,
        }
    }

    /// Copy for presentation: a fresh answer list, no wildcard recorded.
    /// Shuffling or applying a wildcard to the copy leaves `self` untouched.
    pub fn copy(&self) -> Self {
        Self::new(
            self.text.clone(),
            self.level,
            self.subject.clone(),
            self.answers.clone(),
        )
    }

    pub fn wildcard_used(&self) -> Option<Wildcard> {
        self.wildcard_used
    }

    /// Removes up to `n` incorrect answers, scanning in current order.
    /// Remaining answers keep their relative order. Returns how many were removed.
    pub fn remove_incorrect_answers(&mut self, n: usize) -> usize {
        let mut removed = 0;
        self.answers.retain(|answer| {
            if removed < n && !answer.is_correct() {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    /// Applies `wildcard` unless one was already used on this instance.
    pub fn use_wildcard(&mut self, wildcard: Wildcard) -> Result<usize, ModelError> {
        if self.wildcard_used.is_some() {
            return Err(ModelError::WildcardAlreadyUsed);
        }
        let removed = wildcard.apply(self);
        self.wildcard_used = Some(wildcard);
        Ok(removed)
    }

    /// Shuffles the answers in place, then formats the question.
    ///
    /// Call this on a [`Question::copy`] when the stored order must survive.
    pub fn render<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        self.answers.shuffle(rng);
        self.to_string()
    }
}

/// Letter label for the answer at `index`: A, B, C, ...
fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

/// Formats the answers in their current order; no shuffling.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Question:")?;
        writeln!(f, "{}", self.text)?;
        writeln!(f, "Answer options:")?;
        for (i, answer) in self.answers.iter().enumerate() {
            writeln!(f, "{}. {}", option_label(i), answer)?;
        }
        Ok(())
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && self.text == other.text
            && self.subject == other.subject
            && self.answers == other.answers
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.level.hash(state);
        self.subject.hash(state);
        self.answers.hash(state);
    }
}

/// Questions from `all` tagged with `subject`, in their original order.
pub fn questions_for_subject<'a>(all: &'a [Question], subject: &Subject) -> Vec<&'a Question> {
    all.iter().filter(|q| q.subject == *subject).collect()
}
