//! Answer is one option of a question, tagged correct or incorrect
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerKind {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    text: String,
    kind: AnswerKind,
}

impl Answer {
    pub fn new(text: impl Into<String>, kind: AnswerKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, AnswerKind::Correct)
    }

    pub fn incorrect(text: impl Into<String>) -> Self {
        Self::new(text, AnswerKind::Incorrect)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> AnswerKind {
        self.kind
    }

    pub fn is_correct(&self) -> bool {
        self.kind == AnswerKind::Correct
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_creation() {
        let answer = Answer::correct("4");

        assert_eq!(answer.text(), "4");
        assert_eq!(answer.kind(), AnswerKind::Correct);
        assert!(answer.is_correct());
        assert!(!Answer::incorrect("5").is_correct());
    }

    #[test]
    fn test_kind_is_part_of_equality() {
        assert_eq!(Answer::incorrect("22"), Answer::new("22", AnswerKind::Incorrect));
        assert_ne!(Answer::incorrect("22"), Answer::correct("22"));
    }
}
