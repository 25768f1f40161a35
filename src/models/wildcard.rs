//! Wildcards are gameplay aids applied to a question before it is shown.
//!
//! A wildcard only ever touches the answers of the question it is given, so
//! during play it should be applied to a [`Question::copy`] rather than to a
//! question held by the store.

use super::Question;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wildcard {
    /// Removes up to `removals` incorrect answers.
    FiftyFifty { removals: usize },
}

impl Wildcard {
    pub const FIFTY_FIFTY_REMOVALS: usize = 2;

    pub fn fifty_fifty() -> Self {
        Wildcard::FiftyFifty {
            removals: Self::FIFTY_FIFTY_REMOVALS,
        }
    }

    /// Mutates `question` in place and returns how many answers were removed.
    pub fn apply(self, question: &mut Question) -> usize {
        match self {
            Wildcard::FiftyFifty { removals } => question.remove_incorrect_answers(removals),
        }
    }
}

impl Default for Wildcard {
    fn default() -> Self {
        Self::fifty_fifty()
    }
}
