//! File-backed stores for subjects and questions.

pub mod collection;
pub mod file;
pub mod questions;
pub mod subjects;

pub use collection::Collection;
pub use questions::QuestionStore;
pub use subjects::SubjectStore;

/// What an edit did to the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The existing element was found and replaced by its edited version.
    Updated,
    /// The existing element was not stored; the edited version was added as new.
    Inserted,
    /// The edited version equals an element already stored, so only that one remains.
    Merged,
}

impl EditOutcome {
    pub(crate) fn after_push(found: bool, pushed: bool) -> Self {
        match (pushed, found) {
            (false, _) => EditOutcome::Merged,
            (true, true) => EditOutcome::Updated,
            (true, false) => EditOutcome::Inserted,
        }
    }
}
