pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod seed;
pub mod storage;

pub use config::DataPaths;
pub use error::{ModelError, StorageError};
pub use models::{Answer, AnswerKind, Question, Subject, Wildcard};
pub use storage::{EditOutcome, QuestionStore, SubjectStore};
