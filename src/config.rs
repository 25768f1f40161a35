//! Locations of the persisted collections.

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "archivo";
pub const SUBJECTS_FILE: &str = "materias.json";
pub const QUESTIONS_FILE: &str = "preguntas.json";

/// Overrides [`DEFAULT_DATA_DIR`] when set.
pub const DATA_DIR_ENV: &str = "TRIVIA_DATA_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub subjects: PathBuf,
    pub questions: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            subjects: dir.join(SUBJECTS_FILE),
            questions: dir.join(QUESTIONS_FILE),
        }
    }

    /// Reads `TRIVIA_DATA_DIR`, falling back to the hard-coded defaults.
    pub fn from_env() -> Self {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(dir),
            _ => Self::default(),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}
