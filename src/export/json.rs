//! JSON import/export of a single subject's question bank.
//! Used to move questions between installations; the main stores keep their own files.

use crate::error::StorageError;
use crate::models::{Question, Subject, questions_for_subject};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One subject together with the questions tagged with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub subject: Subject,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Collects the questions of `subject` from `all`, keeping their order.
    pub fn from_questions(subject: Subject, all: &[Question]) -> Self {
        let questions = questions_for_subject(all, &subject)
            .into_iter()
            .cloned()
            .collect();
        Self { subject, questions }
    }
}

/// Writes `bank` as pretty JSON, replacing whatever is at `path`.
pub fn export_bank(bank: &QuestionBank, path: &Path) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(bank).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Exported {} questions for {} to {}",
        bank.questions.len(),
        bank.subject,
        path.display()
    );
    Ok(())
}

/// Reads a bank written by [`export_bank`].
///
/// Unlike the stores, a missing file is an error here: an import names a
/// file that is expected to exist.
pub fn import_bank(path: &Path) -> Result<QuestionBank, StorageError> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bank: QuestionBank =
        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Read {} questions for {} from {}",
        bank.questions.len(),
        bank.subject,
        path.display()
    );
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;
    use crate::storage::{QuestionStore, SubjectStore};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn poo() -> Subject {
        Subject::new("CCPG1052", "PROGRAMACIÓN ORIENTADA A OBJETOS", 3).unwrap()
    }

    fn create_test_bank() -> QuestionBank {
        let all = vec![
            Question::new(
                "¿Cuánto es 2+2?",
                2,
                poo(),
                vec![Answer::correct("4"), Answer::incorrect("5")],
            ),
            Question::new(
                "det(I)?",
                1,
                Subject::new("CCPG1000", "ÁLGEBRA LINEAL", 2).unwrap(),
                vec![Answer::correct("1")],
            ),
        ];
        QuestionBank::from_questions(poo(), &all)
    }

    fn temp_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_from_questions_filters_by_subject() {
        let bank = create_test_bank();

        assert_eq!(bank.questions.len(), 1);
        assert_eq!(bank.questions[0].text, "¿Cuánto es 2+2?");
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = temp_file(&dir, "bank.json");
        let original = create_test_bank();

        export_bank(&original, &test_file).unwrap();

        let imported = import_bank(&test_file).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_bank(&temp_file(&dir, "nonexistent_bank.json"));
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = temp_file(&dir, "invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_bank(&test_file);
        assert!(matches!(result, Err(StorageError::Decode { .. })));
    }

    #[test]
    fn test_import_into_stores() {
        let dir = tempfile::tempdir().unwrap();
        let mut bank = create_test_bank();
        // A question tagged with a stale copy of the subject gets re-tagged.
        let mut stale = bank.questions[0].copy();
        stale.text = "¿Qué es un objeto?".to_string();
        stale.subject.name = "POO".to_string();
        bank.questions.push(stale);

        let mut subjects = SubjectStore::open(dir.path().join("materias.json"));
        let mut questions = QuestionStore::open(dir.path().join("preguntas.json"));
        subjects.add(bank.subject.clone());

        assert_eq!(questions.import_bank(bank.clone()), 2);
        assert_eq!(questions.import_bank(bank), 0);
        assert_eq!(questions.for_subject(&poo()).len(), 2);
        assert_eq!(subjects.subjects(), &[poo()]);
    }
}
