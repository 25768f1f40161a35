//! Example data for a fresh environment.
//!
//! Seeding overwrites both artifacts; it never merges with existing data.

use crate::config::DataPaths;
use crate::error::StorageError;
use crate::models::{Answer, Question, Subject};
use crate::storage::file::write_collection;
use crate::storage::{QuestionStore, SubjectStore};
use log::{info, warn};

pub fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject {
            code: "CCPG1052".to_string(),
            name: "PROGRAMACIÓN ORIENTADA A OBJETOS".to_string(),
            level_count: 3,
        },
        Subject {
            code: "CCPG1000".to_string(),
            name: "ÁLGEBRA LINEAL".to_string(),
            level_count: 2,
        },
    ]
}

pub fn sample_questions(subject: &Subject) -> Vec<Question> {
    vec![
        Question::new(
            "¿Cuánto es 2 + 2?",
            2,
            subject.clone(),
            vec![
                Answer::correct("4"),
                Answer::incorrect("5"),
                Answer::incorrect("0"),
                Answer::incorrect("22"),
            ],
        ),
        Question::new(
            "¿Qué es el polimorfismo en programación orientada a objetos?",
            1,
            subject.clone(),
            vec![
                Answer::incorrect("Encapsulación de datos y métodos en una entidad."),
                Answer::correct(
                    "Capacidad de objetos distintos de responder al mismo método de forma diferente.",
                ),
                Answer::incorrect("Combinación de múltiples clases en una jerarquía."),
                Answer::incorrect("Capacidad de una clase para heredar de sí misma."),
            ],
        ),
    ]
}

/// True only for a fresh environment: both stores are empty and neither
/// reported a read failure. Unreadable storage is never seeded over.
pub fn needs_seed(subjects: &SubjectStore, questions: &QuestionStore) -> bool {
    if let Some(e) = subjects.diagnostic().or(questions.diagnostic()) {
        warn!("{e}, not seeding");
        return false;
    }
    subjects.is_empty() && questions.is_empty()
}

/// Overwrites both stores' files with the sample data.
pub fn seed(paths: &DataPaths) -> Result<(), StorageError> {
    let subjects = sample_subjects();
    write_collection(&paths.subjects, &subjects)?;

    let questions = sample_questions(&subjects[0]);
    write_collection(&paths.questions, &questions)?;

    info!(
        "Seeded {} subjects and {} questions",
        subjects.len(),
        questions.len()
    );
    Ok(())
}
