use trivia_store::*;

use rand::thread_rng;

fn main() -> Result<(), StorageError> {
    pretty_env_logger::init();

    let paths = DataPaths::from_env();
    let mut subjects = SubjectStore::open(&paths.subjects);
    let mut questions = QuestionStore::open(&paths.questions);

    if seed::needs_seed(&subjects, &questions) {
        seed::seed(&paths)?;
        subjects.load();
        questions.load();
        println!("Sample data created!");
    }

    println!("Loaded {} subjects from {}", subjects.len(), paths.subjects.display());
    for subject in subjects.subjects() {
        println!(
            "  - {} {} ({} levels, {} questions)",
            subject,
            subject.name,
            subject.level_count,
            questions.for_subject(subject).len()
        );
    }

    if let Some(stored) = questions.questions().first() {
        let mut shown = stored.copy();
        if let Ok(removed) = shown.use_wildcard(Wildcard::fifty_fifty()) {
            println!("\n50/50 removed {removed} answers:");
        }
        print!("{}", shown.render(&mut thread_rng()));
    }

    Ok(())
}
