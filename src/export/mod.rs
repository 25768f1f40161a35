pub mod json;

pub use json::{QuestionBank, export_bank, import_bank};
