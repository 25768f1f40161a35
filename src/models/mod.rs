pub mod answer;
pub mod question;
pub mod subject;
pub mod wildcard;

pub use answer::{Answer, AnswerKind};
pub use question::{Question, questions_for_subject};
pub use subject::Subject;
pub use wildcard::Wildcard;
