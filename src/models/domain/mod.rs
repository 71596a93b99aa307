pub mod quiz;
pub mod response;
pub mod teacher;

pub use quiz::{Passage, Question, Quiz};
pub use response::QuizResponse;
pub use teacher::{Subject, Teacher};
