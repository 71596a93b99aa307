pub mod quiz_repository;
pub mod response_repository;
pub mod teacher_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use response_repository::{MongoResponseRepository, ResponseRepository};
pub use teacher_repository::{MongoTeacherRepository, TeacherRepository};
