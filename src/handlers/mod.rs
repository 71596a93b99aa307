pub mod auth_handler;
pub mod quiz_handler;
pub mod response_handler;

pub use auth_handler::{health_check, health_check_ready, login, logout, register, verify};
pub use quiz_handler::{create_quiz, delete_quiz, get_student_quiz, list_quizzes};
pub use response_handler::{
    all_responses, correction, quiz_stats, responses_for_quiz, student_details, submit_response,
};
