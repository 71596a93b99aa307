pub mod quiz_composer;
pub mod quiz_service;
pub mod response_service;
pub mod scoring_service;
pub mod stats_service;
pub mod teacher_service;

pub use quiz_composer::QuizComposer;
pub use quiz_service::QuizService;
pub use response_service::ResponseService;
pub use scoring_service::{ScoreResult, ScoringService, UNANSWERED};
pub use stats_service::StatsService;
pub use teacher_service::TeacherService;
