use std::sync::Arc;

use crate::{
    auth::{require_quiz_owner, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{request::CreateQuizRequest, response::StudentQuizDto},
    },
    repositories::{QuizRepository, ResponseRepository},
    services::QuizComposer,
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, responses: Arc<dyn ResponseRepository>) -> Self {
        Self { quizzes, responses }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest, owner: &Claims) -> AppResult<Quiz> {
        let quiz = QuizComposer::compose(request, owner)?;
        let quiz = self.quizzes.insert(quiz).await?;
        log::info!(
            "Teacher {} created quiz '{}' with {} questions",
            owner.sub,
            quiz.title,
            quiz.questions.len()
        );
        Ok(quiz)
    }

    pub async fn list_own(&self, owner: &Claims) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_by_teacher(&owner.sub).await
    }

    pub async fn get_owned(&self, quiz_id: &str, owner: &Claims) -> AppResult<Quiz> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;
        require_quiz_owner(owner, &quiz)?;
        Ok(quiz)
    }

    /// The student-facing fetch; the answer key is stripped before anything
    /// crosses the trust boundary.
    pub async fn get_for_student(&self, share_id: &str) -> AppResult<StudentQuizDto> {
        let quiz = self
            .quizzes
            .find_by_share_id(share_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        Ok(StudentQuizDto::from(&quiz))
    }

    /// Deletes a quiz and, in bulk, every response referencing it.
    pub async fn delete_quiz(&self, quiz_id: &str, owner: &Claims) -> AppResult<()> {
        let quiz = self.get_owned(quiz_id, owner).await?;

        let removed = self.responses.delete_by_quiz(&quiz.id).await?;
        self.quizzes.delete(&quiz.id).await?;

        log::info!(
            "Deleted quiz '{}' and {} associated responses",
            quiz.title,
            removed
        );
        Ok(())
    }
}
