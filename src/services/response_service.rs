use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{require_quiz_owner, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizResponse},
        dto::{
            request::SubmitResponseRequest,
            response::{
                response_summary, CorrectionDto, QuizResponsesDto, QuizStats, QuizSummaryDto,
                SubmitResultDto,
            },
        },
    },
    repositories::{QuizRepository, ResponseRepository},
    services::{ScoringService, StatsService},
};

pub struct ResponseService {
    quizzes: Arc<dyn QuizRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl ResponseService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, responses: Arc<dyn ResponseRepository>) -> Self {
        Self { quizzes, responses }
    }

    /// Scores a submission against the quiz behind the share token and
    /// persists one immutable response document.
    pub async fn submit(
        &self,
        share_id: &str,
        request: SubmitResponseRequest,
    ) -> AppResult<SubmitResultDto> {
        request.validate()?;

        let quiz = self
            .quizzes
            .find_by_share_id(share_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let result = ScoringService::score(&quiz, &request.answers)?;

        let response = QuizResponse::new(
            request.student_name.trim(),
            &quiz.id,
            request.answers,
            result.score,
            result.total_questions,
            request.time_spent,
        );
        let response = self.responses.insert(response).await?;

        Ok(SubmitResultDto {
            message: "Quiz submitted successfully".to_string(),
            score: result.score,
            total_questions: result.total_questions,
            percentage: result.percentage,
            correction_id: response.correction_id,
        })
    }

    /// Self-service correction view; the token itself is the capability, no
    /// identity is checked.
    pub async fn correction(&self, correction_id: &str) -> AppResult<CorrectionDto> {
        let response = self
            .responses
            .find_by_correction_id(correction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Correction not found".to_string()))?;

        let quiz = self.quiz_for(&response).await?;
        self.correction_detail(&quiz, &response)
    }

    /// Teacher-only detail view for one response; requires ownership of the
    /// parent quiz.
    pub async fn student_detail(
        &self,
        response_id: &str,
        owner: &Claims,
    ) -> AppResult<CorrectionDto> {
        let response = self
            .responses
            .find_by_id(response_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Response not found".to_string()))?;

        let quiz = self.quiz_for(&response).await?;
        require_quiz_owner(owner, &quiz)?;

        self.correction_detail(&quiz, &response)
    }

    /// Responses for one owned quiz, newest first, with the quiz header.
    pub async fn responses_for_quiz(
        &self,
        quiz_id: &str,
        owner: &Claims,
    ) -> AppResult<QuizResponsesDto> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;
        require_quiz_owner(owner, &quiz)?;

        let responses = self.responses.list_by_quiz(&quiz.id).await?;

        Ok(QuizResponsesDto {
            quiz: QuizSummaryDto::from(&quiz),
            responses: responses
                .iter()
                .map(|r| response_summary(r, StatsService::rounded_percentage(r)))
                .collect(),
        })
    }

    /// All responses across the teacher's quizzes, grouped by quiz id.
    pub async fn all_responses(
        &self,
        owner: &Claims,
    ) -> AppResult<HashMap<String, QuizResponsesDto>> {
        let quizzes = self.quizzes.list_by_teacher(&owner.sub).await?;
        let quiz_ids: Vec<String> = quizzes.iter().map(|q| q.id.clone()).collect();

        let responses = self.responses.list_by_quiz_ids(&quiz_ids).await?;

        let mut grouped: HashMap<String, QuizResponsesDto> = quizzes
            .iter()
            .map(|quiz| {
                (
                    quiz.id.clone(),
                    QuizResponsesDto {
                        quiz: QuizSummaryDto::from(quiz),
                        responses: Vec::new(),
                    },
                )
            })
            .collect();

        for response in &responses {
            if let Some(entry) = grouped.get_mut(&response.quiz_id) {
                entry
                    .responses
                    .push(response_summary(response, StatsService::rounded_percentage(response)));
            }
        }

        Ok(grouped)
    }

    pub async fn stats(&self, quiz_id: &str, owner: &Claims) -> AppResult<QuizStats> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;
        require_quiz_owner(owner, &quiz)?;

        let responses = self.responses.list_by_quiz(&quiz.id).await?;
        Ok(StatsService::aggregate(&responses))
    }

    async fn quiz_for(&self, response: &QuizResponse) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(&response.quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    fn correction_detail(
        &self,
        quiz: &Quiz,
        response: &QuizResponse,
    ) -> AppResult<CorrectionDto> {
        let percentage = ScoringService::percentage(response.score, response.total_questions)?;

        Ok(CorrectionDto {
            student_name: response.student_name.clone(),
            quiz_title: quiz.title.clone(),
            subject: quiz.subject,
            score: response.score,
            total_questions: response.total_questions,
            percentage,
            time_spent: response.time_spent,
            submitted_at: response.submitted_at,
            question_analysis: ScoringService::correction_rows(quiz, &response.answers),
        })
    }
}
