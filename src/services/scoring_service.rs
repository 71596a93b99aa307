use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::response::QuestionAnalysis},
};

/// Reserved sentinel for "no selection". Valid option indices are 0..=3, so
/// the sentinel can never equal a stored correct answer.
pub const UNANSWERED: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
}

/// Deterministic scoring against a quiz's answer key. Pure; persistence is the
/// caller's concern.
pub struct ScoringService;

impl ScoringService {
    pub fn score(quiz: &Quiz, answers: &[i32]) -> AppResult<ScoreResult> {
        let total = quiz.questions.len();

        if answers.len() != total {
            return Err(AppError::ValidationError(format!(
                "Expected {} answers, got {}",
                total,
                answers.len()
            )));
        }

        let score = quiz
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, &answer)| {
                answer != UNANSWERED && answer == i32::from(question.correct_answer)
            })
            .count() as u32;

        let percentage = Self::percentage(score, total as u32)?;

        Ok(ScoreResult {
            score,
            total_questions: total as u32,
            percentage,
        })
    }

    /// Round-half-up percentage. A zero total means the composed-quiz
    /// invariant (N >= 1) was violated upstream, i.e. data corruption.
    pub fn percentage(score: u32, total_questions: u32) -> AppResult<u32> {
        if total_questions == 0 {
            return Err(AppError::EmptyQuizScoring);
        }

        let ratio = f64::from(score) * 100.0 / f64::from(total_questions);
        Ok(ratio.round() as u32)
    }

    /// Per-question review rows for correction and detail views. The sentinel
    /// never equals a valid index, so unanswered questions are always marked
    /// incorrect.
    pub fn correction_rows(quiz: &Quiz, answers: &[i32]) -> Vec<QuestionAnalysis> {
        quiz.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let student_answer = answers.get(index).copied().unwrap_or(UNANSWERED);
                QuestionAnalysis {
                    question: question.question.clone(),
                    options: question.options.clone(),
                    correct_answer: question.correct_answer,
                    student_answer,
                    is_correct: student_answer == i32::from(question.correct_answer),
                }
            })
            .collect()
    }
}
