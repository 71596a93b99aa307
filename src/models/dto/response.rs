use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Passage, Quiz, QuizResponse, Subject, Teacher};

/// Public projection of a teacher account (never carries the password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Subject,
}

impl From<&Teacher> for TeacherDto {
    fn from(teacher: &Teacher) -> Self {
        TeacherDto {
            id: teacher.id.clone(),
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            subject: teacher.subject,
        }
    }
}

/// The student-facing quiz. This type has no correct-answer field at all, so
/// the key cannot cross the trust boundary even by accident.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuizDto {
    pub title: String,
    pub subject: Subject,
    pub questions: Vec<StudentQuestionDto>,
    pub passages: Vec<Passage>,
    pub time_limit: u32,
    pub share_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuestionDto {
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<String>,
}

impl From<&Quiz> for StudentQuizDto {
    fn from(quiz: &Quiz) -> Self {
        StudentQuizDto {
            title: quiz.title.clone(),
            subject: quiz.subject,
            questions: quiz
                .questions
                .iter()
                .map(|q| StudentQuestionDto {
                    question: q.question.clone(),
                    options: q.options.clone(),
                    passage_id: q.passage_id.clone(),
                })
                .collect(),
            // Passage text is not secret; it passes through unredacted.
            passages: quiz.passages.clone(),
            time_limit: quiz.time_limit,
            share_id: quiz.share_id.clone(),
        }
    }
}

/// Returned to the student immediately after a submission is scored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultDto {
    pub message: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub correction_id: String,
}

/// One row of a correction: everything needed to review a single question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u8,
    pub student_answer: i32,
    pub is_correct: bool,
}

/// Full correction detail. Served both to the student (keyed by correction
/// token) and to the owning teacher (keyed by response id).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionDto {
    pub student_name: String,
    pub quiz_title: String,
    pub subject: Subject,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub time_spent: u32,
    pub submitted_at: DateTime<Utc>,
    pub question_analysis: Vec<QuestionAnalysis>,
}

/// One response row in a teacher-facing listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummaryDto {
    pub id: String,
    pub student_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub time_spent: u32,
    pub correction_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummaryDto {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    pub total_questions: u32,
    pub time_limit: u32,
}

impl From<&Quiz> for QuizSummaryDto {
    fn from(quiz: &Quiz) -> Self {
        QuizSummaryDto {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            subject: quiz.subject,
            total_questions: quiz.questions.len() as u32,
            time_limit: quiz.time_limit,
        }
    }
}

/// Responses for one quiz, newest first, with the quiz header alongside.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponsesDto {
    pub quiz: QuizSummaryDto,
    pub responses: Vec<ResponseSummaryDto>,
}

/// Per-quiz summary statistics over all of its responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub total_attempts: u32,
    pub average_score: u32,
    pub highest_score: u32,
    pub lowest_score: u32,
    pub average_time: u32,
}

impl QuizStats {
    pub fn empty() -> Self {
        QuizStats {
            total_attempts: 0,
            average_score: 0,
            highest_score: 0,
            lowest_score: 0,
            average_time: 0,
        }
    }
}

pub fn response_summary(response: &QuizResponse, percentage: u32) -> ResponseSummaryDto {
    ResponseSummaryDto {
        id: response.id.clone(),
        student_name: response.student_name.clone(),
        score: response.score,
        total_questions: response.total_questions,
        percentage,
        time_spent: response.time_spent,
        correction_id: response.correction_id.clone(),
        submitted_at: response.submitted_at,
    }
}
