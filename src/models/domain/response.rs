use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scored student submission. Insert-once; individual responses are never
/// mutated or deleted, only removed in bulk when the parent quiz is deleted.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: String,
    /// Free-text display name, not an identity.
    pub student_name: String,
    pub quiz_id: String,
    /// One entry per quiz question, in question order. -1 means unanswered.
    pub answers: Vec<i32>,
    pub score: u32,
    /// Snapshot of the quiz length at submission time.
    pub total_questions: u32,
    /// Elapsed time in seconds.
    pub time_spent: u32,
    /// Opaque capability for the self-service correction view.
    pub correction_id: String,
    pub submitted_at: DateTime<Utc>,
}

impl QuizResponse {
    pub fn new(
        student_name: &str,
        quiz_id: &str,
        answers: Vec<i32>,
        score: u32,
        total_questions: u32,
        time_spent: u32,
    ) -> Self {
        QuizResponse {
            id: Uuid::new_v4().to_string(),
            student_name: student_name.to_string(),
            quiz_id: quiz_id.to_string(),
            answers,
            score,
            total_questions,
            time_spent,
            correction_id: Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_creation() {
        let response = QuizResponse::new("Sam", "quiz-1", vec![0, -1, 2], 2, 3, 145);

        assert_eq!(response.quiz_id, "quiz-1");
        assert_eq!(response.score, 2);
        assert_eq!(response.total_questions, 3);
        assert!(!response.correction_id.is_empty());
        assert_ne!(response.id, response.correction_id);
    }

    #[test]
    fn response_round_trip_preserves_answers_including_sentinel() {
        let response = QuizResponse::new("Sam", "quiz-1", vec![3, -1, 0, 1], 2, 4, 60);

        let json = serde_json::to_string(&response).unwrap();
        let parsed: QuizResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.answers, vec![3, -1, 0, 1]);
        assert_eq!(parsed, response);
    }
}
