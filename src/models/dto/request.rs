use serde::Deserialize;
use validator::Validate;

use crate::models::domain::teacher::Subject;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub subject: Subject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authoring payload for one quiz. Field-level checks live on the composer,
/// which reports a specific reason for each rejected payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    pub title: String,
    pub questions: Vec<QuestionInput>,
    #[serde(default)]
    pub passages: Vec<PassageInput>,
    #[serde(default)]
    pub time_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub question: String,
    pub options: Vec<String>,
    /// Signed on the wire so out-of-range values reach the composer and get a
    /// specific validation message instead of a deserialization failure.
    pub correct_answer: i32,
    #[serde(default)]
    pub passage_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageInput {
    pub id: String,
    pub text: String,
    pub question_count: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    #[validate(length(min = 1, max = 200, message = "Student name is required"))]
    pub student_name: String,

    /// One entry per question, in quiz order; -1 marks an unanswered question.
    pub answers: Vec<i32>,

    #[serde(default)]
    pub time_spent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_request() {
        let request = RegisterRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            subject: Subject::Mathematics,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "correct-horse".to_string(),
            subject: Subject::Mathematics,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_too_short() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc".to_string(),
            subject: Subject::Mathematics,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_rejects_unknown_subject() {
        let json = r#"{"name":"Ada","email":"ada@example.com","password":"secret1","subject":"Alchemy"}"#;
        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }

    #[test]
    fn create_quiz_request_defaults_passages_and_time_limit() {
        let json = r#"{
            "title": "Quick check",
            "questions": [
                {"question": "Q?", "options": ["a","b","c","d"], "correctAnswer": 0}
            ]
        }"#;

        let request: CreateQuizRequest = serde_json::from_str(json).unwrap();
        assert!(request.passages.is_empty());
        assert_eq!(request.time_limit, 0);
        assert!(request.questions[0].passage_id.is_none());
    }

    #[test]
    fn test_blank_student_name_rejected() {
        let request = SubmitResponseRequest {
            student_name: "".to_string(),
            answers: vec![0],
            time_spent: 0,
        };
        assert!(request.validate().is_err());
    }
}
