use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::teacher::Subject;

/// A composed quiz document. Written in one atomic insert by the composer and
/// never partially updated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    /// Copied from the owning teacher at creation time.
    pub subject: Subject,
    pub teacher_id: String,
    pub questions: Vec<Question>,
    pub passages: Vec<Passage>,
    /// Time limit in minutes; 0 means unlimited.
    pub time_limit: u32,
    /// Opaque capability for fetching the redacted quiz and submitting
    /// responses. Unique index at the store is the final authority.
    pub share_id: String,
    pub created_at: DateTime<Utc>,
}

/// One multiple-choice question embedded in a quiz. The composer guarantees
/// exactly four options and a correct index in [0,3].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<String>,
}

/// A reading passage a contiguous block of questions is grouped under.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    pub text: String,
    pub question_count: u32,
}

impl Quiz {
    pub fn new(
        title: &str,
        subject: Subject,
        teacher_id: &str,
        questions: Vec<Question>,
        passages: Vec<Passage>,
        time_limit: u32,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            subject,
            teacher_id: teacher_id.to_string(),
            questions,
            passages,
            time_limit,
            share_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }
}
