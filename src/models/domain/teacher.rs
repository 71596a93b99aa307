use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of subjects a teacher can register under. A quiz copies the
/// owning teacher's subject at creation time and never re-derives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Subject {
    Biology,
    Mathematics,
    English,
    Physics,
    Chemistry,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Subject::Biology => "Biology",
            Subject::Mathematics => "Mathematics",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        };
        f.write_str(name)
    }
}

/// A registered teacher account. Immutable after registration; no update or
/// delete operations exist.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never the plaintext password.
    pub password: String,
    pub subject: Subject,
    pub created_at: DateTime<Utc>,
}

impl Teacher {
    pub fn new(name: &str, email: &str, password_hash: &str, subject: Subject) -> Self {
        Teacher {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            subject,
            created_at: Utc::now(),
        }
    }
}
