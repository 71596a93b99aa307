use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Subject, Teacher};

/// Identity claims embedded in a session token. Expiry is checked on every
/// access when the token is validated; there is no server-side session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (teacher id)
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(teacher: &Teacher, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: teacher.id.clone(),
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            subject: teacher.subject,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
