use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Name of the http-only cookie the session token travels in.
pub const TOKEN_COOKIE: &str = "token";

/// Every teacher-scoped read or delete of a quiz goes through this check.
pub fn require_quiz_owner(claims: &Claims, quiz: &Quiz) -> AppResult<()> {
    if claims.sub != quiz.teacher_id {
        return Err(AppError::AccessDenied(
            "You can only access your own quizzes".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{claims_for, quiz_with_key, test_teacher};

    #[test]
    fn test_owner_passes() {
        let teacher = test_teacher();
        let claims = claims_for(&teacher);
        let quiz = quiz_with_key(&teacher.id, &[0]);

        assert!(require_quiz_owner(&claims, &quiz).is_ok());
    }

    #[test]
    fn test_non_owner_is_denied() {
        let claims = claims_for(&test_teacher());
        let quiz = quiz_with_key("someone-else", &[0]);

        assert!(matches!(
            require_quiz_owner(&claims, &quiz),
            Err(AppError::AccessDenied(_))
        ));
    }
}
