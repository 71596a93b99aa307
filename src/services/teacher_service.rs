use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::Teacher,
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::TeacherRepository,
};

pub struct TeacherService {
    repository: Arc<dyn TeacherRepository>,
}

impl TeacherService {
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<Teacher> {
        request.validate()?;

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "Teacher with this email already exists".to_string(),
            ));
        }

        let password_hash = password::hash_password(&request.password)?;
        let teacher = Teacher::new(&request.name, &request.email, &password_hash, request.subject);

        let teacher = self.repository.create(teacher).await?;
        log::info!("Registered teacher {} ({})", teacher.name, teacher.subject);
        Ok(teacher)
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> AppResult<Teacher> {
        let teacher = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &teacher.password)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(teacher)
    }
}
