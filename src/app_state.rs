use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoResponseRepository, MongoTeacherRepository},
    services::{QuizService, ResponseService, TeacherService},
};

#[derive(Clone)]
pub struct AppState {
    pub teacher_service: Arc<TeacherService>,
    pub quiz_service: Arc<QuizService>,
    pub response_service: Arc<ResponseService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let teacher_repository = Arc::new(MongoTeacherRepository::new(&db));
        teacher_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let response_repository = Arc::new(MongoResponseRepository::new(&db));
        response_repository.ensure_indexes().await?;

        let teacher_service = Arc::new(TeacherService::new(teacher_repository));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository.clone(),
            response_repository.clone(),
        ));
        let response_service = Arc::new(ResponseService::new(quiz_repository, response_repository));

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self {
            teacher_service,
            quiz_service,
            response_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
