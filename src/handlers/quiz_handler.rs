use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedTeacher,
    errors::AppError,
    models::dto::request::CreateQuizRequest,
};

#[post("/api/quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Quiz created successfully",
        "quiz": quiz,
    })))
}

#[delete("/api/quiz/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&quiz_id, &auth.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Quiz and all associated responses deleted successfully",
    })))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_own(&auth.0).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

/// Public fetch by share token. Returns the redacted projection only.
#[get("/api/quiz/{share_id}")]
pub async fn get_student_quiz(
    state: web::Data<AppState>,
    share_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_for_student(&share_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}
