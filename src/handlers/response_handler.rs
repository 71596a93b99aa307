use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedTeacher,
    errors::AppError,
    models::dto::request::SubmitResponseRequest,
};

/// Public submission by share token.
#[post("/api/submit/{share_id}")]
pub async fn submit_response(
    state: web::Data<AppState>,
    share_id: web::Path<String>,
    request: web::Json<SubmitResponseRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .response_service
        .submit(&share_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Public correction view; the correction token is the capability.
#[get("/api/correction/{correction_id}")]
pub async fn correction(
    state: web::Data<AppState>,
    correction_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = state.response_service.correction(&correction_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[get("/api/responses/{quiz_id}")]
pub async fn responses_for_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let listing = state
        .response_service
        .responses_for_quiz(&quiz_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(listing))
}

#[get("/api/all-responses")]
pub async fn all_responses(
    state: web::Data<AppState>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let grouped = state.response_service.all_responses(&auth.0).await?;
    Ok(HttpResponse::Ok().json(grouped))
}

#[get("/api/quiz-stats/{quiz_id}")]
pub async fn quiz_stats(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let stats = state.response_service.stats(&quiz_id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/student-details/{response_id}")]
pub async fn student_details(
    state: web::Data<AppState>,
    response_id: web::Path<String>,
    auth: AuthenticatedTeacher,
) -> Result<HttpResponse, AppError> {
    let detail = state
        .response_service
        .student_detail(&response_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(detail))
}
