use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie},
    get, post, web, HttpResponse,
};
use serde::Serialize;

use crate::{
    app_state::AppState,
    auth::{AuthenticatedTeacher, TOKEN_COOKIE},
    errors::AppError,
    models::{
        domain::Teacher,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::TeacherDto,
        },
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub teacher: TeacherDto,
    pub token: String,
}

fn session_cookie(token: &str, hours: i64) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::hours(hours))
        .finish()
}

fn auth_response(
    state: &AppState,
    teacher: &Teacher,
    message: &str,
) -> Result<(AuthResponse, Cookie<'static>), AppError> {
    let token = state.jwt_service.create_token(teacher)?;
    let cookie = session_cookie(&token, state.jwt_service.expiration_hours());

    Ok((
        AuthResponse {
            message: message.to_string(),
            teacher: TeacherDto::from(teacher),
            token,
        },
        cookie,
    ))
}

#[post("/api/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let teacher = state.teacher_service.register(request.into_inner()).await?;
    let (body, cookie) =
        auth_response(state.get_ref(), &teacher, "Teacher registered successfully")?;

    Ok(HttpResponse::Created().cookie(cookie).json(body))
}

#[post("/api/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let teacher = state.teacher_service.login(request.into_inner()).await?;
    let (body, cookie) = auth_response(state.get_ref(), &teacher, "Login successful")?;

    Ok(HttpResponse::Ok().cookie(cookie).json(body))
}

#[post("/api/logout")]
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "message": "Logged out successfully" }))
}

/// Confirms the session is still valid and echoes the identity claims.
#[get("/api/verify")]
pub async fn verify(auth: AuthenticatedTeacher) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "authenticated": true,
        "teacher": auth.0,
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe; reports whether the database answers a ping.
#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    readiness_response(state.db.health_check().await.is_ok())
}

fn readiness_response(db_ok: bool) -> HttpResponse {
    let response = serde_json::json!({
        "status": if db_ok { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_ok { "ok" } else { "error" }
        }
    });

    if db_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
