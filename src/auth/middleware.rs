use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{Claims, JwtService, TOKEN_COOKIE},
    errors::AppError,
};

/// Extractor for teacher-scoped handlers. Pulls the session token from the
/// `Authorization: Bearer` header or the `token` cookie, validates it and
/// exposes the claims. Rejection happens here, before any handler logic runs.
pub struct AuthenticatedTeacher(pub Claims);

impl FromRequest for AuthenticatedTeacher {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedTeacher))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let token = bearer_token(req)
        .or_else(|| cookie_token(req))
        .ok_or_else(|| AppError::Unauthorized("Access denied. No token provided".to_string()))?;

    jwt_service.validate_token(&token)
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn cookie_token(req: &HttpRequest) -> Option<String> {
    req.cookie(TOKEN_COOKIE).map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    use crate::{config::Config, test_utils::fixtures::test_teacher};

    fn jwt_data() -> web::Data<JwtService> {
        let config = Config::test_config();
        web::Data::new(JwtService::new(&config.jwt_secret, 1))
    }

    #[actix_web::test]
    async fn missing_token_is_rejected_before_handlers_run() {
        let req = TestRequest::default().app_data(jwt_data()).to_http_request();

        let result = AuthenticatedTeacher::from_request(&req, &mut actix_web::dev::Payload::None)
            .into_inner();

        match result {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("No token")),
            other => panic!("expected Unauthorized, got {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn bearer_token_authenticates() {
        let jwt = jwt_data();
        let teacher = test_teacher();
        let token = jwt.create_token(&teacher).unwrap();

        let req = TestRequest::default()
            .app_data(jwt.clone())
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();

        let result = AuthenticatedTeacher::from_request(&req, &mut actix_web::dev::Payload::None)
            .into_inner()
            .unwrap();

        assert_eq!(result.0.sub, teacher.id);
    }

    #[actix_web::test]
    async fn cookie_token_authenticates() {
        let jwt = jwt_data();
        let teacher = test_teacher();
        let token = jwt.create_token(&teacher).unwrap();

        let req = TestRequest::default()
            .app_data(jwt.clone())
            .cookie(actix_web::cookie::Cookie::new(TOKEN_COOKIE, token))
            .to_http_request();

        let result = AuthenticatedTeacher::from_request(&req, &mut actix_web::dev::Payload::None)
            .into_inner()
            .unwrap();

        assert_eq!(result.0.email, teacher.email);
    }

    #[actix_web::test]
    async fn malformed_token_is_rejected() {
        let req = TestRequest::default()
            .app_data(jwt_data())
            .insert_header((AUTHORIZATION, "Bearer not.a.jwt"))
            .to_http_request();

        let result = AuthenticatedTeacher::from_request(&req, &mut actix_web::dev::Payload::None)
            .into_inner();

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
