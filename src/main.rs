use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};

use smartsteps_server::{
    app_state::AppState,
    config::Config,
    errors::ErrorResponse,
    handlers,
};

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "API endpoint not found".to_string(),
        code: 404,
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");
    let jwt_data = web::Data::from(state.jwt_service.clone());

    log::info!("Smart Steps quiz server running on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(jwt_data.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::logout)
            .service(handlers::verify)
            .service(handlers::create_quiz)
            .service(handlers::delete_quiz)
            .service(handlers::list_quizzes)
            .service(handlers::get_student_quiz)
            .service(handlers::submit_response)
            .service(handlers::correction)
            .service(handlers::responses_for_quiz)
            .service(handlers::all_responses)
            .service(handlers::quiz_stats)
            .service(handlers::student_details)
            .default_service(web::route().to(api_not_found))
    })
    .bind((host, port))?
    .run()
    .await
}
