use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_levels::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone());

    log::info!("Loading first level from {}", config.questions_url);
    if let Err(err) = state.handler.lock().await.start().await {
        log::error!(
            "Initial quiz load failed, retry with POST /api/game/start: {}",
            err
        );
    }

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
