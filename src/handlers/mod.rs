pub mod game_handler;

use actix_web::web;

pub use game_handler::{
    choose_level, get_game, health_check, player_input, start_game, submit_answer,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(start_game)
        .service(get_game)
        .service(submit_answer)
        .service(choose_level)
        .service(player_input);
}
