pub mod answer_handler;
pub mod game_service;
