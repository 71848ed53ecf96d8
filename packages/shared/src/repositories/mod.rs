pub mod errors;
pub mod game_repository;
pub mod player_data_repository;
pub mod rating_repository;
