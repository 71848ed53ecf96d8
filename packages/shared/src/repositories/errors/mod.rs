pub mod game_repository_errors;
pub mod player_data_repository_errors;
pub mod rating_repository_errors;
