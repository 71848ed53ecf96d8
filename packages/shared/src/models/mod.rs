pub mod analytics;
pub mod game;
pub mod stats;
