pub mod analytics;
pub mod models;
pub mod repositories;
pub mod services;
