pub mod analytics_service;
pub mod errors;
