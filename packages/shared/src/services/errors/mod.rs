pub mod analytics_service_errors;
