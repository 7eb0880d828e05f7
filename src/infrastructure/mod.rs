// Infrastructure layer - Configuration and the HTTP status client
pub mod config;
pub mod http_repository;
