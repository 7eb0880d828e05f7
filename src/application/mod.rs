// Application layer - Use cases driving the display surface
pub mod clock_service;
pub mod poll_service;
pub mod status_repository;
