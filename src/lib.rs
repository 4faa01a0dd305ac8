/// Basic application code
pub mod app;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Repositories
pub mod repo;
/// Application settings
pub mod settings;
/// Appointment store lifecycle
pub mod store;
/// Application telemetry for tracing and logging
pub mod telemetry;
