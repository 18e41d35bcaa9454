//! Desktop client for a remote fraud-scoring service.
/// Application directory resolution.
pub mod app_dirs;
/// Settings file and environment overrides.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded body readers.
pub mod http_client;
/// Logging setup for stdout and per-launch log files.
pub mod logging;
/// Scoring service client and trait seam.
pub mod scoring;
/// Transaction features, samples, and form parsing.
pub mod transaction;
