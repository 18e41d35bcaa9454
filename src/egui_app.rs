//! egui front end: the controller that owns all view state, the plain state
//! types it exposes, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
