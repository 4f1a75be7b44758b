pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod notice;
pub mod projector;
pub mod view;

pub use controller::{Dashboard, DashboardState};
pub use projector::{project, DisplayRow};
