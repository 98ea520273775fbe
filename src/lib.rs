pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod templates;
