pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod store;
pub mod utils;
