pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
