pub mod config;
pub mod events;
pub mod forms;
pub mod gallery;
pub mod http;
pub mod tracing;
