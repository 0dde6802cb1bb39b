pub mod api;
pub mod dto;
pub mod fallback;
pub mod model;
pub mod partition;
pub mod view;
