pub mod app;
pub mod config;
pub mod manifest;
pub mod normalize;
pub mod verify;
