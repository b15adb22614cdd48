pub mod camera;
pub mod classify;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod pose;
pub mod render;
pub mod session;

#[cfg(feature = "desktop")]
pub mod app;
