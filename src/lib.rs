pub mod app;
pub mod config;
pub mod error;
pub mod matcher;
pub mod renderer;
pub mod util;
pub mod window;
