pub mod config;
pub mod logging;

pub mod excerpt;
pub mod generated;
pub mod retry;
pub mod text;
pub mod transcript;
pub mod upload;
pub mod video;
