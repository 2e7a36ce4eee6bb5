pub mod config;
pub mod logging;
pub mod service;

pub use service::ClientDirectory;
