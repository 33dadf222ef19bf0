pub mod health;
pub mod runtime_config;

pub use health::health_handler;
pub use runtime_config::{runtime_config_handler, ConfigHandler};
