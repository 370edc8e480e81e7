pub mod app;
pub mod banner;
pub mod calculator;
pub mod config;
pub mod logging;

// Re-export the main types for easy access
pub use app::run;
pub use calculator::Calculator;
pub use config::{Config, LoggingConfig};
pub use logging::init_logging;
