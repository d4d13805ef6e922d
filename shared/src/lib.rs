pub mod logging;
pub mod prompt;
pub mod telemetry;
pub mod types;
pub mod utils;
