// Configuration layer - environment settings, logging, database bootstrap
pub mod database;
pub mod logging;
pub mod settings;

pub use logging::init_logging;
pub use settings::Settings;
