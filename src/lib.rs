pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::DriveSession;
pub use config::toml_config::ModesConfig;
pub use core::{
    event_handler::EventHandler,
    mode_registry::{FixedProfile, ModeRegistry},
};
pub use domain::model::{DrivingMode, ModeSettings, Vehicle};
pub use utils::error::{Result, SolidError};
