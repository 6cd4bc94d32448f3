pub mod event_handler;
pub mod mode_registry;

pub use crate::domain::model::{DrivingMode, ModeSettings, Vehicle};
pub use crate::domain::ports::ModeProfile;
pub use crate::utils::error::Result;
