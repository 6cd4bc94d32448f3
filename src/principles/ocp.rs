//! Open/Closed, applied to driving modes.
//!
//! [`EventHandler`] hard-codes the mode table; [`ModeRegistry`] accepts new
//! modes without being edited.

use crate::core::event_handler::EventHandler;
use crate::core::mode_registry::{FixedProfile, ModeRegistry};
use crate::domain::model::{DrivingMode, ModeSettings, Vehicle};
use crate::utils::error::Result;

pub fn demo() -> Result<()> {
    let mut vehicle = Vehicle::default();
    let mut handler = EventHandler::new(&mut vehicle);
    for mode in [DrivingMode::Sport, DrivingMode::Comfort, DrivingMode::Standard] {
        handler.change_driving_mode(mode);
        tracing::info!("EventHandler {}: {:?}", mode, handler.vehicle().settings());
    }

    let mut registry = ModeRegistry::with_builtin_modes();
    registry.register(FixedProfile::new("economy", ModeSettings::new(150, 35)));
    for name in ["sport", "comfort", "economy", "unknown"] {
        let applied = registry.apply(name, &mut vehicle);
        tracing::info!(
            "ModeRegistry {} -> {}: {:?}",
            name,
            applied,
            vehicle.settings()
        );
    }
    Ok(())
}
