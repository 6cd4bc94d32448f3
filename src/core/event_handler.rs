use crate::domain::model::{DrivingMode, Vehicle};

/// Reacts to driving-mode changes by reconfiguring the vehicle it holds.
///
/// The mode table lives in the `match` below, so introducing a new mode
/// means editing both [`DrivingMode`] and this handler. See
/// [`ModeRegistry`](crate::core::mode_registry::ModeRegistry) for the form
/// that stays closed to modification.
pub struct EventHandler<'a> {
    vehicle: &'a mut Vehicle,
}

impl<'a> EventHandler<'a> {
    pub fn new(vehicle: &'a mut Vehicle) -> Self {
        Self { vehicle }
    }

    pub fn change_driving_mode(&mut self, driving_mode: DrivingMode) {
        tracing::debug!("Switching to {} mode", driving_mode);
        match driving_mode {
            DrivingMode::Sport => {
                self.vehicle.set_power(500);
                self.vehicle.set_suspension_height(10);
            }
            DrivingMode::Comfort => {
                self.vehicle.set_power(400);
                self.vehicle.set_suspension_height(20);
            }
            DrivingMode::Standard => {
                self.vehicle.set_power(200);
                self.vehicle.set_suspension_height(30);
            }
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &*self.vehicle
    }
}
