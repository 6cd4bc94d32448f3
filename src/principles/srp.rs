//! Single Responsibility.
//!
//! The violating vehicle both stores its settings and decides how they are
//! printed, so a change to the output format touches the vehicle type. The
//! solution keeps [`Vehicle`] as plain state and moves rendering behind
//! [`VehicleReporter`].

use crate::domain::model::Vehicle;
use crate::domain::ports::VehicleReporter;
use crate::utils::error::Result;

pub mod violation {
    /// Holds state and formats itself.
    #[derive(Debug, Clone, Default)]
    pub struct Vehicle {
        power: i32,
        suspension_height: i32,
    }

    impl Vehicle {
        pub fn new(power: i32, suspension_height: i32) -> Self {
            Self {
                power,
                suspension_height,
            }
        }

        pub fn power(&self) -> i32 {
            self.power
        }

        pub fn set_power(&mut self, power: i32) {
            self.power = power;
        }

        pub fn suspension_height(&self) -> i32 {
            self.suspension_height
        }

        pub fn set_suspension_height(&mut self, suspension_height: i32) {
            self.suspension_height = suspension_height;
        }

        pub fn describe(&self) -> String {
            format!(
                "power={} suspension_height={}",
                self.power, self.suspension_height
            )
        }

        pub fn to_json(&self) -> String {
            format!(
                "{{\"power\":{},\"suspension_height\":{}}}",
                self.power, self.suspension_height
            )
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl VehicleReporter for TextReporter {
    fn render(&self, vehicle: &Vehicle) -> Result<String> {
        Ok(format!(
            "power={} suspension_height={}",
            vehicle.power(),
            vehicle.suspension_height()
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

impl VehicleReporter for JsonReporter {
    fn render(&self, vehicle: &Vehicle) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(vehicle)?
        } else {
            serde_json::to_string(vehicle)?
        };
        Ok(json)
    }
}

pub fn demo() -> Result<()> {
    let mut mixed = violation::Vehicle::new(0, 0);
    mixed.set_power(320);
    mixed.set_suspension_height(18);
    tracing::info!("Self-formatting vehicle: {}", mixed.describe());

    let vehicle = Vehicle::new(mixed.power(), mixed.suspension_height());
    let json = JsonReporter::default();
    let reporters: [&dyn VehicleReporter; 2] = [&TextReporter, &json];
    for reporter in reporters {
        tracing::info!("Reporter output: {}", reporter.render(&vehicle)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporters_agree_with_self_formatting_vehicle() {
        let mixed = violation::Vehicle::new(400, 20);
        let vehicle = Vehicle::new(400, 20);

        assert_eq!(TextReporter.render(&vehicle).unwrap(), mixed.describe());
        assert_eq!(
            JsonReporter::default().render(&vehicle).unwrap(),
            mixed.to_json()
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let vehicle = Vehicle::new(500, 10);
        let rendered = JsonReporter { pretty: true }.render(&vehicle).unwrap();
        assert!(rendered.contains('\n'));

        let parsed: Vehicle = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vehicle);
    }

    #[test]
    fn test_demo_runs() {
        assert!(demo().is_ok());
    }
}
