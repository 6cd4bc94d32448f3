use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn settings(&self) -> ModeSettings {
        ModeSettings::new(self.power, self.suspension_height)
    }
}

/// One row of the driving-mode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSettings {
    pub power: i32,
    pub suspension_height: i32,
}

impl ModeSettings {
    pub const SPORT: ModeSettings = ModeSettings::new(500, 10);
    pub const COMFORT: ModeSettings = ModeSettings::new(400, 20);
    pub const STANDARD: ModeSettings = ModeSettings::new(200, 30);

    pub const fn new(power: i32, suspension_height: i32) -> Self {
        Self {
            power,
            suspension_height,
        }
    }

    pub fn apply_to(&self, vehicle: &mut Vehicle) {
        vehicle.set_power(self.power);
        vehicle.set_suspension_height(self.suspension_height);
    }
}

/// A driving-mode selection.
///
/// `Standard` covers every selection that is neither sport nor comfort, so
/// parsing a mode name cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingMode {
    Sport,
    Comfort,
    #[default]
    #[serde(other)]
    Standard,
}

impl DrivingMode {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sport" => DrivingMode::Sport,
            "comfort" => DrivingMode::Comfort,
            _ => DrivingMode::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrivingMode::Sport => "sport",
            DrivingMode::Comfort => "comfort",
            DrivingMode::Standard => "standard",
        }
    }
}

impl FromStr for DrivingMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DrivingMode::from_name(s))
    }
}

impl fmt::Display for DrivingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
