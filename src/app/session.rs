use crate::config::toml_config::ModesConfig;
use crate::core::mode_registry::ModeRegistry;
use crate::domain::model::Vehicle;
use crate::domain::ports::{ModeProfile, VehicleReporter};
use crate::principles::srp::TextReporter;
use crate::utils::error::Result;
use std::path::Path;

/// A vehicle together with the modes it can be switched into.
pub struct DriveSession {
    registry: ModeRegistry,
    vehicle: Vehicle,
}

impl DriveSession {
    pub fn new(registry: ModeRegistry, vehicle: Vehicle) -> Self {
        Self { registry, vehicle }
    }

    pub fn from_config(config: &ModesConfig) -> Result<Self> {
        let registry = ModeRegistry::from_config(config)?;
        let vehicle = config.initial_vehicle()?;
        Ok(Self::new(registry, vehicle))
    }

    /// Builtin modes only when no path is given.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                tracing::info!("Loading driving modes from {}", path.display());
                Self::from_config(&ModesConfig::from_file(path)?)
            }
            None => Ok(Self::new(ModeRegistry::with_builtin_modes(), Vehicle::default())),
        }
    }

    /// Returns the name of the profile that was applied.
    pub fn select_mode(&mut self, name: &str) -> &str {
        let applied = self.registry.apply(name, &mut self.vehicle);
        tracing::info!(
            "Mode '{}' applied as '{}': power={} suspension_height={}",
            name,
            applied,
            self.vehicle.power(),
            self.vehicle.suspension_height()
        );
        applied
    }

    pub fn report<R: VehicleReporter + ?Sized>(&self, reporter: &R) -> Result<String> {
        reporter.render(&self.vehicle)
    }

    /// One line per registered mode, then the fallback, each showing the
    /// starting vehicle with that mode applied.
    pub fn describe_modes(&self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(self.registry.len() + 1);
        for name in self.registry.mode_names() {
            lines.push(self.describe_profile(self.registry.resolve(name))?);
        }
        let fallback = self.describe_profile(self.registry.fallback())?;
        lines.push(format!("{} (fallback)", fallback));
        Ok(lines)
    }

    fn describe_profile(&self, profile: &dyn ModeProfile) -> Result<String> {
        let mut vehicle = self.vehicle.clone();
        profile.apply(&mut vehicle);
        Ok(format!("{}: {}", profile.name(), TextReporter.render(&vehicle)?))
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl Default for DriveSession {
    fn default() -> Self {
        Self::new(ModeRegistry::with_builtin_modes(), Vehicle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ModeSettings;
    use crate::principles::srp::{JsonReporter, TextReporter};

    #[test]
    fn test_default_session_applies_builtin_modes() {
        let mut session = DriveSession::default();
        assert_eq!(session.select_mode("Comfort"), "comfort");
        assert_eq!(session.vehicle().settings(), ModeSettings::COMFORT);
        assert_eq!(
            session.report(&TextReporter).unwrap(),
            "power=400 suspension_height=20"
        );
    }

    #[test]
    fn test_session_from_config() {
        let config = ModesConfig::from_toml_str(
            "[vehicle]\npower = 10\nsuspension_height = 50\n\
             [[modes]]\nname = \"economy\"\npower = 150\nsuspension_height = 35\n",
        )
        .unwrap();
        let mut session = DriveSession::from_config(&config).unwrap();
        assert_eq!(session.vehicle().settings(), ModeSettings::new(10, 50));

        session.select_mode("economy");
        assert_eq!(
            session.report(&JsonReporter::default()).unwrap(),
            r#"{"power":150,"suspension_height":35}"#
        );
    }

    #[test]
    fn test_describe_modes_lists_fallback_last() {
        let config = ModesConfig::from_toml_str(
            "[fallback]\npower = 180\nsuspension_height = 32\n\
             [[modes]]\nname = \"Economy\"\npower = 150\nsuspension_height = 35\n",
        )
        .unwrap();
        let session = DriveSession::from_config(&config).unwrap();
        assert_eq!(
            session.describe_modes().unwrap(),
            vec![
                "comfort: power=400 suspension_height=20",
                "Economy: power=150 suspension_height=35",
                "sport: power=500 suspension_height=10",
                "standard: power=180 suspension_height=32 (fallback)",
            ]
        );
    }

    #[test]
    fn test_describe_modes_leaves_vehicle_untouched() {
        let mut session = DriveSession::default();
        session.select_mode("sport");
        session.describe_modes().unwrap();
        assert_eq!(session.vehicle().settings(), ModeSettings::SPORT);
    }

    #[test]
    fn test_pretty_json_report() {
        let mut session = DriveSession::default();
        session.select_mode("comfort");
        let rendered = session.report(&JsonReporter { pretty: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["power"], 400);
        assert_eq!(value["suspension_height"], 20);
    }

    #[test]
    fn test_load_without_path() {
        let session = DriveSession::load(None).unwrap();
        assert_eq!(session.registry().mode_names(), vec!["comfort", "sport"]);
    }
}
