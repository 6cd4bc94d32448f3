use crate::config::toml_config::{ModesConfig, FALLBACK_MODE_NAME};
use crate::domain::model::{ModeSettings, Vehicle};
use crate::domain::ports::ModeProfile;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;

/// A mode profile backed by a constant row of settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedProfile {
    name: String,
    settings: ModeSettings,
}

impl FixedProfile {
    pub fn new(name: impl Into<String>, settings: ModeSettings) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    pub fn sport() -> Self {
        Self::new("sport", ModeSettings::SPORT)
    }

    pub fn comfort() -> Self {
        Self::new("comfort", ModeSettings::COMFORT)
    }

    pub fn standard() -> Self {
        Self::new(FALLBACK_MODE_NAME, ModeSettings::STANDARD)
    }

    pub fn settings(&self) -> ModeSettings {
        self.settings
    }
}

impl ModeProfile for FixedProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, vehicle: &mut Vehicle) {
        self.settings.apply_to(vehicle);
    }
}

/// Driving modes looked up by name.
///
/// New modes are added with [`ModeRegistry::register`]; nothing here changes
/// when they are. Unknown names resolve to the fallback profile.
pub struct ModeRegistry {
    profiles: HashMap<String, Box<dyn ModeProfile>>,
    fallback: Box<dyn ModeProfile>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ModeRegistry {
    pub fn new(fallback: impl ModeProfile + 'static) -> Self {
        Self {
            profiles: HashMap::new(),
            fallback: Box::new(fallback),
        }
    }

    pub fn with_builtin_modes() -> Self {
        let mut registry = Self::new(FixedProfile::standard());
        registry.register(FixedProfile::sport());
        registry.register(FixedProfile::comfort());
        registry
    }

    /// Builtin modes plus every mode in the config. Config entries replace
    /// builtins with the same name; an entry named like the fallback
    /// replaces the fallback.
    pub fn from_config(config: &ModesConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::with_builtin_modes();
        if let Some(fallback) = config.fallback_settings()? {
            registry.set_fallback(FixedProfile::new(FALLBACK_MODE_NAME, fallback));
        }
        for (name, settings) in config.mode_settings()? {
            if normalize(name) == normalize(registry.fallback.name()) {
                tracing::info!("Fallback mode '{}' overridden by configuration", name);
                registry.set_fallback(FixedProfile::new(name, settings));
            } else if registry.register(FixedProfile::new(name, settings)).is_some() {
                tracing::info!("Mode '{}' overridden by configuration", name);
            }
        }

        tracing::debug!("Registered modes: {:?}", registry.mode_names());
        Ok(registry)
    }

    pub fn register(&mut self, profile: impl ModeProfile + 'static) -> Option<Box<dyn ModeProfile>> {
        let key = normalize(profile.name());
        self.profiles.insert(key, Box::new(profile))
    }

    pub fn set_fallback(&mut self, profile: impl ModeProfile + 'static) {
        self.fallback = Box::new(profile);
    }

    pub fn fallback(&self) -> &dyn ModeProfile {
        self.fallback.as_ref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(&normalize(name))
    }

    pub fn resolve(&self, name: &str) -> &dyn ModeProfile {
        match self.profiles.get(&normalize(name)) {
            Some(profile) => profile.as_ref(),
            None => {
                tracing::debug!(
                    "Unknown mode '{}', using '{}'",
                    name,
                    self.fallback.name()
                );
                self.fallback.as_ref()
            }
        }
    }

    /// Applies the named mode and returns the name of the profile used.
    pub fn apply(&self, name: &str, vehicle: &mut Vehicle) -> &str {
        let profile = self.resolve(name);
        profile.apply(vehicle);
        profile.name()
    }

    /// Registered names, ordered the way lookups compare them.
    pub fn mode_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.values().map(|p| p.name()).collect();
        names.sort_by_cached_key(|name| normalize(name));
        names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::with_builtin_modes()
    }
}
