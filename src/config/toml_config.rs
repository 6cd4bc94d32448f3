use crate::domain::model::{ModeSettings, Vehicle};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_required_field,
    validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the row applied to unknown modes; `[fallback]` overrides it.
pub const FALLBACK_MODE_NAME: &str = "standard";

/// Extra driving modes loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModesConfig {
    pub vehicle: Option<SettingsConfig>,
    pub fallback: Option<SettingsConfig>,
    #[serde(default)]
    pub modes: Vec<ModeEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub power: Option<i32>,
    pub suspension_height: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeEntry {
    pub name: String,
    pub power: Option<i32>,
    pub suspension_height: Option<i32>,
}

impl SettingsConfig {
    fn to_settings(&self, section: &str) -> Result<ModeSettings> {
        let power = validate_required_field(&format!("{}.power", section), &self.power)?;
        let suspension_height = validate_required_field(
            &format!("{}.suspension_height", section),
            &self.suspension_height,
        )?;
        Ok(ModeSettings::new(*power, *suspension_height))
    }

    fn validate_section(&self, section: &str) -> Result<()> {
        let settings = self.to_settings(section)?;
        validate_non_negative(&format!("{}.power", section), settings.power)?;
        validate_non_negative(
            &format!("{}.suspension_height", section),
            settings.suspension_height,
        )
    }
}

impl ModeEntry {
    fn as_section(&self) -> SettingsConfig {
        SettingsConfig {
            power: self.power,
            suspension_height: self.suspension_height,
        }
    }
}

impl ModesConfig {
    /// 從 TOML 檔案載入模式設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read mode file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析模式設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 先處理環境變數替換，再交給 toml 解析
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ECO_POWER})
    ///
    /// 未設定的變數保持原樣，交由後續的 TOML 解析或驗證回報錯誤。
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Starting state for the vehicle, zeroed when the section is absent.
    pub fn initial_vehicle(&self) -> Result<Vehicle> {
        match &self.vehicle {
            Some(section) => {
                let settings = section.to_settings("vehicle")?;
                Ok(Vehicle::new(settings.power, settings.suspension_height))
            }
            None => Ok(Vehicle::default()),
        }
    }

    pub fn fallback_settings(&self) -> Result<Option<ModeSettings>> {
        self.fallback
            .as_ref()
            .map(|section| section.to_settings("fallback"))
            .transpose()
    }

    /// Mode names are returned trimmed.
    pub fn mode_settings(&self) -> Result<Vec<(&str, ModeSettings)>> {
        self.modes
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let settings = entry.as_section().to_settings(&format!("modes[{}]", i))?;
                Ok((entry.name.trim(), settings))
            })
            .collect()
    }
}

impl Validate for ModesConfig {
    /// 驗證設定的合理性
    fn validate(&self) -> Result<()> {
        if let Some(vehicle) = &self.vehicle {
            vehicle.validate_section("vehicle")?;
        }
        if let Some(fallback) = &self.fallback {
            fallback.validate_section("fallback")?;
        }

        for (i, entry) in self.modes.iter().enumerate() {
            validate_non_empty_string(&format!("modes[{}].name", i), &entry.name)?;
            entry.as_section().validate_section(&format!("modes[{}]", i))?;

            // 預設列只能有一個來源：[fallback] 或名為 standard 的 [[modes]]
            if self.fallback.is_some()
                && entry.name.trim().eq_ignore_ascii_case(FALLBACK_MODE_NAME)
            {
                return Err(SolidError::ConfigValidationError {
                    field: format!("modes[{}].name", i),
                    message: format!(
                        "'{}' is the fallback row and is already set by [fallback]",
                        FALLBACK_MODE_NAME
                    ),
                });
            }
        }

        validate_unique_names(self.modes.iter().map(|m| m.name.as_str()))
    }
}
