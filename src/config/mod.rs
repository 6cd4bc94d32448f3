pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid-drive")]
#[command(about = "Driving-mode mapping and SOLID principle demos")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "TOML file with extra driving modes")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply a driving mode to the vehicle and print it
    Mode {
        name: String,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
    /// List registered driving modes
    Modes,
    /// Run the demo for one principle
    Demo {
        #[arg(value_enum)]
        principle: Principle,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Command::Mode { name, .. } = &self.command {
            validate_non_empty_string("mode", name)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_command() {
        let config =
            CliConfig::try_parse_from(["solid-drive", "mode", "sport", "--format", "json"]).unwrap();
        assert!(matches!(
            config.command,
            Command::Mode { ref name, format: ReportFormat::Json } if name == "sport"
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["solid-drive", "modes", "--config", "modes.toml", "-v"])
                .unwrap();
        assert_eq!(config.config.as_deref(), Some("modes.toml"));
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_demo_command() {
        let config = CliConfig::try_parse_from(["solid-drive", "demo", "lsp"]).unwrap();
        assert!(matches!(
            config.command,
            Command::Demo {
                principle: Principle::Lsp
            }
        ));
        assert!(CliConfig::try_parse_from(["solid-drive", "demo", "xyz"]).is_err());
    }

    #[test]
    fn test_blank_mode_fails_validation() {
        let config = CliConfig::try_parse_from(["solid-drive", "mode", " "]).unwrap();
        assert!(config.validate().is_err());
    }
}
