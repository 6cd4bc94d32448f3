use anyhow::Context;
use clap::Parser;
use solid_drive::config::{Command, Principle, ReportFormat};
use solid_drive::principles::{dip, isp, lsp, ocp, srp};
use solid_drive::utils::{logger, validation::Validate};
use solid_drive::{CliConfig, DriveSession, SolidError};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting solid-drive");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.downcast_ref::<SolidError>() {
                Some(err) => {
                    tracing::error!(
                        "❌ {:#} (Category: {:?}, Severity: {:?})",
                        e,
                        err.category(),
                        err.severity()
                    );
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 建議: {}", err.recovery_suggestion());
                    err.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<String> {
    match &config.command {
        Command::Mode { name, format } => {
            let mut session = load_session(config)?;
            session.select_mode(name);
            let output = match format {
                ReportFormat::Text => session.report(&srp::TextReporter)?,
                ReportFormat::Json => session.report(&srp::JsonReporter { pretty: true })?,
            };
            Ok(output)
        }
        Command::Modes => Ok(load_session(config)?.describe_modes()?.join("\n")),
        Command::Demo { principle } => {
            run_demo(*principle).with_context(|| format!("{:?} demo failed", principle))?;
            Ok(String::new())
        }
    }
}

fn load_session(config: &CliConfig) -> anyhow::Result<DriveSession> {
    let path = config.config.as_deref().map(Path::new);
    Ok(DriveSession::load(path)?)
}

fn run_demo(principle: Principle) -> solid_drive::Result<()> {
    match principle {
        Principle::Srp => srp::demo(),
        Principle::Ocp => ocp::demo(),
        Principle::Lsp => lsp::demo(),
        Principle::Isp => isp::demo(),
        Principle::Dip => dip::demo(),
    }
}
