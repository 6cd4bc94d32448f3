use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設只顯示本 crate 的日誌；`RUST_LOG` 優先
fn mode_filter(verbose: bool) -> EnvFilter {
    let default_directives = if verbose {
        "solid_drive=debug,info"
    } else {
        "solid_drive=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Compact logs on stderr; stdout carries only command output.
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(mode_filter(verbose))
        .with(layer)
        .init();
}

pub fn init_json_logger() {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .json()
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(mode_filter(false))
        .with(layer)
        .init();
}

