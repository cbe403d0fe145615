//! Tracing configuration
//! 日志追踪配置
//!
//! - **Development / 开发**: debug level
//! - **Production / 生产**: info level
//! - `RUST_LOG` overrides both / `RUST_LOG` 优先
//!
//! Logs go to stderr so command output on stdout stays clean.
//! 日志写入 stderr，stdout 只保留命令输出。

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        // Connection pool chatter drowns the request logs.
        "hyper_util=info".to_string(),
        "reqwest=info".to_string(),
        if is_dev {
            "cad_infra=debug"
        } else {
            "cad_infra=info"
        }
        .to_string(),
    ]
}

/// Install the global subscriber. Call once, before any logging.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
