//! Application bootstrap / 应用启动
//!
//! Config, tracing and wiring, then command dispatch.
//! 配置、日志追踪与依赖装配，然后分发命令。

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use run::run;
pub use wiring::wire_dependencies;
