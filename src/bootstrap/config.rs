//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Merge built-in defaults, the optional `--config` TOML file and `CADASTRO__` env vars
//! - 合并内置默认值、可选的 `--config` TOML 文件和 `CADASTRO__` 环境变量
//!
//! ## Prohibited / 禁止事项
//!
//! - No validation beyond what deserialization enforces
//! - 除反序列化本身的约束外不做任何校验

use std::path::Path;

use anyhow::Context;
use cad_infra::config::{load_config, CadastroConfig};

pub fn resolve_config(config_path: Option<&Path>) -> anyhow::Result<CadastroConfig> {
    match config_path {
        Some(path) => load_config(Some(path))
            .with_context(|| format!("Failed to load config file: {}", path.display())),
        None => load_config(None).context("Failed to load default config"),
    }
}
