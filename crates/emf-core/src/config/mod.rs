//! Limit configuration loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{EmfError, Result};

pub use schema::{EmfConfig, LimitsSection, OnExceed};

pub fn load_from_file(path: &str) -> Result<EmfConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EmfError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<EmfConfig> {
    let cfg: EmfConfig = serde_yaml::from_str(s)
        .map_err(|e| EmfError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
