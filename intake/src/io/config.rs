//! Drill configuration stored in `intake.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::rules::Bounds;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "intake.toml";

/// Drill configuration (TOML).
///
/// Every field is optional in the file; missing fields take the values the
/// drills are documented with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntakeConfig {
    pub student: StudentLimits,
    pub age: AgeConfig,
    pub number: NumberConfig,
}

/// Acceptance ranges for the add-student flow. The grade range is shared with
/// the `grade` drill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StudentLimits {
    pub age_min: i64,
    pub age_max: i64,
    pub grade_min: f64,
    pub grade_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgeConfig {
    /// Ages above this are "unrealistic".
    pub max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NumberConfig {
    /// Value used when the `number` drill gets an empty line.
    pub default: f64,
}

impl Default for StudentLimits {
    fn default() -> Self {
        Self {
            age_min: 5,
            age_max: 60,
            grade_min: 0.0,
            grade_max: 100.0,
        }
    }
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self { max: 120 }
    }
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self { default: 10.0 }
    }
}

impl StudentLimits {
    pub fn age_bounds(&self) -> Bounds<i64> {
        Bounds::new(self.age_min, self.age_max)
    }

    pub fn grade_bounds(&self) -> Bounds<f64> {
        Bounds::new(self.grade_min, self.grade_max)
    }
}

impl IntakeConfig {
    pub fn validate(&self) -> Result<()> {
        let student = &self.student;
        if student.age_min < 0 {
            return Err(anyhow!("student.age_min must be >= 0"));
        }
        if student.age_min > student.age_max {
            return Err(anyhow!("student.age_min must be <= student.age_max"));
        }
        if !student.grade_min.is_finite() || !student.grade_max.is_finite() {
            return Err(anyhow!("student grade bounds must be finite"));
        }
        if student.grade_min > student.grade_max {
            return Err(anyhow!("student.grade_min must be <= student.grade_max"));
        }
        if self.age.max < 0 {
            return Err(anyhow!("age.max must be >= 0"));
        }
        if !self.number.default.is_finite() {
            return Err(anyhow!("number.default must be finite"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `IntakeConfig::default()`.
pub fn load_config(path: &Path) -> Result<IntakeConfig> {
    if !path.exists() {
        let cfg = IntakeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: IntakeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &IntakeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
