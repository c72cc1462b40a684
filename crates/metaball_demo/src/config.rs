//! Demo configuration loaded from TOML.

use std::path::Path;

use anyhow::{Context, Result};
use metaball_mesh::{FieldConfig, MesherConfig, Orbit, OrbitingSources};
use serde::Deserialize;

/// Root configuration for the demo run.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
  /// Radius and border margin.
  pub field: FieldConfig,
  /// Cell size, normal step and normal mode.
  pub mesher: MesherConfig,
  /// Ball trajectories. Empty means the built-in swirl.
  pub balls: Vec<Orbit>,
}

impl DemoConfig {
  /// Load configuration from a TOML file.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Self::from_toml_str(&content)
  }

  pub fn from_toml_str(content: &str) -> Result<Self> {
    let config: DemoConfig =
      toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

    config.field.validate().context("Invalid [field] section")?;
    config.mesher.validate().context("Invalid [mesher] section")?;

    Ok(config)
  }

  /// Source provider described by this configuration.
  pub fn provider(&self) -> OrbitingSources {
    if self.balls.is_empty() {
      OrbitingSources::swirl(self.field.radius)
    } else {
      OrbitingSources::new(self.balls.clone(), self.field.radius)
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
