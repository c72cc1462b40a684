//! Configuration errors.
//!
//! The extraction hot path never fails; these are only raised when building
//! fields and extractors from user-supplied parameters.

/// Invalid tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
  /// Grid cell side length must be finite and strictly positive.
  #[error("cell size must be finite and > 0, got {0}")]
  InvalidCellSize(f32),

  /// Finite-difference step for normals must be finite and strictly positive.
  #[error("normal epsilon must be finite and > 0, got {0}")]
  InvalidNormalEpsilon(f32),

  /// Metaball radius must be finite and strictly positive.
  #[error("radius must be finite and > 0, got {0}")]
  InvalidRadius(f32),

  /// Border margin multiplier must be finite and non-negative.
  #[error("border margin must be finite and >= 0, got {0}")]
  InvalidBorderMargin(f32),
}

/// Check that a value is finite and strictly positive.
pub(crate) fn positive(value: f32, err: fn(f32) -> ConfigError) -> Result<f32, ConfigError> {
  if value.is_finite() && value > 0.0 {
    Ok(value)
  } else {
    Err(err(value))
  }
}
