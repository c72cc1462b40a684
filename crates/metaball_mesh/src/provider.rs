//! Source providers - where metaball positions come from each cycle.

use glam::Vec3;

use crate::constants::DEFAULT_RADIUS;

/// Supplies metaball centres (in a stable order) and the shared radius.
///
/// Hosts implement this to drive the field from their own simulation.
pub trait SourceProvider {
  /// Current centres.
  fn positions(&self) -> &[Vec3];

  /// Radius shared by every source. Must be finite and positive.
  fn radius(&self) -> f32;

  /// Step the provider forward by `dt` seconds.
  fn advance(&mut self, _dt: f32) {}
}

/// Fixed list of sources that never move.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticSources {
  positions: Vec<Vec3>,
  radius: f32,
}

impl StaticSources {
  pub fn new(positions: Vec<Vec3>, radius: f32) -> Self {
    Self { positions, radius }
  }
}

impl Default for StaticSources {
  fn default() -> Self {
    Self::new(Vec::new(), DEFAULT_RADIUS)
  }
}

impl SourceProvider for StaticSources {
  fn positions(&self) -> &[Vec3] {
    &self.positions
  }

  fn radius(&self) -> f32 {
    self.radius
  }
}

/// Per-axis sinusoidal motion: `center + amplitude * sin(frequency * t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Orbit {
  pub center: Vec3,
  pub amplitude: Vec3,
  pub frequency: Vec3,
  pub phase: Vec3,
}

impl Default for Orbit {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      amplitude: Vec3::ZERO,
      frequency: Vec3::ONE,
      phase: Vec3::ZERO,
    }
  }
}

impl Orbit {
  /// Stationary orbit at `center`.
  pub fn fixed(center: Vec3) -> Self {
    Self {
      center,
      ..Self::default()
    }
  }

  pub fn new(center: Vec3, amplitude: Vec3, frequency: Vec3, phase: Vec3) -> Self {
    Self {
      center,
      amplitude,
      frequency,
      phase,
    }
  }

  #[inline]
  pub fn position_at(&self, time: f32) -> Vec3 {
    let angle = self.frequency * time + self.phase;
    self.center + self.amplitude * Vec3::new(angle.x.sin(), angle.y.sin(), angle.z.sin())
  }
}

/// Sources moving along independent [`Orbit`]s.
#[derive(Clone, Debug)]
pub struct OrbitingSources {
  orbits: Vec<Orbit>,
  positions: Vec<Vec3>,
  radius: f32,
  time: f32,
}

impl OrbitingSources {
  pub fn new(orbits: Vec<Orbit>, radius: f32) -> Self {
    let positions = orbits.iter().map(|orbit| orbit.position_at(0.0)).collect();
    Self {
      orbits,
      positions,
      radius,
      time: 0.0,
    }
  }

  /// Five balls weaving around the origin, sized for a unit radius.
  pub fn swirl(radius: f32) -> Self {
    let s = radius;
    let orbits = vec![
      Orbit::new(
        Vec3::ZERO,
        Vec3::new(2.0, 1.5, 1.8) * s,
        Vec3::new(0.8, 0.6, 0.7),
        Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
      ),
      Orbit::new(
        Vec3::ZERO,
        Vec3::new(1.8, 1.2, 2.0) * s,
        Vec3::new(0.6, 0.9, 0.5),
        Vec3::new(2.0, 0.0, 1.0),
      ),
      Orbit::new(
        Vec3::ZERO,
        Vec3::new(1.5, 1.8, 1.2) * s,
        Vec3::new(1.0, 0.4, 0.8),
        Vec3::new(4.0, 3.0, 0.0),
      ),
      Orbit::new(
        Vec3::ZERO,
        Vec3::new(1.2, 1.5, 1.6) * s,
        Vec3::new(0.5, 1.1, 0.6),
        Vec3::new(1.5, 2.5, 0.5),
      ),
      Orbit::fixed(Vec3::ZERO),
    ];
    Self::new(orbits, radius)
  }

  pub fn orbits(&self) -> &[Orbit] {
    &self.orbits
  }

  /// Seconds elapsed since creation.
  pub fn time(&self) -> f32 {
    self.time
  }

  /// Jump to an absolute time.
  pub fn set_time(&mut self, time: f32) {
    self.time = time;
    for (position, orbit) in self.positions.iter_mut().zip(&self.orbits) {
      *position = orbit.position_at(time);
    }
  }
}

impl SourceProvider for OrbitingSources {
  fn positions(&self) -> &[Vec3] {
    &self.positions
  }

  fn radius(&self) -> f32 {
    self.radius
  }

  fn advance(&mut self, dt: f32) {
    self.set_time(self.time + dt);
  }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
