//! Per-stroke placement policies: brush shape, stroke retriggering, and the
//! scale, rotation, and position distributions applied to each instance.
//!
//! [`ScatterConfig`] is a pure value with no identity. The stroke controller
//! snapshots it at the start of each placement pass, so edits made mid-stroke
//! only affect subsequent passes.
use glam::Vec3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::sample_range;

/// Shape of one placement pass: a single point or a filled disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrushMode {
    Pen,
    #[default]
    Brush,
}

/// When a held drag retriggers placement passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeMode {
    OnClick,
    #[default]
    OnHold,
}

/// How each instance's scale factor is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    #[default]
    FixedUniform,
    FixedNonUniform,
    RandomUniform,
    RandomNonUniform,
}

/// How each instance's incremental rotation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationMode {
    #[default]
    Fixed,
    Random,
}

/// Whether the instance's up-axis is aligned to the landed surface normal
/// before any incremental rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationAlign {
    NoAlign,
    #[default]
    CanvasNormal,
}

/// How each instance's local-frame position offset is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionMode {
    #[default]
    Fixed,
    Random,
}

/// An inclusive scalar range for the random placement policies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a uniform sample between the endpoints as given.
    ///
    /// `min == max` degenerates to the constant. Inverted endpoints are not
    /// swapped here; [`ScatterConfig::validate`] rejects them up front.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f32 {
        sample_range(self.min, self.max, rng)
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Brush shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrushConfig {
    pub mode: BrushMode,
    /// Disc radius in world units. Must be > 0.
    pub radius: f32,
    /// Candidates per unit of disc radius. Must be >= 1.
    pub density: i32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            mode: BrushMode::default(),
            radius: 1.0,
            density: 10,
        }
    }
}

impl BrushConfig {
    /// Number of candidates one placement pass generates.
    ///
    /// Pen always produces exactly one; Brush produces
    /// `floor(pi * radius * density) + 1`.
    pub fn candidate_count(&self) -> usize {
        match self.mode {
            BrushMode::Pen => 1,
            BrushMode::Brush => {
                (std::f32::consts::PI * self.radius * self.density as f32) as usize + 1
            }
        }
    }
}

/// Stroke retrigger parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeConfig {
    pub mode: StrokeMode,
    /// Brush-mode spacing as a percentage of the brush diameter, in [1, 100].
    pub spacing_percent: i32,
    /// Pen-mode spacing in world units. Must be > 0.
    pub spacing_units: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            mode: StrokeMode::default(),
            spacing_percent: 30,
            spacing_units: 1.0,
        }
    }
}

/// Scale policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleConfig {
    pub mode: ScaleMode,
    pub uniform_factor: f32,
    pub non_uniform_factor: Vec3,
    pub uniform: Span,
    pub x: Span,
    pub y: Span,
    pub z: Span,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            mode: ScaleMode::default(),
            uniform_factor: 1.0,
            non_uniform_factor: Vec3::ONE,
            uniform: Span::new(0.5, 2.0),
            x: Span::new(0.5, 2.0),
            y: Span::new(0.5, 2.0),
            z: Span::new(0.5, 2.0),
        }
    }
}

impl ScaleConfig {
    /// Component-wise scale factor for one instance.
    pub fn sample_factor(&self, rng: &mut dyn RngCore) -> Vec3 {
        match self.mode {
            ScaleMode::FixedUniform => Vec3::splat(self.uniform_factor),
            ScaleMode::FixedNonUniform => self.non_uniform_factor,
            ScaleMode::RandomUniform => Vec3::splat(self.uniform.sample(rng)),
            ScaleMode::RandomNonUniform => Vec3::new(
                self.x.sample(rng),
                self.y.sample(rng),
                self.z.sample(rng),
            ),
        }
    }
}

/// Rotation policy. Angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationConfig {
    pub mode: RotationMode,
    pub align: RotationAlign,
    pub euler_degrees: Vec3,
    pub x: Span,
    pub y: Span,
    pub z: Span,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            mode: RotationMode::default(),
            align: RotationAlign::default(),
            euler_degrees: Vec3::ZERO,
            x: Span::new(0.0, 360.0),
            y: Span::new(0.0, 360.0),
            z: Span::new(0.0, 360.0),
        }
    }
}

impl RotationConfig {
    /// Incremental Euler rotation for one instance, in degrees.
    pub fn sample_euler_degrees(&self, rng: &mut dyn RngCore) -> Vec3 {
        match self.mode {
            RotationMode::Fixed => self.euler_degrees,
            RotationMode::Random => Vec3::new(
                self.x.sample(rng),
                self.y.sample(rng),
                self.z.sample(rng),
            ),
        }
    }
}

/// Position offset policy, expressed in the instance's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionConfig {
    pub mode: PositionMode,
    pub offset: Vec3,
    pub x: Span,
    pub y: Span,
    pub z: Span,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            mode: PositionMode::default(),
            offset: Vec3::ZERO,
            x: Span::new(0.0, 0.0),
            y: Span::new(0.0, 0.0),
            z: Span::new(0.0, 0.0),
        }
    }
}

impl PositionConfig {
    /// Local-frame position offset for one instance.
    pub fn sample_offset(&self, rng: &mut dyn RngCore) -> Vec3 {
        match self.mode {
            PositionMode::Fixed => self.offset,
            PositionMode::Random => Vec3::new(
                self.x.sample(rng),
                self.y.sample(rng),
                self.z.sample(rng),
            ),
        }
    }
}

/// All placement parameters for one stroke, grouped by policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterConfig {
    pub brush: BrushConfig,
    pub stroke: StrokeConfig,
    pub scale: ScaleConfig,
    pub rotation: RotationConfig,
    pub position: PositionConfig,
}

impl ScatterConfig {
    /// Creates a new [`ScatterConfig`] with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the brush policy.
    pub fn with_brush(mut self, brush: BrushConfig) -> Self {
        self.brush = brush;
        self
    }

    /// Sets the stroke policy.
    pub fn with_stroke(mut self, stroke: StrokeConfig) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the scale policy.
    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the rotation policy.
    pub fn with_rotation(mut self, rotation: RotationConfig) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the position policy.
    pub fn with_position(mut self, position: PositionConfig) -> Self {
        self.position = position;
        self
    }

    /// Drag distance that retriggers a placement pass while holding.
    ///
    /// Brush mode: `2 * radius * spacing_percent / 100` (a fraction of the
    /// brush diameter). Pen mode: `spacing_units`.
    pub fn travel_threshold(&self) -> f32 {
        match self.brush.mode {
            BrushMode::Brush => 2.0 * self.brush.radius * self.stroke.spacing_percent as f32 / 100.0,
            BrushMode::Pen => self.stroke.spacing_units,
        }
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Random ranges are only checked for the modes that actually read them,
    /// so stale bounds on an inactive policy do not block a stroke.
    pub fn validate(&self) -> Result<()> {
        if !(self.brush.radius > 0.0) {
            return Err(Error::InvalidConfig("brush radius must be > 0".into()));
        }
        if self.brush.density < 1 {
            return Err(Error::InvalidConfig("brush density must be >= 1".into()));
        }
        if !(1..=100).contains(&self.stroke.spacing_percent) {
            return Err(Error::InvalidConfig(
                "stroke spacing percent must be in [1, 100]".into(),
            ));
        }
        if !(self.stroke.spacing_units > 0.0) {
            return Err(Error::InvalidConfig(
                "stroke spacing units must be > 0".into(),
            ));
        }

        match self.scale.mode {
            ScaleMode::RandomUniform if !self.scale.uniform.is_ordered() => {
                return Err(Error::InvalidConfig("scale range min must be <= max".into()));
            }
            ScaleMode::RandomNonUniform
                if !(self.scale.x.is_ordered()
                    && self.scale.y.is_ordered()
                    && self.scale.z.is_ordered()) =>
            {
                return Err(Error::InvalidConfig(
                    "per-axis scale range min must be <= max".into(),
                ));
            }
            _ => {}
        }

        if self.rotation.mode == RotationMode::Random
            && !(self.rotation.x.is_ordered()
                && self.rotation.y.is_ordered()
                && self.rotation.z.is_ordered())
        {
            return Err(Error::InvalidConfig(
                "rotation range min must be <= max".into(),
            ));
        }

        if self.position.mode == PositionMode::Random
            && !(self.position.x.is_ordered()
                && self.position.y.is_ordered()
                && self.position.z.is_ordered())
        {
            return Err(Error::InvalidConfig(
                "position offset range min must be <= max".into(),
            ));
        }

        Ok(())
    }
}
