#![forbid(unsafe_code)]
//! scatter_brush: Surface-scatter placement engine for painting prototype
//! instances onto meshes and terrain.
//!
//! Modules:
//! - config: per-stroke placement policies (brush, stroke, scale, rotation, position)
//! - prefs: flat key/value configuration snapshots
//! - sampling: RNG helpers and uniform disc sampling
//! - surface: ray/hit types and the host-provided surface query boundary
//! - paint: candidate generation, reprojection, transform composition, stroke control
//!
//! The host supplies a [`crate::surface::SurfaceQuery`] for ray intersection and an
//! [`crate::paint::InstanceHost`] for instantiation and undo registration; the
//! engine owns everything in between.
pub mod config;
pub mod error;
pub mod paint;
pub mod prefs;
pub mod sampling;
pub mod surface;

/// Convenient re-exports for common types. Import with `use scatter_brush::prelude::*;`.
pub mod prelude {
    pub use crate::config::{
        BrushConfig, BrushMode, PositionConfig, PositionMode, RotationAlign, RotationConfig,
        RotationMode, ScaleConfig, ScaleMode, ScatterConfig, Span, StrokeConfig, StrokeMode,
    };
    pub use crate::error::{Error, Result};
    pub use crate::paint::stroke::{PointerButton, PointerEvent, PointerEventKind, StrokeController};
    pub use crate::paint::{
        placement_pass, InstanceHandle, InstanceHost, PassResult, PlacedInstance, PrototypeId,
    };
    pub use crate::prefs::{MemoryPrefStore, PrefStore, PrefValue};
    pub use crate::sampling::{DiscSampling, UniformDiscSampling};
    pub use crate::surface::{HitSample, Ray, SurfaceHit, SurfaceId, SurfaceQuery, MAX_RAY_DISTANCE};
}
