//! Flat key/value configuration snapshots.
//!
//! The host reads a [`ScatterConfig`] through [`ScatterConfig::load`] once
//! when the tool activates and writes it back through [`ScatterConfig::save`]
//! when it deactivates. Storage is host-provided via [`PrefStore`]; missing or
//! mistyped keys fall back to the documented defaults, so a fresh store loads
//! the default configuration.
use std::collections::HashMap;

use glam::Vec3;

use crate::config::{
    BrushMode, PositionMode, RotationAlign, RotationMode, ScaleMode, ScatterConfig, Span,
    StrokeMode,
};

/// A single stored preference value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefValue {
    Int(i32),
    Float(f32),
}

/// Host-provided flat key/value storage.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn set(&mut self, key: &str, value: PrefValue);
}

/// In-memory [`PrefStore`] backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefStore {
    values: HashMap<String, PrefValue>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_owned(), value);
    }
}

fn get_f32(store: &dyn PrefStore, key: &str, default: f32) -> f32 {
    match store.get(key) {
        Some(PrefValue::Float(v)) => v,
        _ => default,
    }
}

fn get_i32(store: &dyn PrefStore, key: &str, default: i32) -> i32 {
    match store.get(key) {
        Some(PrefValue::Int(v)) => v,
        _ => default,
    }
}

fn get_vec3(store: &dyn PrefStore, keys: [&str; 3], default: Vec3) -> Vec3 {
    Vec3::new(
        get_f32(store, keys[0], default.x),
        get_f32(store, keys[1], default.y),
        get_f32(store, keys[2], default.z),
    )
}

fn set_vec3(store: &mut dyn PrefStore, keys: [&str; 3], value: Vec3) {
    store.set(keys[0], PrefValue::Float(value.x));
    store.set(keys[1], PrefValue::Float(value.y));
    store.set(keys[2], PrefValue::Float(value.z));
}

fn get_span(store: &dyn PrefStore, min_key: &str, max_key: &str, default: Span) -> Span {
    Span::new(
        get_f32(store, min_key, default.min),
        get_f32(store, max_key, default.max),
    )
}

fn set_span(store: &mut dyn PrefStore, min_key: &str, max_key: &str, span: Span) {
    store.set(min_key, PrefValue::Float(span.min));
    store.set(max_key, PrefValue::Float(span.max));
}

// Mode enums are stored as small integers; unknown values fall back to the
// mode's default rather than failing the whole load.

impl BrushMode {
    fn from_index(index: i32) -> Self {
        match index {
            0 => BrushMode::Pen,
            1 => BrushMode::Brush,
            _ => BrushMode::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            BrushMode::Pen => 0,
            BrushMode::Brush => 1,
        }
    }
}

impl StrokeMode {
    fn from_index(index: i32) -> Self {
        match index {
            0 => StrokeMode::OnClick,
            1 => StrokeMode::OnHold,
            _ => StrokeMode::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            StrokeMode::OnClick => 0,
            StrokeMode::OnHold => 1,
        }
    }
}

impl ScaleMode {
    fn from_index(index: i32) -> Self {
        match index {
            0 => ScaleMode::FixedUniform,
            1 => ScaleMode::FixedNonUniform,
            2 => ScaleMode::RandomUniform,
            3 => ScaleMode::RandomNonUniform,
            _ => ScaleMode::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            ScaleMode::FixedUniform => 0,
            ScaleMode::FixedNonUniform => 1,
            ScaleMode::RandomUniform => 2,
            ScaleMode::RandomNonUniform => 3,
        }
    }
}

impl RotationMode {
    fn from_index(index: i32) -> Self {
        match index {
            0 => RotationMode::Fixed,
            1 => RotationMode::Random,
            _ => RotationMode::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            RotationMode::Fixed => 0,
            RotationMode::Random => 1,
        }
    }
}

impl RotationAlign {
    fn from_index(index: i32) -> Self {
        match index {
            0 => RotationAlign::NoAlign,
            1 => RotationAlign::CanvasNormal,
            _ => RotationAlign::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            RotationAlign::NoAlign => 0,
            RotationAlign::CanvasNormal => 1,
        }
    }
}

impl PositionMode {
    fn from_index(index: i32) -> Self {
        match index {
            0 => PositionMode::Fixed,
            1 => PositionMode::Random,
            _ => PositionMode::default(),
        }
    }

    fn index(self) -> i32 {
        match self {
            PositionMode::Fixed => 0,
            PositionMode::Random => 1,
        }
    }
}

impl ScatterConfig {
    /// Load a configuration snapshot, falling back to defaults per key.
    pub fn load(store: &dyn PrefStore) -> Self {
        let defaults = ScatterConfig::default();
        let mut config = defaults;

        config.brush.mode =
            BrushMode::from_index(get_i32(store, "BrushMode", defaults.brush.mode.index()));
        config.brush.radius = get_f32(store, "BrushRadius", defaults.brush.radius);
        config.brush.density = get_i32(store, "BrushDensity", defaults.brush.density);

        config.stroke.mode =
            StrokeMode::from_index(get_i32(store, "StrokeMode", defaults.stroke.mode.index()));
        config.stroke.spacing_percent =
            get_i32(store, "StrokeSpacing", defaults.stroke.spacing_percent);
        config.stroke.spacing_units =
            get_f32(store, "StrokeSpacingUnits", defaults.stroke.spacing_units);

        config.scale.mode =
            ScaleMode::from_index(get_i32(store, "ScaleMode", defaults.scale.mode.index()));
        config.scale.uniform_factor =
            get_f32(store, "ScaleUniformFactor", defaults.scale.uniform_factor);
        config.scale.non_uniform_factor = get_vec3(
            store,
            ["ScaleNUFX", "ScaleNUFY", "ScaleNUFZ"],
            defaults.scale.non_uniform_factor,
        );
        config.scale.uniform = get_span(store, "MinScale", "MaxScale", defaults.scale.uniform);
        config.scale.x = get_span(store, "MinXScale", "MaxXScale", defaults.scale.x);
        config.scale.y = get_span(store, "MinYScale", "MaxYScale", defaults.scale.y);
        config.scale.z = get_span(store, "MinZScale", "MaxZScale", defaults.scale.z);

        config.rotation.mode = RotationMode::from_index(get_i32(
            store,
            "RotationMode",
            defaults.rotation.mode.index(),
        ));
        config.rotation.align = RotationAlign::from_index(get_i32(
            store,
            "RotationAlign",
            defaults.rotation.align.index(),
        ));
        config.rotation.euler_degrees = get_vec3(
            store,
            ["EulerRotX", "EulerRotY", "EulerRotZ"],
            defaults.rotation.euler_degrees,
        );
        config.rotation.x = get_span(store, "MinRotX", "MaxRotX", defaults.rotation.x);
        config.rotation.y = get_span(store, "MinRotY", "MaxRotY", defaults.rotation.y);
        config.rotation.z = get_span(store, "MinRotZ", "MaxRotZ", defaults.rotation.z);

        config.position.mode = PositionMode::from_index(get_i32(
            store,
            "PositionMode",
            defaults.position.mode.index(),
        ));
        config.position.offset = get_vec3(
            store,
            ["OffsetFixedX", "OffsetFixedY", "OffsetFixedZ"],
            defaults.position.offset,
        );
        config.position.x = get_span(store, "MinXOffset", "MaxXOffset", defaults.position.x);
        config.position.y = get_span(store, "MinYOffset", "MaxYOffset", defaults.position.y);
        config.position.z = get_span(store, "MinZOffset", "MaxZOffset", defaults.position.z);

        config
    }

    /// Write every field of the configuration back to the store.
    pub fn save(&self, store: &mut dyn PrefStore) {
        store.set("BrushMode", PrefValue::Int(self.brush.mode.index()));
        store.set("BrushRadius", PrefValue::Float(self.brush.radius));
        store.set("BrushDensity", PrefValue::Int(self.brush.density));

        store.set("StrokeMode", PrefValue::Int(self.stroke.mode.index()));
        store.set("StrokeSpacing", PrefValue::Int(self.stroke.spacing_percent));
        store.set(
            "StrokeSpacingUnits",
            PrefValue::Float(self.stroke.spacing_units),
        );

        store.set("ScaleMode", PrefValue::Int(self.scale.mode.index()));
        store.set(
            "ScaleUniformFactor",
            PrefValue::Float(self.scale.uniform_factor),
        );
        set_vec3(
            store,
            ["ScaleNUFX", "ScaleNUFY", "ScaleNUFZ"],
            self.scale.non_uniform_factor,
        );
        set_span(store, "MinScale", "MaxScale", self.scale.uniform);
        set_span(store, "MinXScale", "MaxXScale", self.scale.x);
        set_span(store, "MinYScale", "MaxYScale", self.scale.y);
        set_span(store, "MinZScale", "MaxZScale", self.scale.z);

        store.set("RotationMode", PrefValue::Int(self.rotation.mode.index()));
        store.set("RotationAlign", PrefValue::Int(self.rotation.align.index()));
        set_vec3(
            store,
            ["EulerRotX", "EulerRotY", "EulerRotZ"],
            self.rotation.euler_degrees,
        );
        set_span(store, "MinRotX", "MaxRotX", self.rotation.x);
        set_span(store, "MinRotY", "MaxRotY", self.rotation.y);
        set_span(store, "MinRotZ", "MaxRotZ", self.rotation.z);

        store.set("PositionMode", PrefValue::Int(self.position.mode.index()));
        set_vec3(
            store,
            ["OffsetFixedX", "OffsetFixedY", "OffsetFixedZ"],
            self.position.offset,
        );
        set_span(store, "MinXOffset", "MaxXOffset", self.position.x);
        set_span(store, "MinYOffset", "MaxYOffset", self.position.y);
        set_span(store, "MinZOffset", "MaxZOffset", self.position.z);
    }
}
