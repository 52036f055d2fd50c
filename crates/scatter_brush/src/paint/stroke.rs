//! Pointer-driven stroke control.
//!
//! [`StrokeController`] turns a stream of pointer events into placement
//! passes. It owns the only mutable session state: the latest hit against the
//! designated surface and the travel accumulator that paces `OnHold` strokes.
//! The controller is idle until a cast lands on the surface, and everything
//! runs synchronously within the handling of one event.
//!
//! Retrigger pacing is distance based, so a held drag produces a trail of
//! discrete passes independent of frame rate: the accumulator sums the
//! Euclidean distance between successive drag hit points and fires a pass
//! once it reaches the configured spacing threshold.
use glam::Vec3;
use rand::RngCore;
use tracing::{debug, warn};

use crate::config::{ScatterConfig, StrokeMode};
use crate::error::Result;
use crate::paint::{placement_pass, InstanceHost, PassResult, PrototypeId};
use crate::surface::{HitSample, Ray, SurfaceId, SurfaceQuery, MAX_RAY_DISTANCE};

/// Mouse button carried by a pointer event. Only the primary button places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Drag,
    Up,
}

/// One pointer event, carrying the camera ray the host derived from the
/// screen position.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub button: PointerButton,
    pub ray: Ray,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, button: PointerButton, ray: Ray) -> Self {
        Self { kind, button, ray }
    }

    /// Primary-button `Move` event.
    pub fn moved(ray: Ray) -> Self {
        Self::new(PointerEventKind::Move, PointerButton::Primary, ray)
    }

    /// Primary-button `Down` event.
    pub fn down(ray: Ray) -> Self {
        Self::new(PointerEventKind::Down, PointerButton::Primary, ray)
    }

    /// Primary-button `Drag` event.
    pub fn drag(ray: Ray) -> Self {
        Self::new(PointerEventKind::Drag, PointerButton::Primary, ray)
    }

    /// Primary-button `Up` event.
    pub fn up(ray: Ray) -> Self {
        Self::new(PointerEventKind::Up, PointerButton::Primary, ray)
    }
}

/// Event-driven state machine deciding when to run placement passes.
pub struct StrokeController {
    surface: SurfaceId,
    config: ScatterConfig,
    prototype: Option<PrototypeId>,
    hit: Option<HitSample>,
    travel: f32,
    prev_point: Vec3,
}

impl StrokeController {
    /// Create a controller for one tool session on the designated surface.
    pub fn new(surface: SurfaceId, config: ScatterConfig) -> Self {
        Self {
            surface,
            config,
            prototype: None,
            hit: None,
            travel: 0.0,
            prev_point: Vec3::ZERO,
        }
    }

    /// Like [`StrokeController::new`], but validates the configuration first.
    pub fn try_new(surface: SurfaceId, config: ScatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(surface, config))
    }

    /// Sets the prototype placed by subsequent passes.
    pub fn with_prototype(mut self, prototype: impl Into<PrototypeId>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    pub fn set_prototype(&mut self, prototype: Option<PrototypeId>) {
        self.prototype = prototype;
    }

    /// Replaces the configuration; takes effect from the next pass.
    pub fn set_config(&mut self, config: ScatterConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Latest valid hit against the designated surface, if any.
    pub fn hit(&self) -> Option<HitSample> {
        self.hit
    }

    /// Accumulated drag distance since the last pass or pointer-up.
    pub fn travel(&self) -> f32 {
        self.travel
    }

    /// Process one pointer event, returning the result of the placement pass
    /// it triggered, if any.
    pub fn handle<R: RngCore>(
        &mut self,
        event: &PointerEvent,
        query: &dyn SurfaceQuery,
        host: &mut dyn InstanceHost,
        rng: &mut R,
    ) -> Option<PassResult> {
        match (event.kind, event.button) {
            (PointerEventKind::Move, _) => {
                if let Some(hit) = self.cast(event.ray, query) {
                    self.hit = Some(hit);
                }
                None
            }
            (PointerEventKind::Down, PointerButton::Primary) => {
                let hit = self.cast(event.ray, query)?;
                self.hit = Some(hit);
                self.prev_point = hit.point;
                self.run_pass(hit, query, host, rng)
            }
            (PointerEventKind::Drag, PointerButton::Primary)
                if self.config.stroke.mode == StrokeMode::OnHold =>
            {
                let hit = self.cast(event.ray, query)?;
                self.travel += self.prev_point.distance(hit.point);
                self.prev_point = hit.point;
                self.hit = Some(hit);

                if self.travel >= self.config.travel_threshold() {
                    let result = self.run_pass(hit, query, host, rng);
                    self.travel = 0.0;
                    result
                } else {
                    None
                }
            }
            (PointerEventKind::Up, PointerButton::Primary) => {
                // Ends the stroke even mid-threshold.
                self.travel = 0.0;
                None
            }
            _ => None,
        }
    }

    /// Cast against the designated surface, rejecting hits on anything else.
    fn cast(&self, ray: Ray, query: &dyn SurfaceQuery) -> Option<HitSample> {
        let hit = query.cast(ray, MAX_RAY_DISTANCE)?;
        (hit.surface == self.surface).then(|| hit.into())
    }

    fn run_pass<R: RngCore>(
        &self,
        hit: HitSample,
        query: &dyn SurfaceQuery,
        host: &mut dyn InstanceHost,
        rng: &mut R,
    ) -> Option<PassResult> {
        let Some(prototype) = &self.prototype else {
            warn!("no prototype configured; skipping placement pass");
            return None;
        };
        // Snapshot taken here: config edits mid-stroke affect later passes only.
        let snapshot = self.config;
        debug!(point = ?hit.point, "running placement pass");
        Some(placement_pass(
            hit,
            self.surface,
            &snapshot,
            prototype,
            query,
            host,
            rng,
        ))
    }
}
