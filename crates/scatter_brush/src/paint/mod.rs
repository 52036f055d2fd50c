//! Placement pipeline: candidate generation, reprojection onto the true
//! surface, transform composition, and the pointer-driven stroke controller.
use glam::{Quat, Vec3};
use rand::RngCore;
use tracing::debug;

use crate::config::ScatterConfig;
use crate::surface::{HitSample, SurfaceId, SurfaceQuery};

pub mod candidates;
pub mod reproject;
pub mod stroke;
pub mod transform;

/// Identifier of the prototype object instantiated for each landed candidate.
pub type PrototypeId = String;

/// Opaque handle to an instantiated engine object, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u64);

/// Final world transform for one placed instance.
///
/// `scale` is a factor the host applies on top of the prototype's own scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedInstance {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

/// Host collaborator that creates scene objects from placed instances.
///
/// Both methods are called at most once per instance. A `None` from
/// [`InstanceHost::instantiate`] means the instance is simply absent from the
/// scene; the engine does not retry.
pub trait InstanceHost {
    fn instantiate(
        &mut self,
        prototype: &PrototypeId,
        instance: &PlacedInstance,
    ) -> Option<InstanceHandle>;

    fn register_for_undo(&mut self, handle: InstanceHandle);
}

/// Outcome of one placement pass.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassResult {
    /// Candidates generated for the pass.
    pub candidates: usize,
    /// Candidates that landed and were instantiated.
    pub placed: usize,
    /// Candidates dropped by reprojection or host instantiation.
    pub rejected: usize,
}

/// Run one placement pass from a stroke hit.
///
/// Generates candidates in the tangent frame of `hit`, reprojects each one
/// along the inverse hit normal, composes a transform per landed candidate,
/// and hands it to the host. Each candidate is independent: a miss or a
/// failed instantiation never aborts the rest of the pass.
pub fn placement_pass<R: RngCore>(
    hit: HitSample,
    surface: SurfaceId,
    config: &ScatterConfig,
    prototype: &PrototypeId,
    query: &dyn SurfaceQuery,
    host: &mut dyn InstanceHost,
    rng: &mut R,
) -> PassResult {
    let points = candidates::generate(hit, &config.brush, rng);
    let inward = -hit.normal;

    let mut placed = 0;
    for candidate in &points {
        let Some(landed) = reproject::land(*candidate, inward, surface, query) else {
            continue;
        };
        let instance = transform::compose(&landed, config, rng);
        if let Some(handle) = host.instantiate(prototype, &instance) {
            host.register_for_undo(handle);
            placed += 1;
        }
    }

    let result = PassResult {
        candidates: points.len(),
        placed,
        rejected: points.len() - placed,
    };
    debug!(
        candidates = result.candidates,
        placed = result.placed,
        rejected = result.rejected,
        "placement pass finished"
    );

    result
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared test doubles for the pipeline tests.
    use super::*;
    use crate::surface::{Ray, SurfaceHit};

    /// Finite horizontal plane patch at a fixed height, with an optional
    /// backing surface underneath that carries a different identity.
    pub struct PlanePatchQuery {
        pub surface: SurfaceId,
        pub height: f32,
        pub half_extent: f32,
        pub backing: Option<(SurfaceId, f32)>,
    }

    impl PlanePatchQuery {
        pub fn new(surface: SurfaceId, height: f32, half_extent: f32) -> Self {
            Self {
                surface,
                height,
                half_extent,
                backing: None,
            }
        }

        pub fn with_backing(mut self, surface: SurfaceId, height: f32) -> Self {
            self.backing = Some((surface, height));
            self
        }

        fn cast_plane(
            ray: Ray,
            max_distance: f32,
            height: f32,
            half_extent: f32,
            surface: SurfaceId,
        ) -> Option<SurfaceHit> {
            if ray.dir.y.abs() < 1e-6 {
                return None;
            }
            let t = (height - ray.origin.y) / ray.dir.y;
            if t < 0.0 || t > max_distance {
                return None;
            }
            let point = ray.origin + ray.dir * t;
            if point.x.abs() > half_extent || point.z.abs() > half_extent {
                return None;
            }
            Some(SurfaceHit {
                point,
                normal: Vec3::Y,
                surface,
            })
        }
    }

    impl SurfaceQuery for PlanePatchQuery {
        fn cast(&self, ray: Ray, max_distance: f32) -> Option<SurfaceHit> {
            Self::cast_plane(ray, max_distance, self.height, self.half_extent, self.surface)
                .or_else(|| {
                    self.backing.and_then(|(surface, height)| {
                        Self::cast_plane(ray, max_distance, height, f32::INFINITY, surface)
                    })
                })
        }
    }

    /// Host double that collects instances and hands out sequential handles.
    #[derive(Default)]
    pub struct VecHost {
        pub instances: Vec<PlacedInstance>,
        pub undo: Vec<InstanceHandle>,
        pub fail_instantiate: bool,
        next_handle: u64,
    }

    impl VecHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail_instantiate: true,
                ..Self::default()
            }
        }
    }

    impl InstanceHost for VecHost {
        fn instantiate(
            &mut self,
            _prototype: &PrototypeId,
            instance: &PlacedInstance,
        ) -> Option<InstanceHandle> {
            if self.fail_instantiate {
                return None;
            }
            self.instances.push(*instance);
            let handle = InstanceHandle(self.next_handle);
            self.next_handle += 1;
            Some(handle)
        }

        fn register_for_undo(&mut self, handle: InstanceHandle) {
            self.undo.push(handle);
        }
    }
}
