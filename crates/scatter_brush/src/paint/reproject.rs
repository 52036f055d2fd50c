//! Reprojection of tangent-plane candidates onto the true surface.
use glam::Vec3;
use tracing::trace;

use crate::surface::{HitSample, Ray, SurfaceId, SurfaceQuery, MAX_RAY_DISTANCE};

/// Land one candidate on the designated surface.
///
/// Casts from `candidate` along `inward` (the inverse of the stroke hit
/// normal, not a per-candidate normal). Returns `None` when the ray misses or
/// when the hit belongs to a different surface, which discards candidates
/// outside the mesh silhouette or overhanging onto other objects.
pub fn land(
    candidate: Vec3,
    inward: Vec3,
    surface: SurfaceId,
    query: &dyn SurfaceQuery,
) -> Option<HitSample> {
    let hit = query.cast(Ray::new(candidate, inward), MAX_RAY_DISTANCE)?;
    if hit.surface != surface {
        trace!(surface = ?hit.surface, "candidate landed on a different surface; dropped");
        return None;
    }
    Some(hit.into())
}
