//! Ray and hit types, plus the host-provided surface query boundary.
//!
//! The engine never intersects geometry itself: the host wraps its collider,
//! mesh, or terrain in a [`SurfaceQuery`] scoped to the designated surface for
//! the duration of a tool session. Hits carry a [`SurfaceId`] so strays
//! against other objects can be rejected by identity.
use glam::Vec3;

/// Maximum ray length used for every cast the engine performs.
pub const MAX_RAY_DISTANCE: f32 = 100_000.0;

/// A ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Direction of travel. Expected to be unit length.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// Opaque identity of a raycastable surface, compared against each hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceId(pub u64);

/// A ray intersection reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Surface normal at the intersection. Expected to be unit length.
    pub normal: Vec3,
    /// Identity of the object that was hit.
    pub surface: SurfaceId,
}

/// The most recent valid intersection against the designated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSample {
    pub point: Vec3,
    /// Unit-length surface normal at `point`.
    pub normal: Vec3,
}

impl From<SurfaceHit> for HitSample {
    fn from(hit: SurfaceHit) -> Self {
        Self {
            point: hit.point,
            normal: hit.normal,
        }
    }
}

/// Host-provided ray intersection against the designated surface.
///
/// Treated as read-only and side-effect free; the engine may cast any number
/// of rays per pointer event.
pub trait SurfaceQuery {
    fn cast(&self, ray: Ray, max_distance: f32) -> Option<SurfaceHit>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_sample_from_surface_hit_drops_identity() {
        let hit = SurfaceHit {
            point: Vec3::new(1.0, 2.0, 3.0),
            normal: Vec3::Y,
            surface: SurfaceId(7),
        };
        let sample = HitSample::from(hit);
        assert_eq!(sample.point, hit.point);
        assert_eq!(sample.normal, hit.normal);
    }

    #[test]
    fn surface_ids_compare_by_value() {
        assert_eq!(SurfaceId(1), SurfaceId(1));
        assert_ne!(SurfaceId(1), SurfaceId(2));
    }
}
