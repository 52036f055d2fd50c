//! Candidate generation for one placement pass.
//!
//! Candidates are sampled as 2D offsets in the tangent plane of the stroke
//! hit, embedded into world space, and pushed one unit out along the hit
//! normal. The push puts every candidate origin strictly outside the surface
//! so the reprojection ray can detect a true crossing even on locally concave
//! geometry.
use glam::{Quat, Vec3};
use rand::RngCore;

use crate::config::{BrushConfig, BrushMode};
use crate::sampling::{DiscSampling, UniformDiscSampling};
use crate::surface::HitSample;

/// Generate the world-space candidate origins for one placement pass.
///
/// Pen mode yields exactly one candidate (the pushed-out hit point). Brush
/// mode yields `floor(pi * radius * density) + 1` independent uniform disc
/// samples. The returned set is never empty.
pub fn generate<R: RngCore>(hit: HitSample, brush: &BrushConfig, rng: &mut R) -> Vec<Vec3> {
    // Frame whose forward axis is the hit normal; the disc lives in its XY plane.
    let frame = Quat::from_rotation_arc(Vec3::Z, hit.normal);

    let offsets: Vec<Vec3> = match brush.mode {
        BrushMode::Pen => vec![Vec3::ZERO],
        BrushMode::Brush => UniformDiscSampling
            .generate(brush.radius, brush.candidate_count(), rng)
            .into_iter()
            .map(|p| Vec3::new(p.x, p.y, 0.0))
            .collect(),
    };

    offsets
        .into_iter()
        .map(|offset| frame * offset + hit.point + hit.normal)
        .collect()
}
