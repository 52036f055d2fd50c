//! Transform composition for landed candidates.
//!
//! The composition order is fixed and not commutative:
//! 1. base position at the landed point,
//! 2. optional up-axis alignment to the landed normal,
//! 3. component-wise scale factor,
//! 4. incremental Euler rotation in the instance's local frame,
//! 5. position offset expressed in the local frame as it stands after step 4.
//!
//! Because the offset is rotated by the final orientation before being added,
//! alignment and rotation settings change where the same offset lands in
//! world space.
use glam::{EulerRot, Quat, Vec3};
use rand::RngCore;

use crate::config::{RotationAlign, ScatterConfig};
use crate::paint::PlacedInstance;
use crate::surface::HitSample;

/// Compose the final transform for one landed candidate.
///
/// Draws scale, then rotation, then offset from `rng`, so a seeded RNG
/// reproduces identical instances.
pub fn compose<R: RngCore>(
    landed: &HitSample,
    config: &ScatterConfig,
    rng: &mut R,
) -> PlacedInstance {
    let mut rotation = match config.rotation.align {
        RotationAlign::CanvasNormal => Quat::from_rotation_arc(Vec3::Y, landed.normal),
        RotationAlign::NoAlign => Quat::IDENTITY,
    };

    let scale = config.scale.sample_factor(rng);

    let euler = config.rotation.sample_euler_degrees(rng);
    let delta = Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    );
    // Right-multiplication applies the increment in the already-aligned frame.
    rotation *= delta;

    let offset = config.position.sample_offset(rng);
    let position = landed.point + rotation * offset;

    PlacedInstance {
        position,
        rotation,
        scale,
    }
}
