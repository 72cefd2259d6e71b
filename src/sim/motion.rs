//! Motion integration and wall reflection
//!
//! Each axis is handled on its own. A shape that leaves the canvas has that
//! velocity component flipped and is clamped back inside, so a fast shape
//! cannot stay stuck outside the edge and jitter.

use glam::Vec2;

use super::state::Shape;

/// Advance a shape by one tick inside a canvas of the given size.
///
/// Returns `true` if the shape bounced off any edge.
pub fn integrate(shape: &mut Shape, canvas: Vec2) -> bool {
    let extent = shape.geometry.extent();
    let mut pos = shape.pos + shape.vel;
    let mut vel = shape.vel;

    let bounced_x = reflect_axis(&mut pos.x, &mut vel.x, extent.x, canvas.x);
    let bounced_y = reflect_axis(&mut pos.y, &mut vel.y, extent.y, canvas.y);

    shape.pos = pos;
    shape.vel = vel;
    bounced_x || bounced_y
}

/// Reflect one axis off `[0, limit]`
#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32, limit: f32) -> bool {
    if *pos < 0.0 || *pos + extent > limit {
        *vel = -*vel;
        // Shapes larger than the canvas pin to the origin
        *pos = pos.clamp(0.0, (limit - extent).max(0.0));
        true
    } else {
        false
    }
}
