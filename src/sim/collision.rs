//! Pairwise collision tests and response.
//!
//! Tests are symmetric and exact in integer arithmetic. Squared
//! distances are widened to i64 so large radii cannot overflow.

use glam::IVec2;

use crate::dist_squared;
use crate::shape::{resolve_bounds, ShapeKind};
use crate::sim::body::{Body, Response};

/// True when the two bodies overlap (touching counts). Disabled bodies
/// never collide.
pub fn test(a: &Body, b: &Body) -> bool {
    if !a.collision_enabled || !b.collision_enabled {
        return false;
    }
    overlap(a.pos, a.shape.kind, b.pos, b.shape.kind)
}

fn overlap(a_pos: IVec2, a_kind: ShapeKind, b_pos: IVec2, b_kind: ShapeKind) -> bool {
    match (a_kind, b_kind) {
        (ShapeKind::Circle { radius: ra }, ShapeKind::Circle { radius: rb }) => {
            circle_circle(a_pos, ra, b_pos, rb)
        }
        (ShapeKind::Circle { radius }, ShapeKind::Rect { width, height, anchor }) => {
            let (tl, br) = resolve_bounds(b_pos, width, height, anchor);
            circle_rect(a_pos, radius, tl, br)
        }
        (ShapeKind::Rect { width, height, anchor }, ShapeKind::Circle { radius }) => {
            let (tl, br) = resolve_bounds(a_pos, width, height, anchor);
            circle_rect(b_pos, radius, tl, br)
        }
        (
            ShapeKind::Rect { width: wa, height: ha, anchor: aa },
            ShapeKind::Rect { width: wb, height: hb, anchor: ab },
        ) => {
            let (a_tl, a_br) = resolve_bounds(a_pos, wa, ha, aa);
            let (b_tl, b_br) = resolve_bounds(b_pos, wb, hb, ab);
            rect_rect(a_tl, a_br, b_tl, b_br)
        }
    }
}

fn circle_circle(ca: IVec2, ra: i32, cb: IVec2, rb: i32) -> bool {
    let reach = (ra + rb) as i64;
    dist_squared(ca, cb) <= reach * reach
}

fn circle_rect(center: IVec2, radius: i32, tl: IVec2, br: IVec2) -> bool {
    let closest = center.clamp(tl, br);
    dist_squared(center, closest) <= (radius as i64) * (radius as i64)
}

fn rect_rect(a_tl: IVec2, a_br: IVec2, b_tl: IVec2, b_br: IVec2) -> bool {
    a_tl.x <= b_br.x && b_tl.x <= a_br.x && a_tl.y <= b_br.y && b_tl.y <= a_br.y
}

/// Test the pair and, on contact, let each body react to the other.
/// Returns whether contact happened so the caller can score it.
pub fn resolve(a: &mut Body, b: &mut Body) -> bool {
    if !test(a, b) {
        return false;
    }
    log::trace!("contact at {} / {}", a.pos, b.pos);
    respond(a, b);
    respond(b, a);
    true
}

fn respond(body: &mut Body, other: &Body) {
    match body.response {
        Response::Ignore => {}
        Response::Bounce => bounce(body, other),
    }
}

/// Reflect `body` off `other`. Against a rect the short dimension picks
/// the reflection axis: a wide flat rect flips y, a tall thin one flips
/// x. Against a circle the axis of largest center separation flips.
fn bounce(body: &mut Body, other: &Body) {
    match other.shape.kind {
        ShapeKind::Rect { width, height, .. } => {
            if height > width {
                body.vel.x = -body.vel.x;
            } else {
                body.vel.y = -body.vel.y;
            }
        }
        ShapeKind::Circle { .. } => {
            let delta = body.pos - other.pos;
            if delta.x.abs() > delta.y.abs() {
                body.vel.x = -body.vel.x;
            } else {
                body.vel.y = -body.vel.y;
            }
        }
    }
}
