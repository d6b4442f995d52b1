//! Constellation field math
//!
//! Pure per-frame computations for the animator: sinusoidal jitter offsets
//! and the link pass between nearby points. Kept free of any UI types so the
//! frame semantics are unit-testable.

use kurbo::{Point, Vec2};

/// Radius of each drawn point, in pixels.
pub const POINT_RADIUS: f64 = 2.0;

/// Jitter amplitude: each axis oscillates within +/- this many pixels.
pub const FLOAT_AMPL: f64 = 7.0;

/// Links are drawn between base positions closer than this, in pixels.
pub const LINK_DIST: f64 = 70.0;

/// Spatial phase factor: nearby points oscillate near-phase, distant points
/// drift apart, because the phase term depends on the point's own coordinate.
const PHASE_SCALE: f64 = 0.01;

/// Jitter offset for a point at elapsed time `t` seconds.
///
/// Computed fresh every frame from the immutable base position; the stored
/// point is never mutated.
pub fn jitter_offset(p: Point, t: f64) -> Vec2 {
    Vec2::new(
        (t + p.x * PHASE_SCALE).sin() * FLOAT_AMPL,
        (t + p.y * PHASE_SCALE).cos() * FLOAT_AMPL,
    )
}

/// Whether two base positions are close enough to link.
pub fn within_link_distance(d: f64) -> bool {
    d < LINK_DIST
}

/// Link stroke opacity: 1 at distance 0, fading linearly to 0 at `LINK_DIST`.
pub fn link_opacity(d: f64) -> f64 {
    1.0 - d / LINK_DIST
}

/// One connecting line of the current frame.
///
/// `from` is the first point's jittered position, `to` the second point's
/// base position. The asymmetry is intentional: it reproduces the exact look
/// of the effect this was modeled on (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

/// Collect the links of one frame.
///
/// Each unordered pair is visited exactly once (j > i), so no line is ever
/// emitted twice. Distances are measured between base positions; jitter only
/// moves the drawn endpoint. O(n^2), fine at the tens-of-points scale.
pub fn frame_links(points: &[Point], t: f64) -> Vec<Link> {
    let mut links = Vec::new();
    for (i, p) in points.iter().enumerate() {
        let jittered = *p + jitter_offset(*p, t);
        for q in &points[i + 1..] {
            let d = p.distance(*q);
            if within_link_distance(d) {
                links.push(Link {
                    from: jittered,
                    to: *q,
                    opacity: link_opacity(d),
                });
            }
        }
    }
    links
}
