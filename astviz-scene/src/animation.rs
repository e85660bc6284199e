//! Entrance animation: per-node progress and elastic easing.

use std::f32::consts::PI;

use crate::node::Node;

/// Progress added to a node on every rendered frame.
pub const DEFAULT_STEP: f32 = 0.05;

const ELASTIC_PERIOD: f32 = 0.3;

/// Elastic ease-out: overshoots past `1` and settles back.
///
/// Exact at the boundaries: `ease_elastic_out(0) == 0` and
/// `ease_elastic_out(1) == 1`.
pub fn ease_elastic_out(t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t.clamp(0.0, 1.0);
    }

    let p = ELASTIC_PERIOD;
    2f32.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
}

/// Advance a node's progress by `step`, clamped to `1`, and return the
/// eased visual scale for this frame.
pub fn advance(node: &mut Node, step: f32) -> f32 {
    node.animation_progress =
        (node.animation_progress + step.max(0.0)).min(1.0);
    ease_elastic_out(node.animation_progress)
}
