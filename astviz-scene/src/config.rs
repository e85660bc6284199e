use iced_core::Point;

use crate::animation;
use crate::layout::Spacing;
use crate::viewport;

/// Geometry and timing constants for drawing the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Layout-space position of the root node.
    pub root_anchor: Point,
    /// Spacing below the root; the horizontal step halves per level.
    pub spacing: Spacing,
    pub node_radius: f32,
    pub font_size: f32,
    pub edge_thickness: f32,
    /// Animation progress added per frame.
    pub animation_step: f32,
    /// Zoom change per wheel tick.
    pub zoom_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            root_anchor: Point::new(600.0, 100.0),
            spacing: Spacing::new(1200.0, 200.0),
            node_radius: 40.0,
            font_size: 10.0,
            edge_thickness: 2.0,
            animation_step: animation::DEFAULT_STEP,
            zoom_speed: viewport::DEFAULT_ZOOM_SPEED,
        }
    }
}
