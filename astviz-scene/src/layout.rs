//! Recursive placement of nodes in layout space.
//!
//! Children sit one fixed vertical step below their parent, centred on the
//! parent's x, and each level halves the horizontal step of the level
//! above. This approximates subtree-width-aware layout: deep or unbalanced
//! trees can still place cousins on top of each other.

use iced_core::Point;

use crate::node::Node;

/// Horizontal and vertical distances between a parent and its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub x_step: f32,
    pub y_step: f32,
}

impl Spacing {
    pub fn new(x_step: f32, y_step: f32) -> Self {
        Self { x_step, y_step }
    }

    /// Spacing used for the children of a child node.
    pub fn next_level(self) -> Self {
        Self {
            x_step: self.x_step / 2.0,
            ..self
        }
    }
}

/// Anchors for `count` children of a node anchored at `anchor`.
pub fn child_anchors(
    anchor: Point,
    count: usize,
    spacing: Spacing,
) -> impl Iterator<Item = Point> {
    let span = spacing.x_step * count.saturating_sub(1) as f32;
    let start_x = anchor.x - span / 2.0;
    let y = anchor.y + spacing.y_step;
    (0..count).map(move |index| {
        Point::new(start_x + spacing.x_step * index as f32, y)
    })
}

/// Layout-space position of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub depth: usize,
    /// Index of the parent placement, `None` for the root.
    pub parent: Option<usize>,
}

/// Place `root` at `anchor` and every descendant beneath it.
///
/// Placements are returned in parent-before-children order, so index `i`
/// belongs to the `i`-th node of [`Node::walk`].
pub fn layout(root: &Node, anchor: Point, spacing: Spacing) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(root.node_count());
    place(root, anchor, spacing, 0, None, &mut placements);
    placements
}

fn place(
    node: &Node,
    anchor: Point,
    spacing: Spacing,
    depth: usize,
    parent: Option<usize>,
    placements: &mut Vec<Placement>,
) {
    let index = placements.len();
    placements.push(Placement {
        position: anchor,
        depth,
        parent,
    });

    let anchors = child_anchors(anchor, node.children().len(), spacing);
    for (child, child_anchor) in node.children().iter().zip(anchors) {
        place(
            child,
            child_anchor,
            spacing.next_level(),
            depth + 1,
            Some(index),
            placements,
        );
    }
}
