//! Per-frame walk that turns the tree and view state into draw calls.

use iced_core::{Point, Size};

use crate::animation;
use crate::config::SceneConfig;
use crate::layout::{Placement, layout};
use crate::node::Node;
use crate::painter::Painter;
use crate::query::QueryInput;
use crate::style;
use crate::viewport::ViewTransform;

const TITLE: &str = "Abstract Syntax Tree";
const TITLE_FONT_SIZE: f32 = 40.0;
const TITLE_TOP: f32 = 20.0;
const TITLE_HUE_SPEED: f32 = 60.0;
const SEARCH_BOX_WIDTH: f32 = 300.0;
const SEARCH_BOX_HEIGHT: f32 = 40.0;
const SEARCH_FONT_SIZE: f32 = 20.0;
const HINT_FONT_SIZE: f32 = 15.0;
const USAGE: &str = "Type to search for nodes. Matching nodes and their \
                     ancestors will be highlighted in orange.";

/// Draw the whole tree, advancing every node's entrance animation.
///
/// Positions come from [`layout`]. Nodes are visited parent first,
/// children in order, so a node's connectors are drawn before its children.
pub fn render_tree(
    root: &mut Node,
    transform: &ViewTransform,
    config: &SceneConfig,
    painter: &mut impl Painter,
) {
    let placements = layout(root, config.root_anchor, config.spacing);
    let time = painter.now();
    let mut walk = Walk {
        placements: &placements,
        transform,
        config,
        time,
        painter,
    };
    walk.node(root, 0);
}

struct Walk<'a, P> {
    placements: &'a [Placement],
    transform: &'a ViewTransform,
    config: &'a SceneConfig,
    time: f32,
    painter: &'a mut P,
}

impl<P: Painter> Walk<'_, P> {
    /// Draw the node at pre-order `index` and its subtree. Returns the
    /// index following the subtree.
    fn node(&mut self, node: &mut Node, index: usize) -> usize {
        let zoom = self.transform.zoom;
        let screen = self.transform.to_screen(self.placements[index].position);
        let scale = animation::advance(node, self.config.animation_step);

        let base = if node.is_highlighted() {
            style::ORANGE
        } else {
            style::SKY_BLUE
        };
        let pulse = ((self.time * 2.0 + screen.x * 0.01).sin() + 1.0) * 0.5;
        let fill = style::lerp(base, style::DARK_BLUE, pulse);
        let radius = self.config.node_radius * zoom * scale;
        self.painter
            .fill_circle(screen, radius, fill, style::DARK_BLUE);
        self.painter.stroke_circle(screen, radius, style::WHITE);

        let font_size = (self.config.font_size * zoom * scale).floor();
        if font_size >= 1.0 {
            let width =
                self.painter.measure_text_width(node.label(), font_size);
            let origin = Point::new(
                screen.x - width / 2.0,
                screen.y - font_size / 2.0,
            );
            self.painter
                .draw_text(node.label(), origin, font_size, style::WHITE);
        }

        let highlighted = node.is_highlighted();
        let mut next = index + 1;
        for child in node.children_mut() {
            let child_screen =
                self.transform.to_screen(self.placements[next].position);
            let control = Point::new(
                (screen.x + child_screen.x) / 2.0,
                (screen.y + child_screen.y) / 2.0,
            );
            let color = if highlighted && child.is_highlighted() {
                style::ORANGE
            } else {
                style::fade(style::LIGHT_GRAY, 0.6)
            };
            self.painter.draw_quadratic_curve(
                screen,
                child_screen,
                control,
                self.config.edge_thickness * zoom,
                color,
            );

            next = self.node(child, next);
        }
        next
    }
}

/// Draw the title, search box and hints over the tree.
pub fn render_overlay(
    query: &QueryInput,
    screen: Size,
    painter: &mut impl Painter,
) {
    let time = painter.now();

    let title_color =
        style::from_hsv(time * TITLE_HUE_SPEED, 0.7, 1.0);
    let title_width = painter.measure_text_width(TITLE, TITLE_FONT_SIZE);
    painter.draw_text(
        TITLE,
        Point::new((screen.width - title_width) / 2.0, TITLE_TOP),
        TITLE_FONT_SIZE,
        title_color,
    );

    let box_origin = Point::new(10.0, screen.height - 50.0);
    let box_size = Size::new(SEARCH_BOX_WIDTH, SEARCH_BOX_HEIGHT);
    let box_fill = style::fade(style::LIGHT_GRAY, 0.3);
    painter.fill_rect(box_origin, box_size, box_fill);
    painter.stroke_rect(box_origin, box_size, style::LIGHT_GRAY);
    painter.draw_text(
        query.text(),
        Point::new(20.0, screen.height - 40.0),
        SEARCH_FONT_SIZE,
        style::WHITE,
    );

    let hint = if query.is_typing() {
        "Press ENTER to search"
    } else {
        "Press ENTER to type"
    };
    painter.draw_text(
        hint,
        Point::new(20.0, screen.height - 70.0),
        HINT_FONT_SIZE,
        style::GRAY,
    );
    painter.draw_text(
        USAGE,
        Point::new(10.0, screen.height - 100.0),
        HINT_FONT_SIZE,
        style::GRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight;
    use crate::painter::{
        DisplayList, DrawCommand, Recorder, TestMeasure, TextMeasure,
    };

    fn sample() -> Node {
        Node::with_children(
            "A",
            vec![
                Node::leaf("B"),
                Node::with_children("C", vec![Node::leaf("D")]),
            ],
        )
    }

    fn render(root: &mut Node, transform: &ViewTransform) -> DisplayList {
        let mut recorder = Recorder::new(0.0, &TestMeasure);
        render_tree(root, transform, &SceneConfig::default(), &mut recorder);
        recorder.finish()
    }

    fn body_centers(list: &DisplayList) -> Vec<Point> {
        list.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn given_single_root_when_rendered_then_one_node_and_no_edges() {
        let mut root = Node::leaf("TranslationUnitDecl");

        let list = render(&mut root, &ViewTransform::default());

        assert_eq!(list.node_count(), 1);
        assert_eq!(list.edge_count(), 0);
        let Some(DrawCommand::FillCircle { center, .. }) =
            list.commands().first()
        else {
            panic!("expected node body first");
        };
        assert_eq!(*center, SceneConfig::default().root_anchor);
    }

    #[test]
    fn given_tree_when_rendered_then_every_node_and_edge_is_emitted() {
        let mut root = sample();

        let list = render(&mut root, &ViewTransform::default());

        assert_eq!(list.node_count(), 4);
        assert_eq!(list.edge_count(), 3);
    }

    #[test]
    fn given_tree_when_rendered_then_order_is_parent_edge_then_child() {
        let mut root = sample();

        let list = render(&mut root, &ViewTransform::default());
        let labels: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        let first_edge = list
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::QuadraticCurve { .. }));
        let second_body = list
            .commands()
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::FillCircle { .. }))
            .nth(1)
            .map(|(index, _)| index);

        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert!(first_edge < second_body);
    }

    #[test]
    fn given_frames_when_rendered_then_every_node_animation_advances() {
        let mut root = sample();

        for _ in 0..3 {
            render(&mut root, &ViewTransform::default());
        }

        root.walk(&mut |node| {
            assert!((node.animation_progress() - 0.15).abs() < 1e-5);
        });
    }

    #[test]
    fn given_pan_and_zoom_when_rendered_then_positions_and_sizes_scale() {
        let mut root = Node::leaf("Root");
        for _ in 0..25 {
            render(&mut root, &ViewTransform::default());
        }
        let transform = ViewTransform {
            offset: iced_core::Vector::new(-600.0, -100.0),
            zoom: 2.0,
        };

        let list = render(&mut root, &transform);

        let Some(DrawCommand::FillCircle { center, radius, .. }) =
            list.commands().first()
        else {
            panic!("expected node body first");
        };
        assert_eq!(*center, Point::new(0.0, 0.0));
        assert!((radius - 80.0).abs() < 1e-4);
    }

    #[test]
    fn given_highlighted_path_when_rendered_then_only_path_edges_are_orange() {
        let mut root = sample();
        highlight::search(&mut root, "D");

        let list = render(&mut root, &ViewTransform::default());
        let orange_edges = list
            .commands()
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    DrawCommand::QuadraticCurve { color, .. }
                        if *color == style::ORANGE
                )
            })
            .count();

        assert_eq!(orange_edges, 2);
    }

    #[test]
    fn given_typing_mode_when_overlay_rendered_then_hint_asks_to_search() {
        let mut root = sample();
        let mut query = QueryInput::default();
        query.handle(crate::QueryEvent::Toggle, &mut root);
        let mut recorder = Recorder::new(1.0, &TestMeasure);

        render_overlay(&query, Size::new(1200.0, 900.0), &mut recorder);

        assert!(recorder.finish().commands().iter().any(|command| matches!(
            command,
            DrawCommand::Text { content, .. }
                if content == "Press ENTER to search"
        )));
    }

    #[test]
    fn given_nested_tree_when_rendered_then_bodies_follow_halving_layout() {
        let mut root = Node::with_children(
            "A",
            vec![
                Node::leaf("B"),
                Node::with_children(
                    "C",
                    vec![Node::leaf("D"), Node::leaf("E")],
                ),
            ],
        );
        let transform = ViewTransform {
            offset: iced_core::Vector::new(-600.0, -100.0),
            zoom: 1.0,
        };

        let list = render(&mut root, &transform);

        assert_eq!(
            body_centers(&list),
            vec![
                Point::new(0.0, 0.0),
                Point::new(-600.0, 200.0),
                Point::new(600.0, 200.0),
                Point::new(300.0, 400.0),
                Point::new(900.0, 400.0),
            ]
        );
    }

    #[test]
    fn given_wide_and_narrow_labels_when_rendered_then_each_is_centred() {
        let mut root = Node::with_children(
            "WWWWWWWW",
            vec![Node::leaf("iiiiiiii")],
        );
        for _ in 0..25 {
            render(&mut root, &ViewTransform::default());
        }

        let list = render(&mut root, &ViewTransform::default());
        let centers = body_centers(&list);
        let texts: Vec<(Point, f32, &str)> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text {
                    content,
                    position,
                    size,
                    ..
                } => Some((*position, *size, content.as_str())),
                _ => None,
            })
            .collect();

        assert_eq!(texts.len(), 2);
        for ((position, size, content), center) in texts.iter().zip(&centers) {
            let width = TestMeasure.text_width(content, *size);
            assert!((position.x + width / 2.0 - center.x).abs() < 1e-3);
        }
        assert_eq!(centers[0].x, centers[1].x);
        assert!(texts[0].0.x < texts[1].0.x);
    }
}
