/// One element of the displayed tree.
///
/// The label and children are fixed at construction. Only the highlight
/// flag and the entrance animation progress change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    children: Vec<Node>,
    pub(crate) highlighted: bool,
    pub(crate) animation_progress: f32,
}

impl Node {
    /// Create a node without children.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::with_children(label, Vec::new())
    }

    /// Create a node owning the given children, in display order.
    pub fn with_children(
        label: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            label: label.into(),
            children,
            highlighted: false,
            animation_progress: 0.0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Whether the last committed search matched this node or a descendant.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Entrance animation progress in `[0, 1]`.
    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree (`1` for a leaf).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Visit every node in parent-before-children order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Labels of all highlighted nodes in parent-before-children order.
    pub fn highlighted_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.walk(&mut |node| {
            if node.highlighted {
                labels.push(node.label());
            }
        });
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::with_children(
            "A",
            vec![
                Node::leaf("B"),
                Node::with_children("C", vec![Node::leaf("D")]),
            ],
        )
    }

    #[test]
    fn given_new_node_when_created_then_flags_start_cleared() {
        let node = Node::leaf("TranslationUnitDecl");

        assert_eq!(node.label(), "TranslationUnitDecl");
        assert!(!node.is_highlighted());
        assert_eq!(node.animation_progress(), 0.0);
        assert!(node.children().is_empty());
    }

    #[test]
    fn given_nested_tree_when_counted_then_count_and_depth_cover_all_levels() {
        let tree = sample();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Node::leaf("x").depth(), 1);
    }

    #[test]
    fn given_nested_tree_when_walked_then_parents_precede_children_in_order() {
        let tree = sample();
        let mut labels = Vec::new();

        tree.walk(&mut |node| labels.push(node.label()));

        assert_eq!(labels, vec!["A", "B", "C", "D"]);
    }
}
