//! Substring search over node labels with ancestor propagation.

use crate::node::Node;

/// Clear the highlight flag on every node of the subtree.
pub fn reset(node: &mut Node) {
    node.highlighted = false;
    for child in node.children_mut() {
        reset(child);
    }
}

/// Highlight every node whose label contains `query`, plus all of its
/// ancestors. Returns whether anything in the subtree matched.
///
/// Children are always visited, so matches nested below another match are
/// marked too. Callers skip empty queries; see [`crate::QueryInput`].
pub fn search(node: &mut Node, query: &str) -> bool {
    let mut descendant_matched = false;
    for child in node.children_mut() {
        descendant_matched |= search(child, query);
    }

    let direct = !query.is_empty() && node.label().contains(query);
    node.highlighted = direct || descendant_matched;
    node.highlighted
}

/// Clear previous highlights, then search. Empty queries leave the tree
/// untouched and return `None`.
pub fn apply_query(root: &mut Node, query: &str) -> Option<bool> {
    if query.is_empty() {
        log::debug!("empty query, keeping previous highlights");
        return None;
    }

    reset(root);
    let matched = search(root, query);
    log::info!(
        "search {query:?}: matched={matched}, highlighted={}",
        root.highlighted_labels().len()
    );
    Some(matched)
}
