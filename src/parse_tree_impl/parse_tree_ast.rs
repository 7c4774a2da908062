/// Data structures to represent parse trees, and some utility functions to
/// traverse and display them.
use std::fmt::Display;

use crate::lexical_analysis::Token;

/// A node of a parse tree. Holds one token as its payload; children are
/// indices into the node arena of the owning `ParseTree`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TreeNode {
    pub elem: Token,
    pub child_idxs: Vec<usize>,
}

/// Represents a parse tree. Empty iff it was built from an empty token
/// sequence.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ParseTree {
    nodes: Vec<TreeNode>,
    root_idx: Option<usize>,
}

impl ParseTree {
    pub fn new() -> Self {
        return Self::default();
    }

    // Adds a childless node to the arena and returns its index.
    pub(crate) fn push_node(&mut self, elem: Token) -> usize {
        self.nodes.push(TreeNode {
            elem,
            child_idxs: Vec::new(),
        });

        return self.nodes.len() - 1;
    }

    pub(crate) fn add_child(&mut self, parent_idx: usize, child_idx: usize) {
        self.nodes[parent_idx].child_idxs.push(child_idx);
    }

    pub(crate) fn set_root(&mut self, root_idx: usize) {
        self.root_idx = Some(root_idx);
    }

    pub fn root_idx(&self) -> Option<usize> {
        return self.root_idx;
    }

    pub fn root(&self) -> Option<&TreeNode> {
        return self.root_idx.map(|root_idx| &self.nodes[root_idx]);
    }

    pub fn get_node(&self, node_idx: usize) -> Option<&TreeNode> {
        return self.nodes.get(node_idx);
    }

    /// Iterates over the children of a node, in order.
    pub fn children(&self, node_idx: usize) -> impl Iterator<Item = &TreeNode> + '_ {
        return self.nodes[node_idx]
            .child_idxs
            .iter()
            .map(move |child_idx| &self.nodes[*child_idx]);
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.root_idx.is_none();
    }

    /// Pre-order traversal yielding `(depth, node)` pairs, the root being at
    /// depth 0.
    pub fn depth_first(&self) -> DepthFirstIter<'_> {
        return DepthFirstIter {
            tree: self,
            pending: self.root_idx.map(|root_idx| (root_idx, 0)).into_iter().collect(),
        };
    }
}

/// Iterator returned by `ParseTree::depth_first`. Keeps its own stack so deep
/// trees do not exhaust the call stack.
pub struct DepthFirstIter<'a> {
    tree: &'a ParseTree,
    pending: Vec<(usize, usize)>,
}

impl<'a> Iterator for DepthFirstIter<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (node_idx, depth) = self.pending.pop()?;
        let node = &self.tree.nodes[node_idx];

        // Reversed so the first child is visited first.
        for child_idx in node.child_idxs.iter().rev() {
            self.pending.push((*child_idx, depth + 1));
        }

        return Some((depth, node));
    }
}

/// Renders a tree as an indented dump: one line per node in depth-first
/// order, indented by two spaces per level.
pub fn tree_to_string(tree: &ParseTree) -> String {
    let mut out_string = String::new();

    for (depth, node) in tree.depth_first() {
        out_string.push_str("  ".repeat(depth).as_str());
        out_string.push_str(node.elem.to_string().as_str());
        out_string.push('\n');
    }

    return out_string;
}

impl Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", tree_to_string(self).as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds the tree for `(x (y z))` by hand:
    //   0: (
    //   1:   x
    //   2:   y
    //   3:     z
    fn make_test_tree() -> ParseTree {
        let mut tree = ParseTree::new();

        let root_idx = tree.push_node(Token::Open);
        tree.set_root(root_idx);

        let x_idx = tree.push_node(Token::Identifier(String::from("x")));
        tree.add_child(root_idx, x_idx);

        let y_idx = tree.push_node(Token::Identifier(String::from("y")));
        tree.add_child(root_idx, y_idx);

        let z_idx = tree.push_node(Token::Identifier(String::from("z")));
        tree.add_child(y_idx, z_idx);

        return tree;
    }

    // Test if an empty tree has no root and renders as nothing.
    #[test]
    fn test_empty_tree() {
        let tree = ParseTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        assert_eq!(tree.depth_first().count(), 0);
        assert_eq!(tree_to_string(&tree), "");
    }

    // Test if depth-first traversal visits nodes in pre-order with depths.
    #[test]
    fn test_depth_first_order() {
        let tree = make_test_tree();

        let visited: Vec<(usize, String)> = tree
            .depth_first()
            .map(|(depth, node)| (depth, node.elem.to_string()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, String::from("(")),
                (1, String::from("x")),
                (1, String::from("y")),
                (2, String::from("z")),
            ]
        );
    }

    // Test if children are returned in insertion order.
    #[test]
    fn test_children() {
        let tree = make_test_tree();
        let root_idx = tree.root_idx().expect("test tree has no root");

        let child_elems: Vec<&Token> = tree.children(root_idx).map(|node| &node.elem).collect();

        assert_eq!(
            child_elems,
            vec![
                &Token::Identifier(String::from("x")),
                &Token::Identifier(String::from("y"))
            ]
        );
        assert_eq!(tree.get_node(3).map(|node| node.child_idxs.len()), Some(0));
        assert!(tree.get_node(4).is_none());
    }

    // Test if the text dump indents by depth.
    #[test]
    fn test_tree_to_string() {
        let tree = make_test_tree();

        assert_eq!(tree_to_string(&tree), "(\n  x\n  y\n    z\n");
        assert_eq!(format!("{}", tree), tree_to_string(&tree));
    }
}
