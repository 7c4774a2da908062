//! Builds a generic parse tree from a validated token sequence. Nodes live in
//! a flat arena and reference their children by index.

pub mod parse_tree_ast;
pub mod parse_tree_construction;
