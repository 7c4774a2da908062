//! Constructs parse trees from validated token sequences.

use crate::lexical_analysis::Token;
use crate::parse_tree_impl::parse_tree_ast::ParseTree;

/// Builds a parse tree from a token sequence produced by
/// `validate_and_tokenize`.
///
/// The first token becomes the root's payload. Every following token is
/// attached to the innermost open group: an `Open` starts a new child group
/// whose payload is the token right after it, a `Close` ends the innermost
/// group, and anything else becomes a leaf. A `Close` at the root's level ends
/// construction; any tokens after it are ignored. An `Open` directly followed
/// by a `Close` adds no child.
///
/// Groups are tracked on an explicit stack of arena indices rather than via
/// recursion, so nesting depth is bounded only by memory.
pub fn build_tree(tokens: &[Token]) -> ParseTree {
    let mut tree = ParseTree::new();

    let (first_token, remaining_tokens) = match tokens.split_first() {
        Some(split) => split,
        None => return tree,
    };

    let root_idx = tree.push_node(first_token.clone());
    tree.set_root(root_idx);

    // Nodes whose groups are still open; the innermost is last.
    let mut open_node_idxs: Vec<usize> = vec![root_idx];
    // Set right after an `Open`, while waiting for the new group's payload.
    let mut group_pending = false;

    for token in remaining_tokens {
        let parent_idx = match open_node_idxs.last() {
            Some(&idx) => idx,
            None => break,
        };

        if group_pending {
            group_pending = false;

            if *token == Token::Close {
                continue;
            }

            let group_idx = tree.push_node(token.clone());
            tree.add_child(parent_idx, group_idx);
            open_node_idxs.push(group_idx);
            continue;
        }

        match token {
            Token::Open => {
                group_pending = true;
            }

            Token::Close => {
                open_node_idxs.pop();
            }

            _ => {
                let leaf_idx = tree.push_node(token.clone());
                tree.add_child(parent_idx, leaf_idx);
            }
        }
    }

    return tree;
}
