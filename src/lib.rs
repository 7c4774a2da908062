//! This crate contains code for a syntax checker for untyped lambda calculus
//! expressions: it validates and tokenizes single-line expressions and builds
//! generic parse trees from the resulting tokens.

pub mod end_to_end;
pub mod lexical_analysis;
pub mod parse_tree_impl;
