//! Path resolver
//!
//! Walks resource trees: exact resolution of slash-delimited paths and
//! location of the deepest existing ancestor for paths about to be
//! created. All operations are pure given the tree.

pub mod operations;
pub mod results;

pub use operations::{build_chain, find, find_mut, find_parent, folder_at_mut, split_path};
pub use results::InsertionPoint;
