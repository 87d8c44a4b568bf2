//! Result types for resolver operations

/// Outcome of a partial-path walk: where a new resource chain attaches.
///
/// `parent` identifies the deepest existing folder on the path as a
/// child-index route from the root resource (`Some(vec![])` is the root
/// itself). `None` means not even the first segment matched, so the chain
/// must be registered as a new root. `remaining` holds the path suffix
/// that still has to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    pub parent: Option<Vec<usize>>,
    pub remaining: Vec<String>,
}

impl InsertionPoint {
    /// An insertion point with no parent: the whole path is missing.
    pub fn detached(segments: &[String]) -> Self {
        Self {
            parent: None,
            remaining: segments.to_vec(),
        }
    }
}
