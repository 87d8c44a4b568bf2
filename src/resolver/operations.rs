//! Path resolution operations
//!
//! Pure functions over a resource tree: exact lookup of a path, greedy
//! lookup of the deepest existing ancestor, and construction of the
//! resource chain that fills in a missing path suffix.

use crate::resolver::results::InsertionPoint;
use crate::resource::{File, Folder, Permission, Resource};

/// Splits a path into its `/`-delimited segments.
///
/// Splitting is literal: leading, trailing or doubled slashes produce
/// empty segments, which can never match a resource name. `"/"` yields
/// two empty segments, `""` yields one.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}

/// Finds the resource an exact path refers to, depth first.
///
/// Each call consumes the leading segment. A folder is returned when the
/// segment equals its name and nothing remains; otherwise every child is
/// tried against the remainder, in insertion order, and the first match
/// wins. A file matches on name alone and ignores any trailing segments.
/// Sibling branches each get their own view of the remainder, so one
/// branch never observes another's consumed segments.
pub fn find<'a>(resource: &'a Resource, segments: &[String]) -> Option<&'a Resource> {
    let (segment, rest) = segments.split_first()?;

    match resource {
        Resource::Folder(folder) => {
            if rest.is_empty() && segment == folder.name() {
                return Some(resource);
            }
            folder.children.iter().find_map(|child| find(child, rest))
        }
        Resource::File(file) => {
            if segment == file.name() {
                Some(resource)
            } else {
                None
            }
        }
    }
}

/// Mutable counterpart of [`find`], used by operations that update the
/// located resource in place.
pub fn find_mut<'a>(resource: &'a mut Resource, segments: &[String]) -> Option<&'a mut Resource> {
    let (segment, rest) = segments.split_first()?;

    if resource.is_folder() {
        if rest.is_empty() && segment == resource.name() {
            return Some(resource);
        }
        match resource {
            Resource::Folder(folder) => folder
                .children
                .iter_mut()
                .find_map(|child| find_mut(child, rest)),
            Resource::File(_) => None,
        }
    } else if segment == resource.name() {
        Some(resource)
    } else {
        None
    }
}

/// Walks a path greedily from the root and reports the deepest existing
/// folder plus the segments still missing.
///
/// The candidate set starts as the root resource alone; after a match it
/// becomes the matched folder's children. Only folders participate: a
/// file with the right name stops the walk. The returned route drives
/// [`folder_at_mut`] when the caller attaches the missing chain.
pub fn find_parent(root: &Resource, segments: &[String]) -> InsertionPoint {
    let mut route = Vec::new();
    let mut parent: Option<&Folder> = None;
    let mut consumed = 0;

    for segment in segments {
        match parent {
            None => match root {
                Resource::Folder(folder) if segment == folder.name() => parent = Some(folder),
                _ => break,
            },
            Some(folder) => {
                let hit = folder
                    .children
                    .iter()
                    .enumerate()
                    .find_map(|(index, child)| match child {
                        Resource::Folder(next) if segment == next.name() => Some((index, next)),
                        _ => None,
                    });
                match hit {
                    Some((index, next)) => {
                        route.push(index);
                        parent = Some(next);
                    }
                    None => break,
                }
            }
        }
        consumed += 1;
    }

    InsertionPoint {
        parent: parent.map(|_| route),
        remaining: segments[consumed..].to_vec(),
    }
}

/// Descends a tree along a child-index route produced by [`find_parent`].
///
/// The route is only valid against the tree it was computed from; both
/// steps happen under the same repository guard.
pub fn folder_at_mut<'a>(root: &'a mut Resource, route: &[usize]) -> &'a mut Folder {
    let mut resource = root;
    for &index in route {
        resource = match resource {
            Resource::Folder(folder) => &mut folder.children[index],
            Resource::File(_) => unreachable!("insertion route descends through folders only"),
        };
    }
    match resource {
        Resource::Folder(folder) => folder,
        Resource::File(_) => unreachable!("insertion route ends at a folder"),
    }
}

/// Builds the resource chain for a missing path suffix.
///
/// Every segment but the last becomes a folder, each the sole initial
/// child of the previous one. The last segment becomes a file when
/// `content` is supplied, otherwise a folder. Owner and permission apply
/// to every resource in the chain. Returns `None` for an empty suffix.
pub fn build_chain(
    segments: &[String],
    content: Option<&str>,
    permission: Permission,
    owner: &str,
) -> Option<Resource> {
    let (last, intermediates) = segments.split_last()?;

    let mut chain = match content {
        Some(text) => Resource::File(File::new(last, permission, text, owner)),
        None => Resource::Folder(Folder::new(last, permission, owner)),
    };

    for name in intermediates.iter().rev() {
        let mut folder = Folder::new(name, permission, owner);
        folder.children.push(chain);
        chain = Resource::Folder(folder);
    }

    Some(chain)
}
