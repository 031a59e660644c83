//! Hierarchy resolution over a fetched organization tree
//!
//! The hierarchy endpoint returns the whole tree in one response. Every
//! function here takes that snapshot by shared reference and walks it
//! iteratively; nothing is mutated or cached.

use anypoint_domain::{AnypointError, BusinessGroup, Result};
use tracing::debug;

use super::path::BusinessGroupPath;

/// Resolve `path` to a node of the tree rooted at `root`.
///
/// The first segment names the root organization and is not compared: a
/// single-segment path always resolves to `root`. Every following segment
/// must match the name of a direct child (exact, case-sensitive) of the node
/// matched so far.
///
/// # Errors
/// `NotFound` naming the first segment that has no matching child.
pub fn resolve<'a>(root: &'a BusinessGroup, path: &BusinessGroupPath) -> Result<&'a BusinessGroup> {
    let mut current = root;

    for segment in path.segments().iter().skip(1) {
        let Some(child) = find_child(current, segment) else {
            return Err(AnypointError::NotFound(format!(
                "business group '{segment}' does not exist under '{}' (path '{path}')",
                current.name
            )));
        };
        debug!(name = %child.name, id = %child.id, "matched business group segment");
        current = child;
    }

    Ok(current)
}

/// Resolve `path` to the id of the addressed node.
pub fn resolve_id<'a>(root: &'a BusinessGroup, path: &BusinessGroupPath) -> Result<&'a str> {
    resolve(root, path).map(|group| group.id.as_str())
}

/// Direct child of `parent` named exactly `name`.
pub fn find_child<'a>(parent: &'a BusinessGroup, name: &str) -> Option<&'a BusinessGroup> {
    parent.children().iter().find(|child| child.name == name)
}

/// Name path from `root` to the node with the given id.
///
/// Depth-first search; `None` when the id is not in the tree or a name on the
/// way cannot be written as a path.
pub fn path_to(root: &BusinessGroup, id: &str) -> Option<BusinessGroupPath> {
    // Each stack entry carries the names leading to it.
    let mut stack: Vec<(&BusinessGroup, Vec<String>)> = vec![(root, vec![root.name.clone()])];

    while let Some((node, names)) = stack.pop() {
        if node.id == id {
            return BusinessGroupPath::from_segments(names).ok();
        }
        for child in node.children().iter().rev() {
            let mut child_names = names.clone();
            child_names.push(child.name.clone());
            stack.push((child, child_names));
        }
    }

    None
}
