//! Path Resolver
//!
//! Rebuilds the absolute path of a node by walking its parent links.

use super::tree::InodeTree;
use super::types::{FsError, NodeId, Resource};

/// Absolute path of `node`: `"/"` for the root, otherwise `"/" + name` for
/// every ancestor below the root, root-to-node.
///
/// Fails with `CapacityExceeded` when the result would be longer than the
/// configured path bound.
pub fn get_path(tree: &InodeTree, node: NodeId) -> Result<String, FsError> {
    let root = tree.root();
    if node == root {
        return Ok("/".to_string());
    }

    let max = tree.limits().max_path_len;
    let mut names: Vec<&str> = Vec::new();
    let mut total = 0;
    let mut current = Some(node);

    while let Some(id) = current {
        if id == root {
            break;
        }
        let name = tree
            .name(id)
            .ok_or_else(|| FsError::not_found(&format!("#{}", id.index())))?;
        total += 1 + name.len();
        if total > max {
            return Err(FsError::capacity(Resource::Path));
        }
        names.push(name);
        current = tree.parent(id);
    }

    let mut path = String::with_capacity(total);
    for name in names.iter().rev() {
        path.push('/');
        path.push_str(name);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FsLimits;

    #[test]
    fn test_root_path() {
        let tree = InodeTree::default();
        assert_eq!(get_path(&tree, tree.root()).unwrap(), "/");
    }

    #[test]
    fn test_nested_path() {
        let mut tree = InodeTree::default();
        let root = tree.root();
        let a = tree.create_dir(root, "a").unwrap();
        let b = tree.create_dir(a, "b").unwrap();
        assert_eq!(get_path(&tree, b).unwrap(), "/a/b");
        let f = tree.create_file(b, "notes.txt").unwrap();
        assert_eq!(get_path(&tree, f).unwrap(), "/a/b/notes.txt");
    }

    #[test]
    fn test_path_does_not_mutate() {
        let mut tree = InodeTree::default();
        let root = tree.root();
        let a = tree.create_dir(root, "a").unwrap();
        let before = tree.snapshot();
        get_path(&tree, a).unwrap();
        assert_eq!(tree.snapshot(), before);
        assert_eq!(tree.cwd(), root);
    }

    #[test]
    fn test_path_too_long() {
        let mut tree = InodeTree::new(FsLimits {
            max_path_len: 10,
            ..FsLimits::default()
        });
        let root = tree.root();
        let a = tree.create_dir(root, "abcd").unwrap();
        let b = tree.create_dir(a, "efgh").unwrap();
        // "/abcd/efgh" is exactly 10 bytes.
        assert_eq!(get_path(&tree, b).unwrap(), "/abcd/efgh");
        let c = tree.create_dir(b, "i").unwrap();
        assert_eq!(get_path(&tree, c), Err(FsError::capacity(Resource::Path)));
    }

    #[test]
    fn test_dead_handle() {
        let mut tree = InodeTree::default();
        let root = tree.root();
        let a = tree.create_dir(root, "a").unwrap();
        tree.delete(root, "a").unwrap();
        assert!(matches!(get_path(&tree, a), Err(FsError::NotFound { .. })));
    }
}
