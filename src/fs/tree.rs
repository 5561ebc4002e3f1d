//! Inode Tree
//!
//! Directory hierarchy over the inode arena. Owns naming, parent/child
//! linkage and file content, plus the session's root and working directory.
//!
//! Every mutating operation validates fully before touching the arena, so a
//! rejected create/delete/write leaves the tree exactly as it was.

use log::{debug, trace, warn};

use super::arena::{Inode, InodeArena};
use super::types::*;

/// Bounded file/directory tree with a root and a working directory.
#[derive(Debug, Clone)]
pub struct InodeTree {
    arena: InodeArena,
    limits: FsLimits,
    root: NodeId,
    cwd: NodeId,
}

impl InodeTree {
    /// Create an initialised tree holding only the root directory.
    pub fn new(limits: FsLimits) -> Self {
        let mut tree = Self {
            arena: InodeArena::with_capacity(limits.max_nodes.max(1)),
            limits,
            root: NodeId(0),
            cwd: NodeId(0),
        };
        tree.init();
        tree
    }

    /// Reset the arena, allocate and wire the root, and move cwd to it.
    pub fn init(&mut self) {
        self.arena.reset();
        // Capacity is at least one, so the emptied arena always yields slot 0.
        let root = self.arena.allocate().unwrap_or(NodeId(0));
        if let Some(node) = self.arena.get_mut(root) {
            node.name = "/".to_string();
            node.kind = NodeKind::Directory;
        }
        self.root = root;
        self.cwd = root;
        debug!("filesystem initialised with capacity {}", self.arena.capacity());
    }

    pub fn limits(&self) -> &FsLimits {
        &self.limits
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Make `dir` the working directory.
    pub fn set_cwd(&mut self, dir: NodeId) -> Result<(), FsError> {
        let node = self.node(dir)?;
        if node.kind != NodeKind::Directory {
            return Err(FsError::not_a(&node.name, NodeKind::Directory));
        }
        self.cwd = dir;
        Ok(())
    }

    /// Number of live inodes, root included.
    pub fn live_count(&self) -> usize {
        self.arena.live_count()
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.arena.get(id).map(|n| n.kind)
    }

    /// Content length of a file; always 0 for a directory.
    pub fn size(&self, id: NodeId) -> Option<usize> {
        self.arena.get(id).map(|n| n.size)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    /// Children of a directory in insertion order. Empty for files and dead handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.kind(id) == Some(NodeKind::Directory)
    }

    /// Borrow the content bytes of a file.
    pub fn contents(&self, file: NodeId) -> Result<&[u8], FsError> {
        let node = self.file_node(file)?;
        Ok(&node.data[..node.size])
    }

    /// Exact, case-sensitive lookup among a directory's children.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        let dir = self.arena.get(parent)?;
        if dir.kind != NodeKind::Directory {
            return None;
        }
        dir.children
            .iter()
            .copied()
            .find(|&child| self.name(child) == Some(name))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn create_file(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.create(parent, name, NodeKind::File)
    }

    pub fn create_dir(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.create(parent, name, NodeKind::Directory)
    }

    fn create(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        let dir = self.node(parent)?;
        if dir.kind != NodeKind::Directory {
            return Err(FsError::not_a(&dir.name, NodeKind::Directory));
        }
        if name.is_empty() {
            return Err(FsError::missing("name"));
        }
        if name.len() > self.limits.max_name_len {
            return Err(FsError::capacity(Resource::Name));
        }
        if self.find_child(parent, name).is_some() {
            return Err(FsError::conflict(name, ConflictReason::AlreadyExists));
        }
        if dir.children.len() >= self.limits.max_children {
            warn!("directory '{}' is full", dir.name);
            return Err(FsError::capacity(Resource::DirectoryEntries));
        }

        let id = self.arena.allocate().map_err(|e| {
            warn!("cannot create '{}': {}", name, e);
            e
        })?;
        if let Some(node) = self.arena.get_mut(id) {
            node.name = name.to_string();
            node.kind = kind;
            node.parent = Some(parent);
        }
        if let Some(dir) = self.arena.get_mut(parent) {
            dir.children.push(id);
        }
        debug!("created {} '{}' as inode {}", kind, name, id.index());
        Ok(id)
    }

    /// Replace a file's content. Data beyond the file capacity is dropped;
    /// returns the number of bytes stored.
    pub fn write(&mut self, file: NodeId, data: &[u8]) -> Result<usize, FsError> {
        self.file_node(file)?;
        let len = data.len().min(self.limits.max_file_size);
        if len < data.len() {
            debug!("write truncated from {} to {} bytes", data.len(), len);
        }
        if let Some(node) = self.arena.get_mut(file) {
            node.data.clear();
            node.data.extend_from_slice(&data[..len]);
            node.size = len;
        }
        trace!("wrote {} bytes to inode {}", len, file.index());
        Ok(len)
    }

    /// Copy up to `buffer.len()` bytes of a file into `buffer`.
    pub fn read(&self, file: NodeId, buffer: &mut [u8]) -> Result<usize, FsError> {
        let data = self.contents(file)?;
        let len = buffer.len().min(data.len());
        buffer[..len].copy_from_slice(&data[..len]);
        Ok(len)
    }

    /// Unlink and free the child `name` of `parent`.
    ///
    /// Directories must be empty; deletion is never recursive. Remaining
    /// siblings keep their relative order.
    pub fn delete(&mut self, parent: NodeId, name: &str) -> Result<(), FsError> {
        let child = self
            .find_child(parent, name)
            .ok_or_else(|| FsError::not_found(name))?;
        let node = self.node(child)?;
        if node.kind == NodeKind::Directory && !node.children.is_empty() {
            return Err(FsError::conflict(name, ConflictReason::NotEmpty));
        }

        if let Some(dir) = self.arena.get_mut(parent) {
            dir.children.retain(|&c| c != child);
        }
        self.arena.free(child);
        debug!("deleted '{}' (inode {})", name, child.index());
        Ok(())
    }

    /// Nested copy of the whole tree starting at the root.
    pub fn snapshot(&self) -> TreeSnapshot {
        self.snapshot_from(self.root)
    }

    fn snapshot_from(&self, id: NodeId) -> TreeSnapshot {
        let (name, kind, size) = match self.arena.get(id) {
            Some(n) => (n.name.clone(), n.kind, n.size),
            None => (String::new(), NodeKind::File, 0),
        };
        TreeSnapshot {
            name,
            kind,
            size,
            children: self
                .children(id)
                .iter()
                .map(|&child| self.snapshot_from(child))
                .collect(),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn node(&self, id: NodeId) -> Result<&Inode, FsError> {
        self.arena
            .get(id)
            .ok_or_else(|| FsError::not_found(&format!("#{}", id.index())))
    }

    fn file_node(&self, id: NodeId) -> Result<&Inode, FsError> {
        let node = self.node(id)?;
        if node.kind != NodeKind::File {
            return Err(FsError::not_a(&node.name, NodeKind::File));
        }
        Ok(node)
    }
}

impl Default for InodeTree {
    fn default() -> Self {
        Self::new(FsLimits::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
