//! Inode Arena
//!
//! Fixed-capacity pool of inode slots. Slots are handed out lowest-first and
//! recycled when freed; handles are plain indices into the pool.

use super::types::{FsError, NodeId, NodeKind, Resource};

/// One slot of the arena: a file or a directory record.
#[derive(Debug, Clone)]
pub(crate) struct Inode {
    pub name: String,
    pub kind: NodeKind,
    pub size: usize,
    pub data: Vec<u8>,
    /// Non-owning back reference; the parent's child list owns this node.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub used: bool,
}

impl Inode {
    fn vacant() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::File,
            size: 0,
            data: Vec::new(),
            parent: None,
            children: Vec::new(),
            used: false,
        }
    }
}

/// Bounded inode pool.
#[derive(Debug, Clone)]
pub struct InodeArena {
    slots: Vec<Inode>,
    capacity: usize,
}

impl InodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Drop every slot. All handles become dead.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Claim the lowest free slot, cleared.
    pub fn allocate(&mut self) -> Result<NodeId, FsError> {
        if let Some(index) = self.slots.iter().position(|slot| !slot.used) {
            let slot = &mut self.slots[index];
            *slot = Inode::vacant();
            slot.used = true;
            return Ok(NodeId(index));
        }
        if self.slots.len() >= self.capacity {
            return Err(FsError::capacity(Resource::InodeTable));
        }
        let mut slot = Inode::vacant();
        slot.used = true;
        self.slots.push(slot);
        Ok(NodeId(self.slots.len() - 1))
    }

    /// Mark a slot unused. Its contents are scrubbed on the next allocate.
    pub fn free(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.used = false;
            slot.children.clear();
            slot.parent = None;
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.used).count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Inode> {
        self.slots.get(id.0).filter(|slot| slot.used)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Inode> {
        self.slots.get_mut(id.0).filter(|slot| slot.used)
    }
}
