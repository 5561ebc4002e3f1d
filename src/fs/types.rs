//! File System Types
//!
//! Handles, limits and the error taxonomy shared by the inode arena,
//! the tree operations and the path resolver.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable handle to a slot in the inode arena.
///
/// A handle is an index, never an address: it stays valid while the slot is
/// live and is simply rejected once the slot has been freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot index of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of an inode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

/// The bounded container that refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    InodeTable,
    DirectoryEntries,
    Name,
    Path,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::InodeTable => write!(f, "inode table full"),
            Resource::DirectoryEntries => write!(f, "directory full"),
            Resource::Name => write!(f, "name too long"),
            Resource::Path => write!(f, "path too long"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    AlreadyExists,
    NotEmpty,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::AlreadyExists => write!(f, "already exists"),
            ConflictReason::NotEmpty => write!(f, "directory not empty"),
        }
    }
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{resource}")]
    CapacityExceeded { resource: Resource },

    #[error("{name}: no such file or directory")]
    NotFound { name: String },

    #[error("{name}: not a {expected}")]
    TypeMismatch { name: String, expected: NodeKind },

    #[error("{name}: {reason}")]
    Conflict { name: String, reason: ConflictReason },

    #[error("missing {what}")]
    InvalidArgument { what: &'static str },
}

impl FsError {
    pub fn capacity(resource: Resource) -> Self {
        FsError::CapacityExceeded { resource }
    }

    pub fn not_found(name: &str) -> Self {
        FsError::NotFound { name: name.to_string() }
    }

    pub fn not_a(name: &str, expected: NodeKind) -> Self {
        FsError::TypeMismatch { name: name.to_string(), expected }
    }

    pub fn conflict(name: &str, reason: ConflictReason) -> Self {
        FsError::Conflict { name: name.to_string(), reason }
    }

    pub fn missing(what: &'static str) -> Self {
        FsError::InvalidArgument { what }
    }
}

/// Fixed bounds of the inode store.
///
/// Every bound fails the operation with `CapacityExceeded` instead of growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FsLimits {
    /// Arena capacity, root included
    pub max_nodes: usize,
    /// Entries a single directory may hold
    pub max_children: usize,
    /// Longest node name in bytes
    pub max_name_len: usize,
    /// File content capacity in bytes
    pub max_file_size: usize,
    /// Longest absolute path the resolver will produce
    pub max_path_len: usize,
}

impl Default for FsLimits {
    fn default() -> Self {
        Self {
            max_nodes: 64,
            max_children: 64,
            max_name_len: 31,
            max_file_size: 4096,
            max_path_len: 255,
        }
    }
}

/// Serialisable view of a subtree, in child-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub name: String,
    pub kind: NodeKind,
    pub size: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

// ============================================================================
// Tests
// ============================================================================
