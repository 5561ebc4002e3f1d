//! File System Module
//!
//! Bounded in-memory inode store:
//! - InodeArena: fixed pool of inode slots addressed by `NodeId`
//! - InodeTree: directory hierarchy, file content, root and cwd
//! - get_path: absolute path reconstruction

pub mod types;
pub mod arena;
pub mod tree;
pub mod path;

pub use types::*;
pub use arena::InodeArena;
pub use tree::InodeTree;
pub use path::get_path;
