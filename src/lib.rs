//! rbset - ordered key storage on a red-black tree.
//!
//! A sentinel-based red-black tree meant as a building block for in-memory
//! indexes: logarithmic search, insertion and deletion with a worst-case
//! height of `2·log₂(n+1)` regardless of insertion order, plus ordered
//! traversal and in-order neighbour lookup.
//!
//! The tree is single-threaded; callers that share one across threads must
//! serialize access themselves.

pub mod config;
pub mod error;
pub mod tree;
pub mod utils;

pub use config::TreeConfig;
pub use error::{Result, TreeError};
pub use tree::{Color, Iter, NodeHandle, RbTree};
