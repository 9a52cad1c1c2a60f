//! Shared type definitions for the sunder crate
//!
//! This module contains common types that are used across multiple components
//! of the rewriter, ensuring consistency and avoiding circular dependencies.

use std::{
    hash::BuildHasherDefault,
    path::{Path, PathBuf},
};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

/// Insertion-ordered map using the Fx hasher
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered set using the Fx hasher
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Stable identifier of a top-level statement within one program
///
/// Ids are assigned by [`crate::ast::Program::assign_node_ids`] when a traversal
/// starts. Synthetic statements created during the traversal keep
/// [`NodeId::SYNTHETIC`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Id carried by generated nodes that never came from the input
    pub const SYNTHETIC: Self = Self(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn is_synthetic(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Information about the file whose tree is being rewritten
///
/// Handed to custom style functions so they can decide per file which
/// stylesheet to pull in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContext {
    /// Path of the input file, if the tree came from disk
    pub filename: Option<PathBuf>,
}

impl FileContext {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }

    /// A context for trees that do not originate from a file
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Human readable name used in log messages
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map_or_else(|| "<anonymous>".to_owned(), |p| p.display().to_string())
    }
}
