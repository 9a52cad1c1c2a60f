//! Per-program state of one rewrite engine

use crate::{
    ast::{Expr, Identifier},
    types::{FxIndexMap, FxIndexSet, NodeId},
};

/// Mutable record kept by one engine while it walks one program
///
/// Created empty when the program is entered and discarded with the next
/// program; nothing carries over between files.
#[derive(Debug, Clone, Default)]
pub struct PluginState {
    /// Local alias -> exported symbol, from `import { symbol as alias }`
    pub specified: FxIndexMap<String, String>,
    /// Local aliases bound to the whole library object
    pub library_objs: FxIndexSet<String>,
    /// Exported symbol -> generated import, at most one per symbol
    pub resolved_bindings: FxIndexMap<String, ImportReference>,
    /// Barrel import statements to delete once the program has been walked
    pub pending_removals: Vec<NodeId>,
}

impl PluginState {
    /// Exported symbol tracked under the local name `local`
    pub fn symbol_for(&self, local: &str) -> Option<&str> {
        self.specified.get(local).map(String::as_str)
    }

    pub fn is_library_object(&self, local: &str) -> bool {
        self.library_objs.contains(local)
    }
}

/// What a generated import pulls in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
    /// `import local from "source"`
    Default,
    /// `import { name as local } from "source"`
    Named(String),
}

/// A generated per-symbol import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    /// Generated local binding
    pub local: String,
    /// Synthesized module path
    pub source: String,
    pub imported: ImportedName,
}

impl ImportReference {
    /// A fresh identifier expression referring to the generated binding
    pub fn to_expr(&self) -> Expr {
        Expr::Identifier(Identifier::new(self.local.as_str()))
    }
}
