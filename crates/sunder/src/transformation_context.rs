//! Transformation context for tracking rewrites applied to one program.
//!
//! Every rewrite, injected import and removed barrel import is recorded
//! together with the library whose engine performed it, so a run can be
//! summarized per file and inspected in tests.

use crate::types::NodeId;

/// Context for tracking transformations during one traversal
#[derive(Debug, Default)]
pub struct TransformationContext {
    /// Track which transformations were applied, in the order they happened
    pub transformations: Vec<TransformationRecord>,
}

/// Record of a transformation applied to the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationRecord {
    /// Library name of the engine that performed it
    pub library: String,
    /// Type of transformation applied
    pub transformation_type: TransformationType,
}

/// Types of transformations that can be applied to a program
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationType {
    /// An identifier bound to a barrel import was replaced
    SymbolRewritten { local: String, symbol: String },
    /// `Namespace.Symbol` was replaced by a single identifier
    NamespaceMemberCollapsed { namespace: String, symbol: String },
    /// A per-symbol import was generated
    ImportInjected { source: String, local: String },
    /// A stylesheet side-effect import was generated
    SideEffectInjected { source: String },
    /// An original barrel import statement was deleted
    BarrelImportRemoved { node: NodeId },
}

impl TransformationContext {
    /// Create a new transformation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transformation performed by the engine for `library`
    pub fn record(&mut self, library: &str, transformation_type: TransformationType) {
        self.transformations.push(TransformationRecord {
            library: library.to_owned(),
            transformation_type,
        });
    }

    /// Transformations performed by the engine for `library`
    pub fn for_library<'a>(
        &'a self,
        library: &'a str,
    ) -> impl Iterator<Item = &'a TransformationRecord> + 'a {
        self.transformations
            .iter()
            .filter(move |record| record.library == library)
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    /// Get statistics about transformations
    pub fn get_stats(&self) -> TransformStats {
        let mut stats = TransformStats::default();

        for transformation in &self.transformations {
            match &transformation.transformation_type {
                TransformationType::SymbolRewritten { .. } => stats.symbols_rewritten += 1,
                TransformationType::NamespaceMemberCollapsed { .. } => {
                    stats.namespace_members_collapsed += 1;
                }
                TransformationType::ImportInjected { .. } => stats.imports_injected += 1,
                TransformationType::SideEffectInjected { .. } => stats.side_effects_injected += 1,
                TransformationType::BarrelImportRemoved { .. } => stats.barrel_imports_removed += 1,
            }
        }

        stats.total_transformations = self.transformations.len();
        stats
    }
}

/// Statistics about transformations applied
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    pub total_transformations: usize,
    pub symbols_rewritten: usize,
    pub namespace_members_collapsed: usize,
    pub imports_injected: usize,
    pub side_effects_injected: usize,
    pub barrel_imports_removed: usize,
}

impl std::fmt::Display for TransformStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rewrites, {} namespace accesses, {} imports injected, {} style imports, {} barrel \
             imports removed",
            self.symbols_rewritten,
            self.namespace_members_collapsed,
            self.imports_injected,
            self.side_effects_injected,
            self.barrel_imports_removed
        )
    }
}

#[cfg(test)]
mod tests;
