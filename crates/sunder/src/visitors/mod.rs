//! AST visitor implementations for sunder
//!
//! Read-only walks over the ESTree model that feed the scope tracker and the
//! import injector before the rewriting traversal starts.

mod declaration_collector;
mod identifier_collector;

pub use declaration_collector::{Declaration, DeclarationCollector, collect_pattern_names};
pub use identifier_collector::IdentifierCollector;
