//! The barrel-import rewrite engine
//!
//! One [`ImportPlugin`] exists per configured library. It records the
//! barrel imports of its library when they are visited, rewrites every use
//! of the imported names into a reference to a generated per-symbol import,
//! and deletes the barrel imports once the program has been walked.

mod handlers;
mod resolver;
mod state;

use anyhow::Result;
use log::{debug, trace};

pub use handlers::{BindingCheck, Handler, handler_for};
pub use state::{ImportReference, ImportedName, PluginState};

use crate::{
    ast::Program,
    config::{DEFAULT_LIBRARY_DIRECTORY, LibraryConfig, StyleMode},
    module_path::{NameTransform, PathOptions},
    transformation_context::TransformationType,
    traversal::{NodeKind, NodeMut, TraversalContext},
};

/// Rewrite engine for one library
///
/// Immutable after construction; everything that changes while a program is
/// walked lives in the matching [`PluginState`].
#[derive(Debug, Clone)]
pub struct ImportPlugin {
    /// Position of the library record, also the index of the state slot
    index: usize,
    library_name: String,
    paths: PathOptions,
    style: StyleMode,
    /// Default import of each symbol module instead of a named import
    transform_to_default_import: bool,
}

impl ImportPlugin {
    /// Build the engine for the library record at `index`
    ///
    /// Fails when the record does not name its library.
    pub fn new(config: &LibraryConfig, index: usize) -> Result<Self> {
        let library_name = config.required_library_name(index)?.to_owned();
        let transform = NameTransform::from_flags(
            config.camel_to_dash.unwrap_or(true),
            config.camel_to_underline.unwrap_or(false),
        );
        let paths = PathOptions {
            library_name: library_name.clone(),
            library_directory: config
                .library_directory
                .clone()
                .unwrap_or_else(|| DEFAULT_LIBRARY_DIRECTORY.to_owned()),
            transform,
            file_name: config.file_name.clone().unwrap_or_default(),
            custom_name: config.custom_name.clone(),
        };

        debug!("Configured library #{index} {library_name} ({transform:?})");
        Ok(Self {
            index,
            library_name,
            paths,
            style: config.style.clone(),
            transform_to_default_import: config.transform_to_default_import.unwrap_or(true),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Module path a symbol of this library is imported from
    pub fn module_path(&self, symbol: &str) -> String {
        self.paths.module_path(symbol)
    }

    /// Start a program with empty state
    pub fn program_enter(&self, state: &mut PluginState) {
        *state = PluginState::default();
    }

    /// Run the rewrite rule for `kind` on `node`
    pub fn handle(
        &self,
        kind: NodeKind,
        state: &mut PluginState,
        node: &mut NodeMut<'_>,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()> {
        handler_for(kind)(self, state, node, cx)
    }

    /// Delete the barrel imports queued while walking the program
    ///
    /// Statements another engine already removed are skipped.
    pub fn program_exit(
        &self,
        state: &mut PluginState,
        program: &mut Program,
        cx: &mut TraversalContext<'_>,
    ) {
        for node in state.pending_removals.drain(..) {
            if program.remove_statement(node) {
                debug!("Removed barrel import {node} of {}", self.library_name);
                cx.transformations.record(
                    &self.library_name,
                    TransformationType::BarrelImportRemoved { node },
                );
            } else {
                trace!("Barrel import {node} already removed");
            }
        }
    }
}
