//! Rewrite-target resolution
//!
//! Maps an exported symbol to the identifier of its generated per-symbol
//! import, injecting the import (and its stylesheet) the first time the
//! symbol is needed in a program.

use anyhow::{Context, Result};
use log::{debug, trace};

use super::{
    ImportPlugin,
    state::{ImportReference, ImportedName, PluginState},
};
use crate::{ast::Expr, transformation_context::TransformationType, traversal::TraversalContext};

impl ImportPlugin {
    /// Expression referring to `symbol` through its own module
    ///
    /// Repeated calls within one program return the same binding and never
    /// inject a second import or stylesheet.
    pub fn import_method(
        &self,
        symbol: &str,
        state: &mut PluginState,
        cx: &mut TraversalContext<'_>,
    ) -> Result<Expr> {
        if let Some(reference) = state.resolved_bindings.get(symbol) {
            trace!("Reusing {} for {symbol}", reference.local);
            return Ok(reference.to_expr());
        }

        let source = self.module_path(symbol);
        let (local, imported) = if self.transform_to_default_import {
            let local = cx.injector.add_default(&source, symbol);
            (local, ImportedName::Default)
        } else {
            let local = cx.injector.add_named(&source, symbol, symbol);
            (local, ImportedName::Named(symbol.to_owned()))
        };
        let local = local.with_context(|| {
            format!(
                "failed to import `{symbol}` of {} in {}",
                self.library_name,
                cx.file.display_name()
            )
        })?;
        debug!("Resolved {symbol} from {} to {source} as {}", self.library_name, local.name);
        cx.transformations.record(
            &self.library_name,
            TransformationType::ImportInjected {
                source: source.clone(),
                local: local.name.clone(),
            },
        );

        if let Some(style) = self.style.side_effect_path(&source, cx.file) {
            cx.injector
                .add_side_effect(&style)
                .with_context(|| format!("failed to import the stylesheet of `{symbol}`"))?;
            cx.transformations.record(
                &self.library_name,
                TransformationType::SideEffectInjected { source: style },
            );
        }

        let reference = ImportReference {
            local: local.name,
            source,
            imported,
        };
        let expr = reference.to_expr();
        state
            .resolved_bindings
            .insert(symbol.to_owned(), reference);
        Ok(expr)
    }
}
