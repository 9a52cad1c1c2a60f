//! Fan-out of traversal events to every configured engine
//!
//! The dispatcher owns one [`ImportPlugin`] per library record and an
//! index-aligned list of [`PluginState`] slots. Every event is delivered to
//! the engines in configuration order, so a later engine sees the tree as
//! the earlier ones left it.

use anyhow::{Result, anyhow, ensure};
use log::{info, trace};

use crate::{
    ast::Program,
    config::Config,
    plugin::{ImportPlugin, PluginState},
    transformation_context::TransformationContext,
    traversal::{NodeKind, NodeMut, NodeVisitor, TraversalContext, traverse_program},
    types::FileContext,
};

/// Runs every configured engine over a program in one pass
#[derive(Debug)]
pub struct Dispatcher {
    plugins: Vec<ImportPlugin>,
    /// Indexed by [`ImportPlugin::index`]
    states: Vec<PluginState>,
}

impl Dispatcher {
    /// Build one engine per library record, failing on the first invalid one
    pub fn new(config: &Config) -> Result<Self> {
        ensure!(
            !config.libraries.is_empty(),
            "at least one library must be configured"
        );
        let plugins = config
            .libraries
            .iter()
            .enumerate()
            .map(|(index, library)| ImportPlugin::new(library, index))
            .collect::<Result<Vec<_>>>()?;
        let states = vec![PluginState::default(); plugins.len()];
        Ok(Self { plugins, states })
    }

    /// State left behind by the last program for the engine at `index`
    pub fn state(&self, index: usize) -> Option<&PluginState> {
        self.states.get(index)
    }

    /// Rewrite `program` in place
    pub fn transform(
        &mut self,
        program: &mut Program,
        file: &FileContext,
    ) -> Result<TransformationContext> {
        let transformations = traverse_program(program, file, self)?;
        info!(
            "{}: {}",
            file.display_name(),
            transformations.get_stats()
        );
        Ok(transformations)
    }

    /// Run `f` on every engine, in configured order, with its own state slot
    fn for_each_engine(
        &mut self,
        mut f: impl FnMut(&ImportPlugin, &mut PluginState) -> Result<()>,
    ) -> Result<()> {
        for plugin in &self.plugins {
            let state = self
                .states
                .get_mut(plugin.index())
                .ok_or_else(|| anyhow!("no state slot for library entry #{}", plugin.index()))?;
            f(plugin, state)?;
        }
        Ok(())
    }
}

impl NodeVisitor for Dispatcher {
    fn enter_program(&mut self, _program: &Program, cx: &mut TraversalContext<'_>) -> Result<()> {
        trace!(
            "Entering {} with {} engines",
            cx.file.display_name(),
            self.plugins.len()
        );
        self.for_each_engine(|plugin, state| {
            plugin.program_enter(state);
            Ok(())
        })
    }

    fn visit_node(
        &mut self,
        kind: NodeKind,
        node: &mut NodeMut<'_>,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()> {
        self.for_each_engine(|plugin, state| plugin.handle(kind, state, node, &mut *cx))
    }

    fn exit_program(
        &mut self,
        program: &mut Program,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()> {
        self.for_each_engine(|plugin, state| {
            plugin.program_exit(state, program, cx);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::Stmt,
        ast_builder::{call, expr_stmt, ident, import_from},
        config::LibraryConfig,
        transformation_context::TransformationType,
    };

    fn import_sources(program: &Program) -> Vec<String> {
        program
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Import(import) => import.source.as_str().map(str::to_owned),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rejects_empty_and_unnamed_configs() {
        assert!(Dispatcher::new(&Config::default()).is_err());

        let config = Config::new(vec![LibraryConfig::new("antd"), LibraryConfig::default()]);
        let err = Dispatcher::new(&config).unwrap_err();
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_independent_libraries_share_one_pass() {
        let config = Config::new(vec![
            LibraryConfig::new("antd"),
            LibraryConfig {
                library_directory: Some(String::new()),
                camel_to_dash: Some(false),
                ..LibraryConfig::new("lodash")
            },
        ]);
        let mut dispatcher = Dispatcher::new(&config).unwrap();
        let mut program = Program::new(vec![
            import_from("antd", &[("Button", None)]),
            import_from("lodash", &[("debounce", None)]),
            expr_stmt(call(ident("debounce"), vec![ident("Button")])),
        ]);

        let transformations = dispatcher
            .transform(&mut program, &FileContext::anonymous())
            .unwrap();

        // Engines run in configured order on the shared call node
        assert_eq!(
            import_sources(&program),
            vec!["antd/lib/button", "lodash/debounce"]
        );
        assert_eq!(dispatcher.state(0).unwrap().specified.len(), 1);
        assert!(dispatcher.state(0).unwrap().specified.contains_key("Button"));
        assert!(dispatcher.state(1).unwrap().specified.contains_key("debounce"));
        assert!(dispatcher.state(2).is_none());
        assert_eq!(transformations.for_library("lodash").count(), 3);
    }

    #[test]
    fn test_state_slots_follow_engine_index() {
        let antd = ImportPlugin::new(&LibraryConfig::new("antd"), 0).unwrap();
        let lodash = ImportPlugin::new(&LibraryConfig::new("lodash"), 1).unwrap();
        // Dispatch order differs from slot order
        let mut dispatcher = Dispatcher {
            plugins: vec![lodash, antd],
            states: vec![PluginState::default(); 2],
        };
        let mut program = Program::new(vec![
            import_from("antd", &[("Button", None)]),
            import_from("lodash", &[("debounce", None)]),
            expr_stmt(call(ident("debounce"), vec![ident("Button")])),
        ]);

        dispatcher
            .transform(&mut program, &FileContext::anonymous())
            .unwrap();

        assert!(dispatcher.state(0).unwrap().resolved_bindings.contains_key("Button"));
        assert!(dispatcher.state(1).unwrap().resolved_bindings.contains_key("debounce"));
    }

    #[test]
    fn test_missing_state_slot_is_an_error() {
        let mut dispatcher = Dispatcher {
            plugins: vec![ImportPlugin::new(&LibraryConfig::new("antd"), 4).unwrap()],
            states: vec![PluginState::default()],
        };
        let mut program = Program::new(Vec::new());

        let err = dispatcher
            .transform(&mut program, &FileContext::anonymous())
            .unwrap_err();
        assert_eq!(err.to_string(), "no state slot for library entry #4");
    }

    #[test]
    fn test_shared_barrel_import_is_removed_once() {
        let config = Config::new(vec![
            LibraryConfig::new("antd"),
            LibraryConfig {
                library_directory: Some("es".to_owned()),
                ..LibraryConfig::new("antd")
            },
        ]);
        let mut dispatcher = Dispatcher::new(&config).unwrap();
        let mut program = Program::new(vec![
            import_from("antd", &[("Button", None)]),
            expr_stmt(call(ident("Button"), vec![])),
        ]);

        let transformations = dispatcher
            .transform(&mut program, &FileContext::anonymous())
            .unwrap();

        let removals: Vec<_> = transformations
            .transformations
            .iter()
            .filter(|record| {
                matches!(
                    record.transformation_type,
                    TransformationType::BarrelImportRemoved { .. }
                )
            })
            .collect();
        assert_eq!(removals.len(), 1);
        // The first engine rewrote the call, the second found nothing left
        assert_eq!(import_sources(&program), vec!["antd/lib/button"]);
    }

    #[test]
    fn test_state_is_reset_per_program() {
        let mut dispatcher = Dispatcher::new(&Config::single("antd")).unwrap();

        let mut first = Program::new(vec![
            import_from("antd", &[("Button", None)]),
            expr_stmt(call(ident("Button"), vec![])),
        ]);
        dispatcher
            .transform(&mut first, &FileContext::new("a.json"))
            .unwrap();
        assert_eq!(dispatcher.state(0).unwrap().resolved_bindings.len(), 1);

        let mut second = Program::new(vec![expr_stmt(call(ident("Button"), vec![]))]);
        let transformations = dispatcher
            .transform(&mut second, &FileContext::new("b.json"))
            .unwrap();
        assert!(transformations.is_empty());
        assert!(dispatcher.state(0).unwrap().resolved_bindings.is_empty());
        assert_eq!(second.body.len(), 1);
    }
}
