//! Per-kind rewrite rules
//!
//! Every handler re-checks the shape of the node it receives and silently
//! does nothing when the node is not what it expects. An engine that runs
//! after another may therefore see a node that has already been replaced.

use anyhow::Result;
use log::{debug, trace};

use super::{ImportPlugin, state::PluginState};
use crate::{
    ast::{DefaultExport, Expr, ImportSpecifier, Stmt},
    scope::BindingKind,
    transformation_context::TransformationType,
    traversal::{NodeKind, NodeMut, TraversalContext},
};

/// Signature shared by all node handlers
pub type Handler = fn(
    &ImportPlugin,
    &mut PluginState,
    &mut NodeMut<'_>,
    &mut TraversalContext<'_>,
) -> Result<()>;

/// Handler implementing the rewrite rule for `kind`
pub fn handler_for(kind: NodeKind) -> Handler {
    match kind {
        NodeKind::ImportDeclaration => import_declaration,
        NodeKind::CallExpression => call_expression,
        NodeKind::MemberExpression => member_expression,
        NodeKind::Property => property,
        NodeKind::VariableDeclarator => variable_declarator,
        NodeKind::ArrayExpression => array_expression,
        NodeKind::LogicalExpression | NodeKind::BinaryExpression => binary_operands,
        NodeKind::ConditionalExpression => conditional_expression,
        NodeKind::IfStatement => if_statement,
        NodeKind::ExpressionStatement => expression_statement,
        NodeKind::ReturnStatement => return_statement,
        NodeKind::ExportDefaultDeclaration => export_default_declaration,
        NodeKind::NewExpression => new_expression,
    }
}

/// How an identifier must be bound for it to be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingCheck {
    /// Still bound to the named import specifier
    ImportSpecifier,
    /// Nearest scope declaring the name is the program scope
    ProgramScope,
}

impl BindingCheck {
    fn holds(self, name: &str, cx: &TraversalContext<'_>) -> bool {
        match self {
            Self::ImportSpecifier => cx
                .binding(name)
                .is_some_and(|binding| binding.kind == BindingKind::ImportSpecifier),
            Self::ProgramScope => cx.scopes.is_program_binding(name),
        }
    }
}

impl ImportPlugin {
    /// Replace `slot` when it is a tracked identifier that passes `check`
    ///
    /// Returns whether the slot was rewritten.
    pub fn rewrite_identifier(
        &self,
        slot: &mut Expr,
        check: BindingCheck,
        state: &mut PluginState,
        cx: &mut TraversalContext<'_>,
    ) -> Result<bool> {
        let Expr::Identifier(ident) = slot else {
            return Ok(false);
        };
        let Some(symbol) = state.symbol_for(&ident.name).map(str::to_owned) else {
            return Ok(false);
        };
        if !check.holds(&ident.name, cx) {
            debug!(
                "Leaving {} alone in {}: no longer bound to the {} import",
                ident.name,
                cx.file.display_name(),
                self.library_name
            );
            return Ok(false);
        }

        let local = ident.name.clone();
        *slot = self.import_method(&symbol, state, cx)?;
        trace!("Rewrote {local} to {symbol} of {}", self.library_name);
        cx.transformations.record(
            &self.library_name,
            TransformationType::SymbolRewritten { local, symbol },
        );
        Ok(true)
    }

    fn rewrite_all(
        &self,
        slots: &mut [Expr],
        state: &mut PluginState,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()> {
        for slot in slots {
            self.rewrite_identifier(slot, BindingCheck::ImportSpecifier, state, cx)?;
        }
        Ok(())
    }
}

fn import_declaration(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    _cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Stmt(Stmt::Import(import)) = node else {
        return Ok(());
    };
    if import.source.as_str() != Some(plugin.library_name()) {
        return Ok(());
    }

    for specifier in &import.specifiers {
        match specifier {
            ImportSpecifier::Named { imported, local } => {
                if let Some(symbol) = imported.name() {
                    state
                        .specified
                        .insert(local.name.clone(), symbol.to_owned());
                }
            }
            ImportSpecifier::Default { local } | ImportSpecifier::Namespace { local } => {
                state.library_objs.insert(local.name.clone());
            }
        }
    }
    debug!(
        "Tracking barrel import {} of {} ({} symbols, {} namespaces)",
        import.id,
        plugin.library_name(),
        state.specified.len(),
        state.library_objs.len()
    );
    state.pending_removals.push(import.id);
    Ok(())
}

fn call_expression(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(Expr::Call(call)) = node else {
        return Ok(());
    };
    plugin.rewrite_identifier(&mut call.callee, BindingCheck::ImportSpecifier, state, cx)?;
    plugin.rewrite_all(&mut call.arguments, state, cx)
}

fn new_expression(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(Expr::New(new)) = node else {
        return Ok(());
    };
    plugin.rewrite_identifier(&mut new.callee, BindingCheck::ImportSpecifier, state, cx)?;
    plugin.rewrite_all(&mut new.arguments, state, cx)
}

fn member_expression(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(expr) = node else {
        return Ok(());
    };
    let Expr::Member(member) = &mut **expr else {
        return Ok(());
    };

    if let Some(namespace) = member.object.as_identifier().map(|ident| ident.name.clone())
        && state.is_library_object(&namespace)
    {
        let bound = cx
            .binding(&namespace)
            .is_some_and(|binding| binding.kind.is_module_object_import());
        let Some(symbol) = member.static_property_name().map(str::to_owned) else {
            return Ok(());
        };
        if !bound {
            debug!("Leaving {namespace}.{symbol} alone: {namespace} is shadowed");
            return Ok(());
        }

        let replacement = plugin.import_method(&symbol, state, cx)?;
        **expr = replacement;
        trace!("Collapsed {namespace}.{symbol}");
        cx.transformations.record(
            plugin.library_name(),
            TransformationType::NamespaceMemberCollapsed { namespace, symbol },
        );
        return Ok(());
    }

    plugin.rewrite_identifier(&mut member.object, BindingCheck::ImportSpecifier, state, cx)?;
    Ok(())
}

fn property(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Property(property) = node else {
        return Ok(());
    };
    if plugin.rewrite_identifier(&mut property.value, BindingCheck::ImportSpecifier, state, cx)? {
        // `{ Button }` must keep its key once the value is renamed
        property.shorthand = false;
    }
    Ok(())
}

fn variable_declarator(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Declarator(declarator) = node else {
        return Ok(());
    };
    if let Some(init) = &mut declarator.init {
        plugin.rewrite_identifier(init, BindingCheck::ImportSpecifier, state, cx)?;
    }
    Ok(())
}

fn array_expression(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(Expr::Array(array)) = node else {
        return Ok(());
    };
    for element in array.elements.iter_mut().flatten() {
        plugin.rewrite_identifier(element, BindingCheck::ImportSpecifier, state, cx)?;
    }
    Ok(())
}

/// Operands of binary and logical expressions
fn binary_operands(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(Expr::Binary(binary) | Expr::Logical(binary)) = node else {
        return Ok(());
    };
    plugin.rewrite_identifier(&mut binary.left, BindingCheck::ImportSpecifier, state, cx)?;
    plugin.rewrite_identifier(&mut binary.right, BindingCheck::ImportSpecifier, state, cx)?;
    Ok(())
}

fn conditional_expression(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Expr(Expr::Conditional(conditional)) = node else {
        return Ok(());
    };
    for slot in [
        &mut conditional.test,
        &mut conditional.consequent,
        &mut conditional.alternate,
    ] {
        plugin.rewrite_identifier(slot, BindingCheck::ImportSpecifier, state, cx)?;
    }
    Ok(())
}

fn if_statement(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Stmt(Stmt::If(if_stmt)) = node else {
        return Ok(());
    };
    plugin.rewrite_identifier(&mut if_stmt.test, BindingCheck::ImportSpecifier, state, cx)?;
    if let Expr::Binary(binary) | Expr::Logical(binary) = &mut if_stmt.test {
        plugin.rewrite_identifier(&mut binary.left, BindingCheck::ImportSpecifier, state, cx)?;
        plugin.rewrite_identifier(&mut binary.right, BindingCheck::ImportSpecifier, state, cx)?;
    }
    Ok(())
}

/// Only the value side of `target = value;`
fn expression_statement(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Stmt(Stmt::Expression(statement)) = node else {
        return Ok(());
    };
    if let Expr::Assignment(assignment) = &mut statement.expression {
        plugin.rewrite_identifier(
            &mut assignment.right,
            BindingCheck::ImportSpecifier,
            state,
            cx,
        )?;
    }
    Ok(())
}

fn return_statement(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Stmt(Stmt::Return(statement)) = node else {
        return Ok(());
    };
    if let Some(argument) = &mut statement.argument {
        plugin.rewrite_identifier(argument, BindingCheck::ProgramScope, state, cx)?;
    }
    Ok(())
}

fn export_default_declaration(
    plugin: &ImportPlugin,
    state: &mut PluginState,
    node: &mut NodeMut<'_>,
    cx: &mut TraversalContext<'_>,
) -> Result<()> {
    let NodeMut::Stmt(Stmt::ExportDefault(export)) = node else {
        return Ok(());
    };
    if let DefaultExport::Expression(expr) = &mut export.declaration {
        plugin.rewrite_identifier(expr, BindingCheck::ImportSpecifier, state, cx)?;
    }
    Ok(())
}
