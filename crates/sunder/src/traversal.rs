//! Depth-first traversal of a program with lexical scope tracking
//!
//! The walker visits nodes in document order. For every node of a handled
//! [`NodeKind`] it hands a mutable view of the node to the [`NodeVisitor`]
//! before descending, then walks the children of whatever now occupies that
//! slot. Scopes are pushed and popped around functions, blocks, loop heads,
//! catch clauses and named class expressions so visitors can ask what an
//! identifier is bound to at the current position.

use anyhow::Result;
use log::trace;

use crate::{
    ast::{
        ArrowBody, Class, ClassMember, DefaultDeclaration, DefaultExport, Expr, ForHead, ForInit,
        Function, ObjectMember, ObjectPatternMember, Pattern, Program, Property, Stmt,
        VariableDeclaration, VariableDeclarator,
    },
    import_injector::ImportInjector,
    scope::{ResolvedBinding, Scope, ScopeStack},
    transformation_context::TransformationContext,
    types::FileContext,
    visitors::IdentifierCollector,
};

/// Node kinds that visitors are notified about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ImportDeclaration,
    CallExpression,
    MemberExpression,
    Property,
    VariableDeclarator,
    ArrayExpression,
    LogicalExpression,
    ConditionalExpression,
    IfStatement,
    ExpressionStatement,
    ReturnStatement,
    ExportDefaultDeclaration,
    BinaryExpression,
    NewExpression,
}

impl NodeKind {
    pub const ALL: [Self; 14] = [
        Self::ImportDeclaration,
        Self::CallExpression,
        Self::MemberExpression,
        Self::Property,
        Self::VariableDeclarator,
        Self::ArrayExpression,
        Self::LogicalExpression,
        Self::ConditionalExpression,
        Self::IfStatement,
        Self::ExpressionStatement,
        Self::ReturnStatement,
        Self::ExportDefaultDeclaration,
        Self::BinaryExpression,
        Self::NewExpression,
    ];

    fn of_stmt(stmt: &Stmt) -> Option<Self> {
        match stmt {
            Stmt::Import(_) => Some(Self::ImportDeclaration),
            Stmt::If(_) => Some(Self::IfStatement),
            Stmt::Expression(_) => Some(Self::ExpressionStatement),
            Stmt::Return(_) => Some(Self::ReturnStatement),
            Stmt::ExportDefault(_) => Some(Self::ExportDefaultDeclaration),
            _ => None,
        }
    }

    fn of_expr(expr: &Expr) -> Option<Self> {
        match expr {
            Expr::Call(_) => Some(Self::CallExpression),
            Expr::Member(_) => Some(Self::MemberExpression),
            Expr::Array(_) => Some(Self::ArrayExpression),
            Expr::Logical(_) => Some(Self::LogicalExpression),
            Expr::Conditional(_) => Some(Self::ConditionalExpression),
            Expr::Binary(_) => Some(Self::BinaryExpression),
            Expr::New(_) => Some(Self::NewExpression),
            _ => None,
        }
    }
}

/// Mutable view of the node being visited
///
/// Visitors replace sub-positions in place (`*slot = expr`) or the whole
/// node by assigning through the inner reference.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Stmt(&'a mut Stmt),
    Expr(&'a mut Expr),
    Property(&'a mut Property),
    Declarator(&'a mut VariableDeclarator),
}

/// State shared by every visitor during one traversal
#[derive(Debug)]
pub struct TraversalContext<'a> {
    pub file: &'a FileContext,
    pub scopes: ScopeStack,
    pub injector: ImportInjector,
    pub transformations: TransformationContext,
}

impl<'a> TraversalContext<'a> {
    pub fn new(file: &'a FileContext, program: &Program) -> Self {
        Self {
            file,
            scopes: ScopeStack::new(),
            injector: ImportInjector::new(IdentifierCollector::collect(program)),
            transformations: TransformationContext::new(),
        }
    }

    /// Binding of `name` at the node currently being visited
    pub fn binding(&self, name: &str) -> Option<ResolvedBinding> {
        self.scopes.lookup(name)
    }
}

/// Receiver of traversal events
pub trait NodeVisitor {
    /// Called once before any node is visited
    fn enter_program(&mut self, program: &Program, cx: &mut TraversalContext<'_>) -> Result<()>;

    /// Called for every node of a handled kind, before its children
    fn visit_node(
        &mut self,
        kind: NodeKind,
        node: &mut NodeMut<'_>,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()>;

    /// Called once after the whole body has been walked
    fn exit_program(
        &mut self,
        program: &mut Program,
        cx: &mut TraversalContext<'_>,
    ) -> Result<()>;
}

/// Walk `program` once, notifying `visitor`, then splice injected imports
///
/// Returns the record of everything the visitor changed.
pub fn traverse_program<V: NodeVisitor>(
    program: &mut Program,
    file: &FileContext,
    visitor: &mut V,
) -> Result<TransformationContext> {
    program.assign_node_ids();
    let mut cx = TraversalContext::new(file, program);
    cx.scopes.push(Scope::program(&program.body));

    visitor.enter_program(program, &mut cx)?;
    {
        let mut walker = Walker {
            visitor: &mut *visitor,
            cx: &mut cx,
        };
        walker.walk_stmts(&mut program.body)?;
    }
    visitor.exit_program(program, &mut cx)?;

    cx.scopes.pop();
    program.prepend_statements(cx.injector.take_statements());
    Ok(cx.transformations)
}

struct Walker<'v, 'c, 'f, V> {
    visitor: &'v mut V,
    cx: &'c mut TraversalContext<'f>,
}

impl<V: NodeVisitor> Walker<'_, '_, '_, V> {
    fn dispatch(&mut self, kind: NodeKind, mut node: NodeMut<'_>) -> Result<()> {
        trace!("Visiting {kind:?} at scope depth {}", self.cx.scopes.depth());
        self.visitor.visit_node(kind, &mut node, self.cx)
    }

    fn with_scope(
        &mut self,
        scope: Scope,
        walk: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        self.cx.scopes.push(scope);
        let result = walk(self);
        self.cx.scopes.pop();
        result
    }

    fn walk_stmts(&mut self, stmts: &mut [Stmt]) -> Result<()> {
        for stmt in stmts {
            self.walk_stmt(stmt)?;
        }
        Ok(())
    }

    fn walk_stmt(&mut self, stmt: &mut Stmt) -> Result<()> {
        if let Some(kind) = NodeKind::of_stmt(stmt) {
            self.dispatch(kind, NodeMut::Stmt(stmt))?;
        }

        match stmt {
            Stmt::Import(_) | Stmt::Break(_) | Stmt::Continue(_) | Stmt::Empty => Ok(()),
            Stmt::ExportDefault(export) => match &mut export.declaration {
                DefaultExport::Expression(expr) => self.walk_expr(expr),
                DefaultExport::Declaration(DefaultDeclaration::Function(function)) => {
                    self.walk_function(function, false)
                }
                DefaultExport::Declaration(DefaultDeclaration::Class(class)) => {
                    self.walk_class(class)
                }
            },
            Stmt::ExportNamed(export) => match &mut export.declaration {
                Some(declaration) => self.walk_stmt(declaration),
                None => Ok(()),
            },
            Stmt::Expression(statement) => self.walk_expr(&mut statement.expression),
            Stmt::VariableDeclaration(declaration) => self.walk_variable_declaration(declaration),
            Stmt::FunctionDeclaration(function) => self.walk_function(function, false),
            Stmt::ClassDeclaration(class) => self.walk_class(class),
            Stmt::Return(statement) => self.walk_opt_expr(statement.argument.as_mut()),
            Stmt::If(if_stmt) => {
                self.walk_expr(&mut if_stmt.test)?;
                self.walk_stmt(&mut if_stmt.consequent)?;
                match &mut if_stmt.alternate {
                    Some(alternate) => self.walk_stmt(alternate),
                    None => Ok(()),
                }
            }
            Stmt::Block(block) => {
                let scope = Scope::block(&block.body);
                self.with_scope(scope, |walker| walker.walk_stmts(&mut block.body))
            }
            Stmt::While(while_stmt) => {
                self.walk_expr(&mut while_stmt.test)?;
                self.walk_stmt(&mut while_stmt.body)
            }
            Stmt::Throw(throw) => self.walk_expr(&mut throw.argument),
            Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_) => self.walk_loop(stmt),
            Stmt::Try(try_stmt) => {
                let scope = Scope::block(&try_stmt.block.body);
                self.with_scope(scope, |walker| walker.walk_stmts(&mut try_stmt.block.body))?;
                if let Some(handler) = &mut try_stmt.handler {
                    let scope = Scope::catch_clause(handler);
                    self.with_scope(scope, |walker| {
                        if let Some(param) = &mut handler.param {
                            walker.walk_pattern(param)?;
                        }
                        walker.walk_stmts(&mut handler.body.body)
                    })?;
                }
                if let Some(finalizer) = &mut try_stmt.finalizer {
                    let scope = Scope::block(&finalizer.body);
                    self.with_scope(scope, |walker| walker.walk_stmts(&mut finalizer.body))?;
                }
                Ok(())
            }
        }
    }

    fn walk_loop(&mut self, stmt: &mut Stmt) -> Result<()> {
        match stmt {
            Stmt::For(for_stmt) => {
                let head_scope = match &for_stmt.init {
                    Some(ForInit::Declaration(declaration)) if declaration.kind.is_lexical() => {
                        Some(Scope::loop_head(declaration))
                    }
                    _ => None,
                };
                self.with_optional_scope(head_scope, |walker| {
                    match &mut for_stmt.init {
                        Some(ForInit::Declaration(declaration)) => {
                            walker.walk_variable_declaration(declaration)?;
                        }
                        Some(ForInit::Expression(expr)) => walker.walk_expr(expr)?,
                        None => {}
                    }
                    walker.walk_opt_expr(for_stmt.test.as_mut())?;
                    walker.walk_opt_expr(for_stmt.update.as_mut())?;
                    walker.walk_stmt(&mut for_stmt.body)
                })
            }
            Stmt::ForIn(for_each) | Stmt::ForOf(for_each) => {
                let head_scope = match &for_each.left {
                    ForHead::Declaration(declaration) if declaration.kind.is_lexical() => {
                        Some(Scope::loop_head(declaration))
                    }
                    _ => None,
                };
                self.with_optional_scope(head_scope, |walker| {
                    match &mut for_each.left {
                        ForHead::Declaration(declaration) => {
                            walker.walk_variable_declaration(declaration)?;
                        }
                        ForHead::Pattern(pattern) => walker.walk_pattern(pattern)?,
                    }
                    walker.walk_expr(&mut for_each.right)?;
                    walker.walk_stmt(&mut for_each.body)
                })
            }
            _ => Ok(()),
        }
    }

    fn with_optional_scope(
        &mut self,
        scope: Option<Scope>,
        walk: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        match scope {
            Some(scope) => self.with_scope(scope, walk),
            None => walk(self),
        }
    }

    fn walk_variable_declaration(&mut self, declaration: &mut VariableDeclaration) -> Result<()> {
        for declarator in &mut declaration.declarations {
            self.dispatch(NodeKind::VariableDeclarator, NodeMut::Declarator(declarator))?;
            self.walk_pattern(&mut declarator.id)?;
            self.walk_opt_expr(declarator.init.as_mut())?;
        }
        Ok(())
    }

    /// `named_expression` marks function expressions whose name is visible
    /// inside their own body
    fn walk_function(&mut self, function: &mut Function, named_expression: bool) -> Result<()> {
        let self_name = function
            .id
            .as_ref()
            .filter(|_| named_expression)
            .map(|id| id.name.as_str());
        let scope = Scope::function(&function.params, &function.body.body, self_name);
        self.with_scope(scope, |walker| {
            for param in &mut function.params {
                walker.walk_pattern(param)?;
            }
            walker.walk_stmts(&mut function.body.body)
        })
    }

    fn walk_class(&mut self, class: &mut Class) -> Result<()> {
        if let Some(super_class) = &mut class.super_class {
            self.walk_expr(super_class)?;
        }
        for member in &mut class.body.body {
            match member {
                ClassMember::Method(method) => {
                    if method.computed {
                        self.walk_expr(&mut method.key)?;
                    }
                    self.walk_function(&mut method.value, false)?;
                }
                ClassMember::Property(property) => {
                    if property.computed {
                        self.walk_expr(&mut property.key)?;
                    }
                    self.walk_opt_expr(property.value.as_mut())?;
                }
            }
        }
        Ok(())
    }

    /// Expressions nested in binding and assignment patterns
    fn walk_pattern(&mut self, pattern: &mut Pattern) -> Result<()> {
        match pattern {
            Pattern::Identifier(_) => Ok(()),
            Pattern::Object(object) => {
                for member in &mut object.properties {
                    match member {
                        ObjectPatternMember::Property(property) => {
                            if property.computed {
                                self.walk_expr(&mut property.key)?;
                            }
                            self.walk_pattern(&mut property.value)?;
                        }
                        ObjectPatternMember::Rest(rest) => self.walk_pattern(&mut rest.argument)?,
                    }
                }
                Ok(())
            }
            Pattern::Array(array) => {
                for element in array.elements.iter_mut().flatten() {
                    self.walk_pattern(element)?;
                }
                Ok(())
            }
            Pattern::Assignment(assignment) => {
                self.walk_pattern(&mut assignment.left)?;
                self.walk_expr(&mut assignment.right)
            }
            Pattern::Rest(rest) => self.walk_pattern(&mut rest.argument),
            Pattern::Member(member) => {
                self.walk_expr(&mut member.object)?;
                if member.computed {
                    self.walk_expr(&mut member.property)?;
                }
                Ok(())
            }
        }
    }

    fn walk_opt_expr(&mut self, expr: Option<&mut Expr>) -> Result<()> {
        match expr {
            Some(expr) => self.walk_expr(expr),
            None => Ok(()),
        }
    }

    fn walk_exprs(&mut self, exprs: &mut [Expr]) -> Result<()> {
        for expr in exprs {
            self.walk_expr(expr)?;
        }
        Ok(())
    }

    fn walk_expr(&mut self, expr: &mut Expr) -> Result<()> {
        if let Some(kind) = NodeKind::of_expr(expr) {
            self.dispatch(kind, NodeMut::Expr(expr))?;
        }

        match expr {
            Expr::Identifier(_) | Expr::Literal(_) | Expr::This => Ok(()),
            Expr::Array(array) => {
                for element in array.elements.iter_mut().flatten() {
                    self.walk_expr(element)?;
                }
                Ok(())
            }
            Expr::Object(object) => {
                for member in &mut object.properties {
                    match member {
                        ObjectMember::Property(property) => self.walk_property(property)?,
                        ObjectMember::Spread(spread) => self.walk_expr(&mut spread.argument)?,
                    }
                }
                Ok(())
            }
            Expr::Function(function) => self.walk_function(function, true),
            Expr::Arrow(arrow) => {
                let scope = match &arrow.body {
                    ArrowBody::Block(block) => Scope::function(&arrow.params, &block.body, None),
                    ArrowBody::Expression(_) => Scope::function(&arrow.params, &[], None),
                };
                self.with_scope(scope, |walker| {
                    for param in &mut arrow.params {
                        walker.walk_pattern(param)?;
                    }
                    match &mut arrow.body {
                        ArrowBody::Block(block) => walker.walk_stmts(&mut block.body),
                        ArrowBody::Expression(body) => walker.walk_expr(body),
                    }
                })
            }
            Expr::Class(class) => {
                let name_scope = class.id.as_ref().map(|id| Scope::class_name(&id.name));
                self.with_optional_scope(name_scope, |walker| walker.walk_class(class))
            }
            Expr::Unary(unary) => self.walk_expr(&mut unary.argument),
            Expr::Update(update) => self.walk_expr(&mut update.argument),
            Expr::Await(wrapper) | Expr::Spread(wrapper) => self.walk_expr(&mut wrapper.argument),
            Expr::Binary(binary) | Expr::Logical(binary) => {
                self.walk_expr(&mut binary.left)?;
                self.walk_expr(&mut binary.right)
            }
            Expr::Assignment(assignment) => {
                self.walk_pattern(&mut assignment.left)?;
                self.walk_expr(&mut assignment.right)
            }
            Expr::Conditional(conditional) => {
                self.walk_expr(&mut conditional.test)?;
                self.walk_expr(&mut conditional.consequent)?;
                self.walk_expr(&mut conditional.alternate)
            }
            Expr::Call(call) | Expr::New(call) => {
                self.walk_expr(&mut call.callee)?;
                self.walk_exprs(&mut call.arguments)
            }
            Expr::Member(member) => {
                self.walk_expr(&mut member.object)?;
                if member.computed {
                    self.walk_expr(&mut member.property)?;
                }
                Ok(())
            }
            Expr::Sequence(sequence) => self.walk_exprs(&mut sequence.expressions),
        }
    }

    fn walk_property(&mut self, property: &mut Property) -> Result<()> {
        self.dispatch(NodeKind::Property, NodeMut::Property(property))?;
        if property.computed {
            self.walk_expr(&mut property.key)?;
        }
        self.walk_expr(&mut property.value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::VariableKind,
        ast_builder::{
            block, call, const_decl, expr_stmt, function_decl, ident, import_from, member,
            object_shorthand, return_stmt, string, var_decl,
        },
        scope::ScopeKind,
    };

    /// Records every visited kind with the scope kind `Button` resolves to
    #[derive(Default)]
    struct Recorder {
        entered: bool,
        exited: bool,
        visits: Vec<(NodeKind, Option<ScopeKind>)>,
    }

    impl NodeVisitor for Recorder {
        fn enter_program(&mut self, _: &Program, _: &mut TraversalContext<'_>) -> Result<()> {
            self.entered = true;
            Ok(())
        }

        fn visit_node(
            &mut self,
            kind: NodeKind,
            _: &mut NodeMut<'_>,
            cx: &mut TraversalContext<'_>,
        ) -> Result<()> {
            self.visits
                .push((kind, cx.binding("Button").map(|binding| binding.scope)));
            Ok(())
        }

        fn exit_program(&mut self, _: &mut Program, _: &mut TraversalContext<'_>) -> Result<()> {
            self.exited = true;
            Ok(())
        }
    }

    #[test]
    fn test_visits_in_document_order_with_scopes() {
        let mut program = Program::new(vec![
            import_from("antd", &[("Button", None)]),
            expr_stmt(call(ident("Button"), vec![])),
            function_decl(
                "render",
                &[],
                vec![
                    var_decl(VariableKind::Let, "Button", None),
                    return_stmt(Some(object_shorthand(&["Button"]))),
                ],
            ),
        ]);

        let mut recorder = Recorder::default();
        traverse_program(&mut program, &FileContext::anonymous(), &mut recorder).unwrap();

        assert!(recorder.entered && recorder.exited);
        assert_eq!(
            recorder.visits,
            vec![
                (NodeKind::ImportDeclaration, Some(ScopeKind::Program)),
                (NodeKind::ExpressionStatement, Some(ScopeKind::Program)),
                (NodeKind::CallExpression, Some(ScopeKind::Program)),
                (NodeKind::VariableDeclarator, Some(ScopeKind::Function)),
                (NodeKind::ReturnStatement, Some(ScopeKind::Function)),
                (NodeKind::Property, Some(ScopeKind::Function)),
            ]
        );
    }

    /// Replaces `Lib.Button` with `Button(inner())` to check that the children
    /// of the replacement are walked
    struct Replacer {
        calls_seen: usize,
    }

    impl NodeVisitor for Replacer {
        fn enter_program(&mut self, _: &Program, _: &mut TraversalContext<'_>) -> Result<()> {
            Ok(())
        }

        fn visit_node(
            &mut self,
            kind: NodeKind,
            node: &mut NodeMut<'_>,
            cx: &mut TraversalContext<'_>,
        ) -> Result<()> {
            match (kind, node) {
                (NodeKind::MemberExpression, NodeMut::Expr(expr)) => {
                    **expr = call(ident("Button"), vec![call(ident("inner"), vec![])]);
                    cx.injector.add_side_effect("antd/lib/button/style")?;
                }
                (NodeKind::CallExpression, _) => self.calls_seen += 1,
                _ => {}
            }
            Ok(())
        }

        fn exit_program(&mut self, _: &mut Program, _: &mut TraversalContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_replacement_children_are_walked_and_imports_spliced() {
        let mut program = Program::new(vec![
            const_decl("x", member(ident("Lib"), "Button")),
            block(vec![expr_stmt(string("done"))]),
        ]);

        let mut replacer = Replacer { calls_seen: 0 };
        traverse_program(&mut program, &FileContext::anonymous(), &mut replacer).unwrap();

        assert_eq!(replacer.calls_seen, 1);
        assert_eq!(program.body.len(), 3);
        assert!(matches!(&program.body[0], Stmt::Import(import)
            if import.source.as_str() == Some("antd/lib/button/style")));
    }
}
