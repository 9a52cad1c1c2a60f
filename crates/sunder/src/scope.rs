//! Lexical scope tracking for the traversal
//!
//! The traverser pushes a [`Scope`] whenever it enters a program, function,
//! block, loop head or catch clause, pre-populated with every name that scope
//! declares (hoisting included). Handlers query the [`ScopeStack`] to find out
//! what an identifier is bound to at the node currently being visited.

use rustc_hash::FxHashMap;

use crate::{
    ast::{CatchClause, Pattern, Stmt, VariableDeclaration, VariableKind},
    visitors::{DeclarationCollector, collect_pattern_names},
};

/// Syntactic kind of the declaration that introduced a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// `import { a } from "..."`
    ImportSpecifier,
    /// `import a from "..."`
    ImportDefaultSpecifier,
    /// `import * as a from "..."`
    ImportNamespaceSpecifier,
    Variable(VariableKind),
    FunctionDeclaration,
    ClassDeclaration,
    /// Name of a function or class expression, visible inside its own body
    SelfReference,
    Param,
    CatchParam,
}

impl BindingKind {
    /// Bindings that refer to the whole module object of an import
    pub fn is_module_object_import(self) -> bool {
        matches!(
            self,
            Self::ImportDefaultSpecifier | Self::ImportNamespaceSpecifier
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    Function,
    Block,
}

/// Bindings owned by one scope
#[derive(Debug, Clone)]
pub struct Scope {
    kind: ScopeKind,
    bindings: FxHashMap<String, BindingKind>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            bindings: FxHashMap::default(),
        }
    }

    /// Scope of a module body: imports, top-level declarations and hoisted `var`s
    pub fn program(body: &[Stmt]) -> Self {
        let mut declarations = Vec::new();
        DeclarationCollector::for_function(&mut declarations).collect_from_stmts(body);
        let mut scope = Self::new(ScopeKind::Program);
        scope.declare_all(declarations);
        scope
    }

    /// Scope of a function body
    ///
    /// `self_name` is the name of a function expression, which is visible
    /// inside the function unless a parameter or local declaration reuses it.
    pub fn function(params: &[Pattern], body: &[Stmt], self_name: Option<&str>) -> Self {
        let mut scope = Self::new(ScopeKind::Function);
        for param in params {
            let mut names = Vec::new();
            collect_pattern_names(param, &mut names);
            for name in names {
                scope.declare(name, BindingKind::Param);
            }
        }
        let mut declarations = Vec::new();
        DeclarationCollector::for_function(&mut declarations).collect_from_stmts(body);
        scope.declare_all(declarations);
        if let Some(name) = self_name {
            scope.declare(name.to_owned(), BindingKind::SelfReference);
        }
        scope
    }

    /// Scope of a block statement
    pub fn block(body: &[Stmt]) -> Self {
        let mut declarations = Vec::new();
        DeclarationCollector::for_block(&mut declarations).collect_from_stmts(body);
        let mut scope = Self::new(ScopeKind::Block);
        scope.declare_all(declarations);
        scope
    }

    /// Scope of a `for` loop whose head declares `let`/`const` bindings
    pub fn loop_head(declaration: &VariableDeclaration) -> Self {
        let mut declarations = Vec::new();
        DeclarationCollector::for_block(&mut declarations).collect_loop_head(declaration);
        let mut scope = Self::new(ScopeKind::Block);
        scope.declare_all(declarations);
        scope
    }

    /// Scope of a catch clause: its parameter plus the body's lexical names
    pub fn catch_clause(clause: &CatchClause) -> Self {
        let mut scope = Self::new(ScopeKind::Block);
        if let Some(param) = &clause.param {
            let mut names = Vec::new();
            collect_pattern_names(param, &mut names);
            for name in names {
                scope.declare(name, BindingKind::CatchParam);
            }
        }
        let mut declarations = Vec::new();
        DeclarationCollector::for_block(&mut declarations).collect_from_stmts(&clause.body.body);
        scope.declare_all(declarations);
        scope
    }

    /// Scope holding only the name of a class expression
    pub fn class_name(name: &str) -> Self {
        let mut scope = Self::new(ScopeKind::Block);
        scope.declare(name.to_owned(), BindingKind::SelfReference);
        scope
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn has_own_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // First declaration wins: a `var` never shadows a parameter or an import
    fn declare(&mut self, name: String, kind: BindingKind) {
        self.bindings.entry(name).or_insert(kind);
    }

    fn declare_all(&mut self, declarations: Vec<(String, BindingKind)>) {
        for (name, kind) in declarations {
            self.declare(name, kind);
        }
    }
}

/// Result of resolving a name against the scope stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBinding {
    /// Declaration kind of the binding
    pub kind: BindingKind,
    /// Kind of the nearest scope that owns the binding
    pub scope: ScopeKind,
    /// Depth of that scope; the program scope is depth 0
    pub depth: usize,
}

/// Stack of scopes enclosing the node currently being visited
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Resolve `name` to its innermost binding
    pub fn lookup(&self, name: &str) -> Option<ResolvedBinding> {
        self.scopes
            .iter()
            .enumerate()
            .rev()
            .find_map(|(depth, scope)| {
                scope.bindings.get(name).map(|kind| ResolvedBinding {
                    kind: *kind,
                    scope: scope.kind,
                    depth,
                })
            })
    }

    /// Whether the nearest scope owning `name` is the program scope
    pub fn is_program_binding(&self, name: &str) -> bool {
        self.lookup(name)
            .is_some_and(|binding| binding.scope == ScopeKind::Program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast_builder::{const_decl, ident, import_default, import_from, num};

    #[test]
    fn test_lookup_prefers_innermost_scope() {
        let mut stack = ScopeStack::new();
        stack.push(Scope::program(&[import_from("antd", &[("Button", None)])]));

        assert_eq!(
            stack.lookup("Button"),
            Some(ResolvedBinding {
                kind: BindingKind::ImportSpecifier,
                scope: ScopeKind::Program,
                depth: 0,
            })
        );

        stack.push(Scope::block(&[const_decl("Button", num(1))]));
        let shadowed = stack.lookup("Button").unwrap();
        assert_eq!(shadowed.kind, BindingKind::Variable(VariableKind::Const));
        assert_eq!(shadowed.scope, ScopeKind::Block);
        assert!(!stack.is_program_binding("Button"));

        stack.pop();
        assert!(stack.is_program_binding("Button"));
        assert_eq!(stack.lookup("Missing"), None);
    }

    #[test]
    fn test_function_scope_params_and_self_name() {
        let params = vec![Pattern::Identifier(crate::ast::Identifier::new("props"))];
        let scope = Scope::function(&params, &[const_decl("local", ident("props"))], Some("f"));

        assert_eq!(scope.kind(), ScopeKind::Function);
        assert!(scope.has_own_binding("props"));
        assert!(scope.has_own_binding("local"));
        assert!(scope.has_own_binding("f"));
    }

    #[test]
    fn test_module_object_import_kinds() {
        let scope = Scope::program(&[import_default("Lib", "antd")]);
        let mut stack = ScopeStack::new();
        stack.push(scope);

        let binding = stack.lookup("Lib").unwrap();
        assert!(binding.kind.is_module_object_import());
        assert!(!BindingKind::ImportSpecifier.is_module_object_import());
    }
}
