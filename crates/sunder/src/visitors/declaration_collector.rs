//! Declaration collector that respects JavaScript hoisting rules
//!
//! This visitor walks the statements of one scope in source order and collects
//! the names that scope declares. Lexical declarations (`let`, `const`,
//! `class`, block-level functions, imports) are only collected from the
//! statements directly in the body, while `var` declarations are hoisted out
//! of nested blocks up to the enclosing function or program.

use crate::{
    ast::{
        DefaultDeclaration, DefaultExport, ForHead, ForInit, ImportSpecifier, ObjectPatternMember,
        Pattern, Stmt, VariableDeclaration, VariableKind,
    },
    scope::BindingKind,
};

/// A name declared in a scope together with the kind of its declaration
pub type Declaration = (String, BindingKind);

/// Visitor that collects the declarations owned by one scope
#[derive(Debug)]
pub struct DeclarationCollector<'a> {
    /// Collected declarations in source order
    declarations: &'a mut Vec<Declaration>,
    /// Whether `var` declarations in nested blocks belong to this scope
    hoist_vars: bool,
}

impl<'a> DeclarationCollector<'a> {
    /// Collector for a function or program body
    pub fn for_function(declarations: &'a mut Vec<Declaration>) -> Self {
        Self {
            declarations,
            hoist_vars: true,
        }
    }

    /// Collector for a block body; only lexical declarations are kept
    pub fn for_block(declarations: &'a mut Vec<Declaration>) -> Self {
        Self {
            declarations,
            hoist_vars: false,
        }
    }

    /// Collect declarations from the statements of a scope body
    pub fn collect_from_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.collect_lexical(stmt);
        }
        if self.hoist_vars {
            for stmt in stmts {
                self.collect_hoisted_vars(stmt);
            }
        }
    }

    /// Collect the names bound by a `let`/`const` loop head
    pub fn collect_loop_head(&mut self, declaration: &VariableDeclaration) {
        if declaration.kind.is_lexical() {
            self.collect_variable_declaration(declaration);
        }
    }

    fn push(&mut self, name: &str, kind: BindingKind) {
        self.declarations.push((name.to_owned(), kind));
    }

    /// Declarations made by the statement itself, never descending into blocks
    fn collect_lexical(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Import(import) => {
                for specifier in &import.specifiers {
                    let kind = match specifier {
                        ImportSpecifier::Named { .. } => BindingKind::ImportSpecifier,
                        ImportSpecifier::Default { .. } => BindingKind::ImportDefaultSpecifier,
                        ImportSpecifier::Namespace { .. } => BindingKind::ImportNamespaceSpecifier,
                    };
                    self.push(&specifier.local().name, kind);
                }
            }
            Stmt::VariableDeclaration(declaration) if declaration.kind.is_lexical() => {
                self.collect_variable_declaration(declaration);
            }
            Stmt::FunctionDeclaration(function) => {
                if let Some(id) = &function.id {
                    self.push(&id.name, BindingKind::FunctionDeclaration);
                }
            }
            Stmt::ClassDeclaration(class) => {
                if let Some(id) = &class.id {
                    self.push(&id.name, BindingKind::ClassDeclaration);
                }
            }
            Stmt::ExportNamed(export) => {
                if let Some(declaration) = &export.declaration {
                    self.collect_lexical(declaration);
                }
            }
            Stmt::ExportDefault(export) => match &export.declaration {
                DefaultExport::Declaration(DefaultDeclaration::Function(function)) => {
                    if let Some(id) = &function.id {
                        self.push(&id.name, BindingKind::FunctionDeclaration);
                    }
                }
                DefaultExport::Declaration(DefaultDeclaration::Class(class)) => {
                    if let Some(id) = &class.id {
                        self.push(&id.name, BindingKind::ClassDeclaration);
                    }
                }
                DefaultExport::Expression(_) => {}
            },
            _ => {}
        }
    }

    /// `var` declarations anywhere below the statement, stopping at functions
    fn collect_hoisted_vars(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VariableDeclaration(declaration) if declaration.kind == VariableKind::Var => {
                self.collect_variable_declaration(declaration);
            }
            Stmt::ExportNamed(export) => {
                if let Some(declaration) = &export.declaration {
                    self.collect_hoisted_vars(declaration);
                }
            }
            Stmt::Block(block) => {
                for stmt in &block.body {
                    self.collect_hoisted_vars(stmt);
                }
            }
            Stmt::If(if_stmt) => {
                self.collect_hoisted_vars(&if_stmt.consequent);
                if let Some(alternate) = &if_stmt.alternate {
                    self.collect_hoisted_vars(alternate);
                }
            }
            Stmt::While(while_stmt) => self.collect_hoisted_vars(&while_stmt.body),
            Stmt::For(for_stmt) => {
                if let Some(ForInit::Declaration(declaration)) = &for_stmt.init
                    && declaration.kind == VariableKind::Var
                {
                    self.collect_variable_declaration(declaration);
                }
                self.collect_hoisted_vars(&for_stmt.body);
            }
            Stmt::ForIn(for_each) | Stmt::ForOf(for_each) => {
                if let ForHead::Declaration(declaration) = &for_each.left
                    && declaration.kind == VariableKind::Var
                {
                    self.collect_variable_declaration(declaration);
                }
                self.collect_hoisted_vars(&for_each.body);
            }
            Stmt::Try(try_stmt) => {
                for stmt in &try_stmt.block.body {
                    self.collect_hoisted_vars(stmt);
                }
                if let Some(handler) = &try_stmt.handler {
                    for stmt in &handler.body.body {
                        self.collect_hoisted_vars(stmt);
                    }
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    for stmt in &finalizer.body {
                        self.collect_hoisted_vars(stmt);
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        let kind = BindingKind::Variable(declaration.kind);
        for declarator in &declaration.declarations {
            let mut names = Vec::new();
            collect_pattern_names(&declarator.id, &mut names);
            for name in names {
                self.declarations.push((name, kind));
            }
        }
    }
}

/// Extract every name bound by a binding pattern
pub fn collect_pattern_names(pattern: &Pattern, names: &mut Vec<String>) {
    match pattern {
        Pattern::Identifier(ident) => names.push(ident.name.clone()),
        Pattern::Object(object) => {
            for member in &object.properties {
                match member {
                    ObjectPatternMember::Property(property) => {
                        collect_pattern_names(&property.value, names);
                    }
                    ObjectPatternMember::Rest(rest) => collect_pattern_names(&rest.argument, names),
                }
            }
        }
        Pattern::Array(array) => {
            for element in array.elements.iter().flatten() {
                collect_pattern_names(element, names);
            }
        }
        Pattern::Assignment(assignment) => collect_pattern_names(&assignment.left, names),
        Pattern::Rest(rest) => collect_pattern_names(&rest.argument, names),
        // Member targets assign to existing objects and bind nothing
        Pattern::Member(_) => {}
    }
}
