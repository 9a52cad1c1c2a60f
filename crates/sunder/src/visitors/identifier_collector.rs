//! Identifier collector used to keep generated names collision free
//!
//! Walks a whole program and records every identifier name it sees, whether
//! it is a declaration, a reference or a property key. Generated local names
//! are only handed out if they appear nowhere in this set.

use rustc_hash::FxHashSet;

use crate::ast::{
    ArrowBody, Class, ClassMember, DefaultDeclaration, DefaultExport, Expr, ForHead, ForInit,
    Function, ImportSpecifier, ModuleExportName, ObjectMember, ObjectPatternMember, Pattern,
    Program, Stmt, VariableDeclaration,
};

/// Visitor that records all identifier names of a program
#[derive(Debug, Default)]
pub struct IdentifierCollector {
    names: FxHashSet<String>,
}

impl IdentifierCollector {
    /// Collect every identifier name used anywhere in `program`
    pub fn collect(program: &Program) -> FxHashSet<String> {
        let mut collector = Self::default();
        for stmt in &program.body {
            collector.visit_stmt(stmt);
        }
        collector.names
    }

    fn insert(&mut self, name: &str) {
        if !self.names.contains(name) {
            self.names.insert(name.to_owned());
        }
    }

    fn visit_module_export_name(&mut self, name: &ModuleExportName) {
        if let ModuleExportName::Identifier(ident) = name {
            self.insert(&ident.name);
        }
    }

    fn visit_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Import(import) => {
                for specifier in &import.specifiers {
                    if let ImportSpecifier::Named { imported, .. } = specifier {
                        self.visit_module_export_name(imported);
                    }
                    self.insert(&specifier.local().name);
                }
            }
            Stmt::ExportDefault(export) => match &export.declaration {
                DefaultExport::Declaration(DefaultDeclaration::Function(function)) => {
                    self.visit_function(function);
                }
                DefaultExport::Declaration(DefaultDeclaration::Class(class)) => {
                    self.visit_class(class);
                }
                DefaultExport::Expression(expr) => self.visit_expr(expr),
            },
            Stmt::ExportNamed(export) => {
                if let Some(declaration) = &export.declaration {
                    self.visit_stmt(declaration);
                }
                for specifier in &export.specifiers {
                    self.visit_module_export_name(&specifier.local);
                    self.visit_module_export_name(&specifier.exported);
                }
            }
            Stmt::Expression(stmt) => self.visit_expr(&stmt.expression),
            Stmt::VariableDeclaration(declaration) => self.visit_variable_declaration(declaration),
            Stmt::FunctionDeclaration(function) => self.visit_function(function),
            Stmt::ClassDeclaration(class) => self.visit_class(class),
            Stmt::Return(ret) => {
                if let Some(argument) = &ret.argument {
                    self.visit_expr(argument);
                }
            }
            Stmt::If(if_stmt) => {
                self.visit_expr(&if_stmt.test);
                self.visit_stmt(&if_stmt.consequent);
                if let Some(alternate) = &if_stmt.alternate {
                    self.visit_stmt(alternate);
                }
            }
            Stmt::Block(block) => self.visit_stmts(&block.body),
            Stmt::While(while_stmt) => {
                self.visit_expr(&while_stmt.test);
                self.visit_stmt(&while_stmt.body);
            }
            Stmt::For(for_stmt) => {
                match &for_stmt.init {
                    Some(ForInit::Declaration(declaration)) => {
                        self.visit_variable_declaration(declaration);
                    }
                    Some(ForInit::Expression(expr)) => self.visit_expr(expr),
                    None => {}
                }
                for expr in [&for_stmt.test, &for_stmt.update].into_iter().flatten() {
                    self.visit_expr(expr);
                }
                self.visit_stmt(&for_stmt.body);
            }
            Stmt::ForIn(for_each) | Stmt::ForOf(for_each) => {
                match &for_each.left {
                    ForHead::Declaration(declaration) => {
                        self.visit_variable_declaration(declaration);
                    }
                    ForHead::Pattern(pattern) => self.visit_pattern(pattern),
                }
                self.visit_expr(&for_each.right);
                self.visit_stmt(&for_each.body);
            }
            Stmt::Throw(throw) => self.visit_expr(&throw.argument),
            Stmt::Try(try_stmt) => {
                self.visit_stmts(&try_stmt.block.body);
                if let Some(handler) = &try_stmt.handler {
                    if let Some(param) = &handler.param {
                        self.visit_pattern(param);
                    }
                    self.visit_stmts(&handler.body.body);
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    self.visit_stmts(&finalizer.body);
                }
            }
            Stmt::Break(jump) | Stmt::Continue(jump) => {
                if let Some(label) = &jump.label {
                    self.insert(&label.name);
                }
            }
            Stmt::Empty => {}
        }
    }

    fn visit_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        for declarator in &declaration.declarations {
            self.visit_pattern(&declarator.id);
            if let Some(init) = &declarator.init {
                self.visit_expr(init);
            }
        }
    }

    fn visit_function(&mut self, function: &Function) {
        if let Some(id) = &function.id {
            self.insert(&id.name);
        }
        for param in &function.params {
            self.visit_pattern(param);
        }
        self.visit_stmts(&function.body.body);
    }

    fn visit_class(&mut self, class: &Class) {
        if let Some(id) = &class.id {
            self.insert(&id.name);
        }
        if let Some(super_class) = &class.super_class {
            self.visit_expr(super_class);
        }
        for member in &class.body.body {
            match member {
                ClassMember::Method(method) => {
                    self.visit_expr(&method.key);
                    self.visit_function(&method.value);
                }
                ClassMember::Property(property) => {
                    self.visit_expr(&property.key);
                    if let Some(value) = &property.value {
                        self.visit_expr(value);
                    }
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.insert(&ident.name),
            Expr::Literal(_) | Expr::This => {}
            Expr::Array(array) => {
                for element in array.elements.iter().flatten() {
                    self.visit_expr(element);
                }
            }
            Expr::Object(object) => {
                for member in &object.properties {
                    match member {
                        ObjectMember::Property(property) => {
                            self.visit_expr(&property.key);
                            self.visit_expr(&property.value);
                        }
                        ObjectMember::Spread(spread) => self.visit_expr(&spread.argument),
                    }
                }
            }
            Expr::Function(function) => self.visit_function(function),
            Expr::Arrow(arrow) => {
                for param in &arrow.params {
                    self.visit_pattern(param);
                }
                match &arrow.body {
                    ArrowBody::Block(block) => self.visit_stmts(&block.body),
                    ArrowBody::Expression(body) => self.visit_expr(body),
                }
            }
            Expr::Class(class) => self.visit_class(class),
            Expr::Unary(unary) => self.visit_expr(&unary.argument),
            Expr::Update(update) => self.visit_expr(&update.argument),
            Expr::Binary(binary) | Expr::Logical(binary) => {
                self.visit_expr(&binary.left);
                self.visit_expr(&binary.right);
            }
            Expr::Assignment(assignment) => {
                self.visit_pattern(&assignment.left);
                self.visit_expr(&assignment.right);
            }
            Expr::Conditional(conditional) => {
                self.visit_expr(&conditional.test);
                self.visit_expr(&conditional.consequent);
                self.visit_expr(&conditional.alternate);
            }
            Expr::Call(call) | Expr::New(call) => {
                self.visit_expr(&call.callee);
                for argument in &call.arguments {
                    self.visit_expr(argument);
                }
            }
            Expr::Member(member) => {
                self.visit_expr(&member.object);
                self.visit_expr(&member.property);
            }
            Expr::Sequence(sequence) => {
                for expr in &sequence.expressions {
                    self.visit_expr(expr);
                }
            }
            Expr::Await(wrapped) | Expr::Spread(wrapped) => self.visit_expr(&wrapped.argument),
        }
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Identifier(ident) => self.insert(&ident.name),
            Pattern::Object(object) => {
                for member in &object.properties {
                    match member {
                        ObjectPatternMember::Property(property) => {
                            self.visit_expr(&property.key);
                            self.visit_pattern(&property.value);
                        }
                        ObjectPatternMember::Rest(rest) => self.visit_pattern(&rest.argument),
                    }
                }
            }
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    self.visit_pattern(element);
                }
            }
            Pattern::Assignment(assignment) => {
                self.visit_pattern(&assignment.left);
                self.visit_expr(&assignment.right);
            }
            Pattern::Rest(rest) => self.visit_pattern(&rest.argument),
            Pattern::Member(member) => {
                self.visit_expr(&member.object);
                self.visit_expr(&member.property);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast_builder::{
        call, const_decl, expr_stmt, function_decl, ident, import_from, member, return_stmt,
    };

    #[test]
    fn test_collects_declarations_references_and_keys() {
        let program = Program::new(vec![
            import_from("antd", &[("Button", Some("Btn"))]),
            const_decl("_Button", call(member(ident("Btn"), "create"), vec![])),
            function_decl("render", &["props"], vec![return_stmt(Some(ident("props")))]),
            expr_stmt(ident("render")),
        ]);

        let names = IdentifierCollector::collect(&program);

        for expected in ["Button", "Btn", "_Button", "create", "render", "props"] {
            assert!(names.contains(expected), "missing {expected}");
        }
        assert!(!names.contains("antd"));
    }
}
