//! JavaScript code generation from the ESTree model
//!
//! Prints a [`Program`] back to ECMAScript module source: two-space
//! indentation, semicolon-terminated statements and double-quoted strings for
//! literals that carry no original `raw` text. Parentheses are inserted from
//! operator precedence only, so the output does not preserve the grouping of
//! the input beyond what its meaning requires.

use crate::ast::{
    ArrayExpression, ArrowBody, ArrowFunction, BinaryExpression, BlockStatement, CallExpression,
    Class, ClassMember, DefaultDeclaration, DefaultExport, Expr, ExportNamedDeclaration, ForHead,
    ForInit, Function, IfStatement, ImportDeclaration, ImportSpecifier, Literal, MemberExpression,
    MethodKind, ModuleExportName, ObjectExpression, ObjectMember, ObjectPatternMember, Pattern,
    Program, Property, PropertyKind, Stmt, TryStatement, VariableDeclaration,
};

const INDENT: &str = "  ";

// Binding power of expressions, loosest first
const SEQUENCE: u8 = 1;
const ASSIGN: u8 = 2;
const CONDITIONAL: u8 = 3;
const NULLISH: u8 = 4;
const UNARY: u8 = 15;
const UPDATE: u8 = 16;
const CALL: u8 = 18;
const MEMBER: u8 = 19;
const PRIMARY: u8 = 20;

/// Print a whole program
pub fn generate(program: &Program) -> String {
    let mut generator = CodeGenerator::default();
    for stmt in &program.body {
        generator.stmt(stmt);
        generator.out.push('\n');
    }
    generator.out
}

/// Print a single expression
pub fn generate_expr(expr: &Expr) -> String {
    let mut generator = CodeGenerator::default();
    generator.expr(expr, SEQUENCE);
    generator.out
}

#[derive(Debug, Default)]
struct CodeGenerator {
    out: String,
    indent: usize,
}

fn binary_precedence(operator: &str) -> u8 {
    match operator {
        "??" | "||" => NULLISH,
        "&&" => 5,
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" | "===" | "!==" => 9,
        "<" | ">" | "<=" | ">=" | "instanceof" | "in" => 10,
        "<<" | ">>" | ">>>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        "**" => 14,
        _ => NULLISH,
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Sequence(_) => SEQUENCE,
        Expr::Assignment(_) | Expr::Arrow(_) | Expr::Spread(_) => ASSIGN,
        Expr::Conditional(_) => CONDITIONAL,
        Expr::Binary(binary) | Expr::Logical(binary) => binary_precedence(&binary.operator),
        Expr::Unary(_) | Expr::Await(_) => UNARY,
        Expr::Update(_) => UPDATE,
        Expr::Call(_) => CALL,
        Expr::Member(_) | Expr::New(_) => MEMBER,
        Expr::Identifier(_)
        | Expr::Literal(_)
        | Expr::This
        | Expr::Array(_)
        | Expr::Object(_)
        | Expr::Function(_)
        | Expr::Class(_) => PRIMARY,
    }
}

/// Expression statements may not start like a declaration or a block
fn needs_statement_parens(code: &str) -> bool {
    code.starts_with('{')
        || code.starts_with("let [")
        || ["function", "async function", "class"].iter().any(|keyword| {
            code.strip_prefix(keyword)
                .is_some_and(|rest| rest.starts_with([' ', '(', '*', '{']))
        })
}

/// `new a().b()` would call the wrong thing without parentheses
fn has_call_in_chain(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) => true,
        Expr::Member(member) => has_call_in_chain(&member.object),
        _ => false,
    }
}

impl CodeGenerator {
    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn comma_separated<T>(&mut self, items: &[T], mut print: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            print(self, item);
        }
    }

    // -----------------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------------

    fn block(&mut self, body: &[Stmt]) {
        if body.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.indent += 1;
        for stmt in body {
            self.newline();
            self.stmt(stmt);
        }
        self.indent -= 1;
        self.newline();
        self.write("}");
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Import(import) => self.import_declaration(import),
            Stmt::ExportDefault(export) => {
                self.write("export default ");
                match &export.declaration {
                    DefaultExport::Declaration(DefaultDeclaration::Function(function)) => {
                        self.function(function);
                    }
                    DefaultExport::Declaration(DefaultDeclaration::Class(class)) => {
                        self.class(class);
                    }
                    DefaultExport::Expression(expr) => {
                        self.expr(expr, ASSIGN);
                        self.write(";");
                    }
                }
            }
            Stmt::ExportNamed(export) => self.export_named(export),
            Stmt::Expression(statement) => {
                let start = self.out.len();
                self.expr(&statement.expression, SEQUENCE);
                if needs_statement_parens(&self.out[start..]) {
                    self.out.insert(start, '(');
                    self.write(")");
                }
                self.write(";");
            }
            Stmt::VariableDeclaration(declaration) => {
                self.variable_declaration(declaration);
                self.write(";");
            }
            Stmt::FunctionDeclaration(function) => self.function(function),
            Stmt::ClassDeclaration(class) => self.class(class),
            Stmt::Return(statement) => match &statement.argument {
                Some(argument) => {
                    self.write("return ");
                    self.expr(argument, SEQUENCE);
                    self.write(";");
                }
                None => self.write("return;"),
            },
            Stmt::If(if_stmt) => self.if_statement(if_stmt),
            Stmt::Block(block) => self.block(&block.body),
            Stmt::While(while_stmt) => {
                self.write("while (");
                self.expr(&while_stmt.test, SEQUENCE);
                self.write(") ");
                self.stmt(&while_stmt.body);
            }
            Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_) => self.loop_statement(stmt),
            Stmt::Throw(throw) => {
                self.write("throw ");
                self.expr(&throw.argument, SEQUENCE);
                self.write(";");
            }
            Stmt::Try(try_stmt) => self.try_statement(try_stmt),
            Stmt::Break(jump) | Stmt::Continue(jump) => {
                self.write(if matches!(stmt, Stmt::Break(_)) {
                    "break"
                } else {
                    "continue"
                });
                if let Some(label) = &jump.label {
                    self.write(" ");
                    self.write(&label.name);
                }
                self.write(";");
            }
            Stmt::Empty => self.write(";"),
        }
    }

    fn import_declaration(&mut self, import: &ImportDeclaration) {
        self.write("import ");
        let mut named = Vec::new();
        let mut wrote_binding = false;
        for specifier in &import.specifiers {
            match specifier {
                ImportSpecifier::Default { local } => {
                    self.write(&local.name);
                    wrote_binding = true;
                }
                ImportSpecifier::Namespace { local } => {
                    if wrote_binding {
                        self.write(", ");
                    }
                    self.write("* as ");
                    self.write(&local.name);
                    wrote_binding = true;
                }
                ImportSpecifier::Named { imported, local } => named.push((imported, local)),
            }
        }
        if !named.is_empty() {
            if wrote_binding {
                self.write(", ");
            }
            self.write("{ ");
            self.comma_separated(&named, |generator, (imported, local)| {
                generator.module_export_name(imported);
                if imported.name() != Some(local.name.as_str()) {
                    generator.write(" as ");
                    generator.write(&local.name);
                }
            });
            self.write(" }");
            wrote_binding = true;
        }
        if wrote_binding {
            self.write(" from ");
        }
        self.literal(&import.source);
        self.write(";");
    }

    fn module_export_name(&mut self, name: &ModuleExportName) {
        match name {
            ModuleExportName::Identifier(ident) => self.write(&ident.name),
            ModuleExportName::Literal(literal) => self.literal(literal),
        }
    }

    fn export_named(&mut self, export: &ExportNamedDeclaration) {
        self.write("export ");
        if let Some(declaration) = &export.declaration {
            self.stmt(declaration);
            return;
        }
        if export.specifiers.is_empty() {
            self.write("{}");
        } else {
            self.write("{ ");
            self.comma_separated(&export.specifiers, |generator, specifier| {
                generator.module_export_name(&specifier.local);
                if specifier.local != specifier.exported {
                    generator.write(" as ");
                    generator.module_export_name(&specifier.exported);
                }
            });
            self.write(" }");
        }
        if let Some(source) = &export.source {
            self.write(" from ");
            self.literal(source);
        }
        self.write(";");
    }

    /// Without the trailing semicolon, for use in `for` heads
    fn variable_declaration(&mut self, declaration: &VariableDeclaration) {
        self.write(declaration.kind.as_str());
        self.write(" ");
        self.comma_separated(&declaration.declarations, |generator, declarator| {
            generator.pattern(&declarator.id);
            if let Some(init) = &declarator.init {
                generator.write(" = ");
                generator.expr(init, ASSIGN);
            }
        });
    }

    fn function(&mut self, function: &Function) {
        if function.is_async {
            self.write("async ");
        }
        self.write("function");
        if function.is_generator {
            self.write("*");
        }
        if let Some(id) = &function.id {
            self.write(" ");
            self.write(&id.name);
        }
        self.function_tail(function);
    }

    /// `(params) { body }`
    fn function_tail(&mut self, function: &Function) {
        self.write("(");
        self.comma_separated(&function.params, Self::pattern);
        self.write(") ");
        self.block(&function.body.body);
    }

    fn class(&mut self, class: &Class) {
        self.write("class");
        if let Some(id) = &class.id {
            self.write(" ");
            self.write(&id.name);
        }
        if let Some(super_class) = &class.super_class {
            self.write(" extends ");
            self.expr(super_class, CALL);
        }
        if class.body.body.is_empty() {
            self.write(" {}");
            return;
        }
        self.write(" {");
        self.indent += 1;
        for member in &class.body.body {
            self.newline();
            self.class_member(member);
        }
        self.indent -= 1;
        self.newline();
        self.write("}");
    }

    fn class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Method(method) => {
                if method.is_static {
                    self.write("static ");
                }
                let function = &method.value;
                match method.kind {
                    MethodKind::Get => self.write("get "),
                    MethodKind::Set => self.write("set "),
                    MethodKind::Constructor | MethodKind::Method => {
                        if function.is_async {
                            self.write("async ");
                        }
                        if function.is_generator {
                            self.write("*");
                        }
                    }
                }
                self.property_key(&method.key, method.computed);
                self.function_tail(function);
            }
            ClassMember::Property(property) => {
                if property.is_static {
                    self.write("static ");
                }
                self.property_key(&property.key, property.computed);
                if let Some(value) = &property.value {
                    self.write(" = ");
                    self.expr(value, ASSIGN);
                }
                self.write(";");
            }
        }
    }

    fn if_statement(&mut self, if_stmt: &IfStatement) {
        self.write("if (");
        self.expr(&if_stmt.test, SEQUENCE);
        self.write(") ");
        match &if_stmt.alternate {
            None => self.stmt(&if_stmt.consequent),
            Some(alternate) => {
                // A bare nested `if` would capture our `else`
                if matches!(*if_stmt.consequent, Stmt::If(_)) {
                    self.block(std::slice::from_ref(&*if_stmt.consequent));
                } else {
                    self.stmt(&if_stmt.consequent);
                }
                if matches!(*if_stmt.consequent, Stmt::Block(_)) {
                    self.write(" else ");
                } else {
                    self.newline();
                    self.write("else ");
                }
                self.stmt(alternate);
            }
        }
    }

    fn loop_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::For(for_stmt) => {
                self.write("for (");
                match &for_stmt.init {
                    Some(ForInit::Declaration(declaration)) => {
                        self.variable_declaration(declaration);
                    }
                    Some(ForInit::Expression(expr)) => self.expr(expr, SEQUENCE),
                    None => {}
                }
                self.write(";");
                if let Some(test) = &for_stmt.test {
                    self.write(" ");
                    self.expr(test, SEQUENCE);
                }
                self.write(";");
                if let Some(update) = &for_stmt.update {
                    self.write(" ");
                    self.expr(update, SEQUENCE);
                }
                self.write(") ");
                self.stmt(&for_stmt.body);
            }
            Stmt::ForIn(for_each) | Stmt::ForOf(for_each) => {
                self.write("for ");
                if for_each.is_await {
                    self.write("await ");
                }
                self.write("(");
                match &for_each.left {
                    ForHead::Declaration(declaration) => self.variable_declaration(declaration),
                    ForHead::Pattern(pattern) => self.pattern(pattern),
                }
                self.write(if matches!(stmt, Stmt::ForIn(_)) {
                    " in "
                } else {
                    " of "
                });
                self.expr(&for_each.right, ASSIGN);
                self.write(") ");
                self.stmt(&for_each.body);
            }
            _ => {}
        }
    }

    fn try_statement(&mut self, try_stmt: &TryStatement) {
        self.write("try ");
        self.block(&try_stmt.block.body);
        if let Some(handler) = &try_stmt.handler {
            self.write(" catch ");
            if let Some(param) = &handler.param {
                self.write("(");
                self.pattern(param);
                self.write(") ");
            }
            self.block(&handler.body.body);
        }
        if let Some(finalizer) = &try_stmt.finalizer {
            self.write(" finally ");
            self.block(&finalizer.body);
        }
    }

    // -----------------------------------------------------------------------
    // Expressions
    // -----------------------------------------------------------------------

    /// Print `expr`, parenthesized when it binds looser than `min`
    fn expr(&mut self, expr: &Expr, min: u8) {
        if precedence(expr) < min {
            self.write("(");
            self.expr_inner(expr);
            self.write(")");
        } else {
            self.expr_inner(expr);
        }
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.write(&ident.name),
            Expr::Literal(literal) => self.literal(literal),
            Expr::This => self.write("this"),
            Expr::Array(array) => self.array(array),
            Expr::Object(object) => self.object(object),
            Expr::Function(function) => self.function(function),
            Expr::Arrow(arrow) => self.arrow(arrow),
            Expr::Class(class) => self.class(class),
            Expr::Unary(unary) => {
                self.write(&unary.operator);
                let start = self.out.len();
                self.expr(&unary.argument, UNARY);
                let merges = self.out[start..]
                    .chars()
                    .next()
                    .is_some_and(|first| {
                        matches!(first, '+' | '-') && unary.operator.ends_with(first)
                    });
                if unary.operator.ends_with(|ch: char| ch.is_ascii_alphabetic()) || merges {
                    self.out.insert(start, ' ');
                }
            }
            Expr::Update(update) => {
                if update.prefix {
                    self.write(&update.operator);
                    self.expr(&update.argument, UPDATE);
                } else {
                    self.expr(&update.argument, CALL);
                    self.write(&update.operator);
                }
            }
            Expr::Binary(binary) | Expr::Logical(binary) => self.binary(binary),
            Expr::Assignment(assignment) => {
                self.pattern(&assignment.left);
                self.write(" ");
                self.write(&assignment.operator);
                self.write(" ");
                self.expr(&assignment.right, ASSIGN);
            }
            Expr::Conditional(conditional) => {
                self.expr(&conditional.test, NULLISH);
                self.write(" ? ");
                self.expr(&conditional.consequent, ASSIGN);
                self.write(" : ");
                self.expr(&conditional.alternate, ASSIGN);
            }
            Expr::Call(call) => {
                self.expr(&call.callee, CALL);
                if call.optional {
                    self.write("?.");
                }
                self.arguments(call);
            }
            Expr::New(new) => {
                self.write("new ");
                if has_call_in_chain(&new.callee) {
                    self.write("(");
                    self.expr(&new.callee, SEQUENCE);
                    self.write(")");
                } else {
                    self.expr(&new.callee, MEMBER);
                }
                self.arguments(new);
            }
            Expr::Member(member) => self.member(member),
            Expr::Sequence(sequence) => {
                self.comma_separated(&sequence.expressions, |generator, expr| {
                    generator.expr(expr, ASSIGN);
                });
            }
            Expr::Await(wrapper) => {
                self.write("await ");
                self.expr(&wrapper.argument, UNARY);
            }
            Expr::Spread(wrapper) => {
                self.write("...");
                self.expr(&wrapper.argument, ASSIGN);
            }
        }
    }

    fn binary(&mut self, binary: &BinaryExpression) {
        let operator = binary.operator.as_str();
        let own = binary_precedence(operator);
        // `**` is right-associative and rejects a unary left operand
        let (left_min, right_min) = if operator == "**" {
            (UPDATE, own)
        } else {
            (own, own + 1)
        };
        self.binary_operand(&binary.left, left_min, operator);
        self.write(" ");
        self.write(operator);
        self.write(" ");
        self.binary_operand(&binary.right, right_min, operator);
    }

    /// `??` cannot be mixed with `||` or `&&` without parentheses
    fn binary_operand(&mut self, operand: &Expr, min: u8, operator: &str) {
        let mixes_nullish = match operand {
            Expr::Logical(inner) => (operator == "??") != (inner.operator == "??"),
            _ => false,
        } && matches!(operator, "??" | "||" | "&&");
        if mixes_nullish {
            self.write("(");
            self.expr_inner(operand);
            self.write(")");
        } else {
            self.expr(operand, min);
        }
    }

    fn arguments(&mut self, call: &CallExpression) {
        self.write("(");
        self.comma_separated(&call.arguments, |generator, argument| {
            generator.expr(argument, ASSIGN);
        });
        self.write(")");
    }

    fn member(&mut self, member: &MemberExpression) {
        let numeric_object = matches!(&*member.object, Expr::Literal(literal)
            if literal.value.is_number() && !member.computed);
        if numeric_object {
            self.write("(");
            self.expr_inner(&member.object);
            self.write(")");
        } else {
            self.expr(&member.object, CALL);
        }

        if member.computed {
            self.write(if member.optional { "?.[" } else { "[" });
            self.expr(&member.property, SEQUENCE);
            self.write("]");
        } else {
            self.write(if member.optional { "?." } else { "." });
            self.expr_inner(&member.property);
        }
    }

    fn array(&mut self, array: &ArrayExpression) {
        self.write("[");
        self.comma_separated(&array.elements, |generator, element| {
            if let Some(element) = element {
                generator.expr(element, ASSIGN);
            }
        });
        // A trailing hole needs its own comma
        if matches!(array.elements.last(), Some(None)) {
            self.write(",");
        }
        self.write("]");
    }

    fn object(&mut self, object: &ObjectExpression) {
        if object.properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        self.comma_separated(&object.properties, |generator, member| match member {
            ObjectMember::Property(property) => generator.property(property),
            ObjectMember::Spread(spread) => {
                generator.write("...");
                generator.expr(&spread.argument, ASSIGN);
            }
        });
        self.write(" }");
    }

    fn property(&mut self, property: &Property) {
        let accessor = match property.kind {
            PropertyKind::Get => Some("get "),
            PropertyKind::Set => Some("set "),
            PropertyKind::Init => None,
        };
        if let (Some(prefix), Expr::Function(function)) = (accessor, &property.value) {
            self.write(prefix);
            self.property_key(&property.key, property.computed);
            self.function_tail(function);
            return;
        }
        if let (true, Expr::Function(function)) = (property.method, &property.value) {
            if function.is_async {
                self.write("async ");
            }
            if function.is_generator {
                self.write("*");
            }
            self.property_key(&property.key, property.computed);
            self.function_tail(function);
            return;
        }

        let shorthand = property.shorthand
            && !property.computed
            && matches!((&property.key, &property.value),
                (Expr::Identifier(key), Expr::Identifier(value)) if key.name == value.name);
        self.property_key(&property.key, property.computed);
        if !shorthand {
            self.write(": ");
            self.expr(&property.value, ASSIGN);
        }
    }

    fn property_key(&mut self, key: &Expr, computed: bool) {
        if computed {
            self.write("[");
            self.expr(key, ASSIGN);
            self.write("]");
        } else {
            self.expr_inner(key);
        }
    }

    fn arrow(&mut self, arrow: &ArrowFunction) {
        if arrow.is_async {
            self.write("async ");
        }
        self.write("(");
        self.comma_separated(&arrow.params, Self::pattern);
        self.write(") => ");
        match &arrow.body {
            ArrowBody::Block(BlockStatement { body }) => self.block(body),
            ArrowBody::Expression(body) => {
                let start = self.out.len();
                self.expr(body, ASSIGN);
                if self.out[start..].starts_with('{') {
                    self.out.insert(start, '(');
                    self.write(")");
                }
            }
        }
    }

    fn literal(&mut self, literal: &Literal) {
        if let Some(raw) = &literal.raw {
            self.write(raw);
        } else if let Some(regex) = &literal.regex {
            self.out.push('/');
            self.write(&regex.pattern);
            self.out.push('/');
            self.write(&regex.flags);
        } else {
            // JSON quoting of strings is valid JavaScript
            let text = literal.value.to_string();
            self.write(&text);
        }
    }

    // -----------------------------------------------------------------------
    // Patterns
    // -----------------------------------------------------------------------

    fn pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Identifier(ident) => self.write(&ident.name),
            Pattern::Object(object) => {
                if object.properties.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                self.comma_separated(&object.properties, |generator, member| match member {
                    ObjectPatternMember::Property(property) => {
                        let shorthand = property.shorthand
                            && !property.computed
                            && match (&property.key, &property.value) {
                                (Expr::Identifier(key), Pattern::Identifier(value)) => {
                                    key.name == value.name
                                }
                                (Expr::Identifier(key), Pattern::Assignment(assignment)) => {
                                    matches!(&*assignment.left,
                                        Pattern::Identifier(value) if value.name == key.name)
                                }
                                _ => false,
                            };
                        if shorthand {
                            generator.pattern(&property.value);
                        } else {
                            generator.property_key(&property.key, property.computed);
                            generator.write(": ");
                            generator.pattern(&property.value);
                        }
                    }
                    ObjectPatternMember::Rest(rest) => {
                        generator.write("...");
                        generator.pattern(&rest.argument);
                    }
                });
                self.write(" }");
            }
            Pattern::Array(array) => {
                self.write("[");
                self.comma_separated(&array.elements, |generator, element| {
                    if let Some(element) = element {
                        generator.pattern(element);
                    }
                });
                if matches!(array.elements.last(), Some(None)) {
                    self.write(",");
                }
                self.write("]");
            }
            Pattern::Assignment(assignment) => {
                self.pattern(&assignment.left);
                self.write(" = ");
                self.expr(&assignment.right, ASSIGN);
            }
            Pattern::Rest(rest) => {
                self.write("...");
                self.pattern(&rest.argument);
            }
            Pattern::Member(member) => self.member(member),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{UnaryExpression, VariableKind},
        ast_builder::{
            array, assign, binary, call, conditional, const_decl, export_default, expr_stmt,
            function_decl, ident, if_stmt, import_default, import_from, import_namespace,
            import_side_effect, logical, member, new_expr, num, object, object_shorthand,
            return_stmt, string, var_decl,
        },
    };

    #[test]
    fn test_import_forms() {
        let program = Program::new(vec![
            import_default("_Button", "antd/lib/button"),
            import_namespace("Lib", "antd"),
            import_from("antd", &[("Button", None), ("Input", Some("In"))]),
            import_side_effect("antd/lib/button/style/css"),
        ]);

        assert_snapshot!(generate(&program), @r#"
        import _Button from "antd/lib/button";
        import * as Lib from "antd";
        import { Button, Input as In } from "antd";
        import "antd/lib/button/style/css";
        "#);
    }

    #[test]
    fn test_statements_and_blocks() {
        let program = Program::new(vec![
            function_decl(
                "render",
                &["props"],
                vec![
                    if_stmt(
                        logical("&&", ident("a"), ident("b")),
                        vec![return_stmt(Some(array(vec![ident("a"), num(1)])))],
                        Some(vec![return_stmt(None)]),
                    ),
                    var_decl(VariableKind::Let, "x", None),
                ],
            ),
            expr_stmt(assign("x", new_expr(ident("Foo"), vec![string("s")]))),
            export_default(object(vec![("Button", ident("_Button"))])),
        ]);

        assert_snapshot!(generate(&program), @r#"
        function render(props) {
          if (a && b) {
            return [a, 1];
          } else {
            return;
          }
          let x;
        }
        x = new Foo("s");
        export default { Button: _Button };
        "#);
    }

    #[test]
    fn test_precedence_parentheses() {
        let sum = binary("+", ident("a"), ident("b"));
        assert_eq!(
            generate_expr(&binary("*", sum.clone(), ident("c"))),
            "(a + b) * c"
        );
        assert_eq!(
            generate_expr(&binary("-", ident("c"), sum.clone())),
            "c - (a + b)"
        );
        assert_eq!(
            generate_expr(&binary("+", sum.clone(), ident("c"))),
            "a + b + c"
        );
        assert_eq!(generate_expr(&member(sum.clone(), "length")), "(a + b).length");
        assert_eq!(
            generate_expr(&call(
                conditional(ident("t"), ident("f"), ident("g")),
                vec![]
            )),
            "(t ? f : g)()"
        );
        assert_eq!(
            generate_expr(&new_expr(call(ident("factory"), vec![]), vec![])),
            "new (factory())()"
        );
        assert_eq!(
            generate_expr(&logical(
                "??",
                logical("||", ident("a"), ident("b")),
                ident("c")
            )),
            "(a || b) ?? c"
        );
        assert_eq!(
            generate_expr(&member(num(1), "toFixed")),
            "(1).toFixed"
        );
    }

    #[test]
    fn test_unary_spacing() {
        let negate = |argument: Expr| {
            Expr::Unary(UnaryExpression {
                operator: "-".to_owned(),
                argument: Box::new(argument),
            })
        };
        let typeof_ = Expr::Unary(UnaryExpression {
            operator: "typeof".to_owned(),
            argument: Box::new(ident("x")),
        });

        assert_eq!(generate_expr(&negate(ident("x"))), "-x");
        assert_eq!(generate_expr(&negate(negate(ident("x")))), "- -x");
        assert_eq!(generate_expr(&typeof_), "typeof x");
    }

    #[test]
    fn test_object_forms_and_statement_parens() {
        assert_eq!(
            generate_expr(&object_shorthand(&["Button", "Input"])),
            "{ Button, Input }"
        );
        assert_eq!(
            generate(&Program::new(vec![expr_stmt(member(
                object(vec![("a", num(1))]),
                "a"
            ))])),
            "({ a: 1 }.a);\n"
        );
        assert_eq!(
            generate(&Program::new(vec![const_decl(
                "holes",
                Expr::Array(crate::ast::ArrayExpression {
                    elements: vec![Some(ident("a")), None, None],
                })
            )])),
            "const holes = [a, , ,];\n"
        );
    }
}
