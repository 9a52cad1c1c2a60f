//! AST builder module for creating synthetic AST nodes
//!
//! This module provides factory functions for creating ESTree nodes that don't
//! originate from an input file. Generated import declarations carry
//! [`NodeId::SYNTHETIC`] so they can never be mistaken for a queued original.

use crate::{
    ast::{
        ArrayExpression, AssignmentExpression, BinaryExpression, BlockStatement, CallExpression,
        ConditionalExpression, DefaultExport, ExportDefaultDeclaration, Expr, ExpressionStatement,
        Function, Identifier, IfStatement, ImportDeclaration, ImportSpecifier, Literal,
        MemberExpression, ModuleExportName, ObjectExpression, ObjectMember, Pattern, Property,
        PropertyKind, ReturnStatement, Stmt, VariableDeclaration, VariableDeclarator,
        VariableKind,
    },
    types::NodeId,
};

/// Create an identifier node
pub fn identifier(name: &str) -> Identifier {
    Identifier::new(name)
}

/// Create an identifier expression: `name`
pub fn ident(name: &str) -> Expr {
    Expr::Identifier(identifier(name))
}

/// Create a string literal expression: `"value"`
pub fn string(value: &str) -> Expr {
    Expr::Literal(Literal::string(value))
}

/// Create a numeric literal expression
pub fn num(value: i64) -> Expr {
    Expr::Literal(Literal {
        value: serde_json::Value::from(value),
        raw: Some(value.to_string()),
        regex: None,
    })
}

fn import_declaration(specifiers: Vec<ImportSpecifier>, source: &str) -> Stmt {
    Stmt::Import(ImportDeclaration {
        id: NodeId::SYNTHETIC,
        specifiers,
        source: Literal::string(source),
    })
}

/// Create a default import: `import local from "source"`
pub fn import_default(local: &str, source: &str) -> Stmt {
    import_declaration(
        vec![ImportSpecifier::Default {
            local: identifier(local),
        }],
        source,
    )
}

/// Create a namespace import: `import * as local from "source"`
pub fn import_namespace(local: &str, source: &str) -> Stmt {
    import_declaration(
        vec![ImportSpecifier::Namespace {
            local: identifier(local),
        }],
        source,
    )
}

/// Create a single named import: `import { imported as local } from "source"`
pub fn import_named(imported: &str, local: &str, source: &str) -> Stmt {
    import_from(source, &[(imported, Some(local))])
}

/// Create a named import list: `import { name1, name2 as alias } from "source"`
pub fn import_from(source: &str, imports: &[(&str, Option<&str>)]) -> Stmt {
    let specifiers = imports
        .iter()
        .map(|(name, alias)| ImportSpecifier::Named {
            imported: ModuleExportName::Identifier(identifier(name)),
            local: identifier(alias.unwrap_or(name)),
        })
        .collect();
    import_declaration(specifiers, source)
}

/// Create a side-effect import: `import "source"`
pub fn import_side_effect(source: &str) -> Stmt {
    import_declaration(Vec::new(), source)
}

/// Create an expression statement: `expr;`
pub fn expr_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStatement { expression })
}

/// Create a call expression: `callee(args...)`
pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpression {
        callee: Box::new(callee),
        arguments,
        optional: false,
    })
}

/// Create a `new` expression: `new callee(args...)`
pub fn new_expr(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::New(CallExpression {
        callee: Box::new(callee),
        arguments,
        optional: false,
    })
}

/// Create a member expression: `object.property`
pub fn member(object: Expr, property: &str) -> Expr {
    Expr::Member(MemberExpression {
        object: Box::new(object),
        property: Box::new(ident(property)),
        computed: false,
        optional: false,
    })
}

/// Create a binary expression: `left op right`
pub fn binary(operator: &str, left: Expr, right: Expr) -> Expr {
    Expr::Binary(BinaryExpression {
        operator: operator.to_owned(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Create a logical expression: `left && right`, `left || right`, `left ?? right`
pub fn logical(operator: &str, left: Expr, right: Expr) -> Expr {
    Expr::Logical(BinaryExpression {
        operator: operator.to_owned(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Create a conditional expression: `test ? consequent : alternate`
pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Expr {
    Expr::Conditional(ConditionalExpression {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    })
}

/// Create a simple assignment expression: `target = value`
pub fn assign(target: &str, value: Expr) -> Expr {
    Expr::Assignment(AssignmentExpression {
        operator: "=".to_owned(),
        left: Box::new(Pattern::Identifier(identifier(target))),
        right: Box::new(value),
    })
}

/// Create an array literal: `[a, b]`
pub fn array(elements: Vec<Expr>) -> Expr {
    Expr::Array(ArrayExpression {
        elements: elements.into_iter().map(Some).collect(),
    })
}

/// Create an object literal with keyed properties: `{ key: value }`
pub fn object(properties: Vec<(&str, Expr)>) -> Expr {
    Expr::Object(ObjectExpression {
        properties: properties
            .into_iter()
            .map(|(key, value)| ObjectMember::Property(property(key, value, false)))
            .collect(),
    })
}

/// Create an object literal with shorthand properties: `{ a, b }`
pub fn object_shorthand(names: &[&str]) -> Expr {
    Expr::Object(ObjectExpression {
        properties: names
            .iter()
            .map(|name| ObjectMember::Property(property(name, ident(name), true)))
            .collect(),
    })
}

fn property(key: &str, value: Expr, shorthand: bool) -> Property {
    Property {
        key: ident(key),
        value,
        kind: PropertyKind::Init,
        computed: false,
        shorthand,
        method: false,
    }
}

/// Create a single-declarator variable declaration
pub fn var_decl(kind: VariableKind, name: &str, init: Option<Expr>) -> Stmt {
    Stmt::VariableDeclaration(VariableDeclaration {
        kind,
        declarations: vec![VariableDeclarator {
            id: Pattern::Identifier(identifier(name)),
            init,
        }],
    })
}

/// Create a `const` declaration: `const name = init`
pub fn const_decl(name: &str, init: Expr) -> Stmt {
    var_decl(VariableKind::Const, name, Some(init))
}

/// Create a function declaration: `function name(params) { body }`
pub fn function_decl(name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
    Stmt::FunctionDeclaration(Function {
        id: Some(identifier(name)),
        params: params
            .iter()
            .map(|param| Pattern::Identifier(identifier(param)))
            .collect(),
        body: BlockStatement { body },
        is_async: false,
        is_generator: false,
    })
}

/// Create a return statement: `return argument`
pub fn return_stmt(argument: Option<Expr>) -> Stmt {
    Stmt::Return(ReturnStatement { argument })
}

/// Create an if statement with block branches
pub fn if_stmt(test: Expr, consequent: Vec<Stmt>, alternate: Option<Vec<Stmt>>) -> Stmt {
    Stmt::If(IfStatement {
        test,
        consequent: Box::new(block(consequent)),
        alternate: alternate.map(|body| Box::new(block(body))),
    })
}

/// Create a block statement: `{ body }`
pub fn block(body: Vec<Stmt>) -> Stmt {
    Stmt::Block(BlockStatement { body })
}

/// Create a default export of an expression: `export default expr`
pub fn export_default(expression: Expr) -> Stmt {
    Stmt::ExportDefault(ExportDefaultDeclaration {
        declaration: DefaultExport::Expression(expression),
    })
}
