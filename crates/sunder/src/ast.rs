//! ESTree syntax tree for ECMAScript modules
//!
//! Only the subset of ESTree that the rewriter walks or prints is modelled.
//! Nodes deserialize from the JSON emitted by ESTree-compatible parsers;
//! location fields (`start`, `end`, `loc`, `range`) are ignored.

use serde::Deserialize;

use crate::types::NodeId;

/// Root of a module
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub source_type: SourceType,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Module,
    Script,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self {
            source_type: SourceType::Module,
            body,
        }
    }

    /// Number every top-level import declaration, starting at 1
    pub fn assign_node_ids(&mut self) {
        let mut next = 1;
        for stmt in &mut self.body {
            if let Stmt::Import(import) = stmt {
                import.id = NodeId::new(next);
                next += 1;
            }
        }
    }

    /// Remove the import declaration with the given id
    ///
    /// Returns `false` when no such statement is present, which makes
    /// repeated removal of the same statement a no-op.
    pub fn remove_statement(&mut self, id: NodeId) -> bool {
        if id.is_synthetic() {
            return false;
        }
        let before = self.body.len();
        self.body
            .retain(|stmt| !matches!(stmt, Stmt::Import(import) if import.id == id));
        self.body.len() != before
    }

    /// Insert statements at the start of the body, keeping their order
    pub fn prepend_statements(&mut self, statements: Vec<Stmt>) {
        if statements.is_empty() {
            return;
        }
        self.body.splice(0..0, statements);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub regex: Option<RegexLiteral>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: serde_json::Value::String(value.into()),
            raw: None,
            regex: None,
        }
    }

    /// The value if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Name in an import or export specifier: `foo` or `"foo-bar"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleExportName {
    Identifier(Identifier),
    Literal(Literal),
}

impl ModuleExportName {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Identifier(ident) => Some(&ident.name),
            Self::Literal(lit) => lit.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "ImportDeclaration")]
    Import(ImportDeclaration),
    #[serde(rename = "ExportDefaultDeclaration")]
    ExportDefault(ExportDefaultDeclaration),
    #[serde(rename = "ExportNamedDeclaration")]
    ExportNamed(ExportNamedDeclaration),
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
    #[serde(rename = "VariableDeclaration")]
    VariableDeclaration(VariableDeclaration),
    #[serde(rename = "FunctionDeclaration")]
    FunctionDeclaration(Function),
    #[serde(rename = "ClassDeclaration")]
    ClassDeclaration(Class),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStatement),
    #[serde(rename = "IfStatement")]
    If(IfStatement),
    #[serde(rename = "BlockStatement")]
    Block(BlockStatement),
    #[serde(rename = "WhileStatement")]
    While(WhileStatement),
    #[serde(rename = "ForStatement")]
    For(ForStatement),
    #[serde(rename = "ForInStatement")]
    ForIn(ForEachStatement),
    #[serde(rename = "ForOfStatement")]
    ForOf(ForEachStatement),
    #[serde(rename = "ThrowStatement")]
    Throw(ThrowStatement),
    #[serde(rename = "TryStatement")]
    Try(TryStatement),
    #[serde(rename = "BreakStatement")]
    Break(JumpStatement),
    #[serde(rename = "ContinueStatement")]
    Continue(JumpStatement),
    #[serde(rename = "EmptyStatement")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportDeclaration {
    #[serde(skip)]
    pub id: NodeId,
    #[serde(default)]
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Literal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    /// `import { imported as local } from "..."`
    #[serde(rename = "ImportSpecifier")]
    Named {
        imported: ModuleExportName,
        local: Identifier,
    },
    /// `import local from "..."`
    #[serde(rename = "ImportDefaultSpecifier")]
    Default { local: Identifier },
    /// `import * as local from "..."`
    #[serde(rename = "ImportNamespaceSpecifier")]
    Namespace { local: Identifier },
}

impl ImportSpecifier {
    pub fn local(&self) -> &Identifier {
        match self {
            Self::Named { local, .. } | Self::Default { local } | Self::Namespace { local } => {
                local
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportDefaultDeclaration {
    pub declaration: DefaultExport,
}

/// Payload of `export default`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultExport {
    Declaration(DefaultDeclaration),
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum DefaultDeclaration {
    #[serde(rename = "FunctionDeclaration")]
    Function(Function),
    #[serde(rename = "ClassDeclaration")]
    Class(Class),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportNamedDeclaration {
    #[serde(default)]
    pub declaration: Option<Box<Stmt>>,
    #[serde(default)]
    pub specifiers: Vec<ExportSpecifier>,
    #[serde(default)]
    pub source: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportSpecifier {
    pub local: ModuleExportName,
    pub exported: ModuleExportName,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }

    /// `let` and `const` are scoped to the enclosing block
    pub fn is_lexical(self) -> bool {
        !matches!(self, Self::Var)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expr>,
}

/// Shared by function declarations, function expressions and class methods
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(rename = "generator", default)]
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub super_class: Option<Box<Expr>>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassBody {
    pub body: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ClassMember {
    #[serde(rename = "MethodDefinition")]
    Method(MethodDefinition),
    #[serde(rename = "PropertyDefinition")]
    Property(PropertyDefinition),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodDefinition {
    pub key: Expr,
    pub value: Function,
    pub kind: MethodKind,
    #[serde(default)]
    pub computed: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyDefinition {
    pub key: Expr,
    #[serde(default)]
    pub value: Option<Expr>,
    #[serde(default)]
    pub computed: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReturnStatement {
    #[serde(default)]
    pub argument: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IfStatement {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    #[serde(default)]
    pub alternate: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhileStatement {
    pub test: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForStatement {
    #[serde(default)]
    pub init: Option<ForInit>,
    #[serde(default)]
    pub test: Option<Expr>,
    #[serde(default)]
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForInit {
    Declaration(VariableDeclaration),
    Expression(Expr),
}

/// `for (left in right)` and `for (left of right)`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForEachStatement {
    pub left: ForHead,
    pub right: Expr,
    pub body: Box<Stmt>,
    #[serde(rename = "await", default)]
    pub is_await: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForHead {
    Declaration(VariableDeclaration),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThrowStatement {
    pub argument: Expr,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TryStatement {
    pub block: BlockStatement,
    #[serde(default)]
    pub handler: Option<CatchClause>,
    #[serde(default)]
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

/// `break` and `continue`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JumpStatement {
    #[serde(default)]
    pub label: Option<Identifier>,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier(Identifier),
    Literal(Literal),
    #[serde(rename = "ThisExpression")]
    This,
    #[serde(rename = "ArrayExpression")]
    Array(ArrayExpression),
    #[serde(rename = "ObjectExpression")]
    Object(ObjectExpression),
    #[serde(rename = "FunctionExpression")]
    Function(Function),
    #[serde(rename = "ArrowFunctionExpression")]
    Arrow(ArrowFunction),
    #[serde(rename = "ClassExpression")]
    Class(Class),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpression),
    #[serde(rename = "UpdateExpression")]
    Update(UpdateExpression),
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpression),
    #[serde(rename = "LogicalExpression")]
    Logical(BinaryExpression),
    #[serde(rename = "AssignmentExpression")]
    Assignment(AssignmentExpression),
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpression),
    #[serde(rename = "CallExpression")]
    Call(CallExpression),
    #[serde(rename = "NewExpression")]
    New(CallExpression),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpression),
    #[serde(rename = "SequenceExpression")]
    Sequence(SequenceExpression),
    #[serde(rename = "AwaitExpression")]
    Await(ArgumentExpression),
    /// Only valid inside call arguments and array literals
    #[serde(rename = "SpreadElement")]
    Spread(ArgumentExpression),
}

impl Expr {
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayExpression {
    pub elements: Vec<Option<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectMember {
    Property(Property),
    #[serde(rename = "SpreadElement")]
    Spread(ArgumentExpression),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub key: Expr,
    pub value: Expr,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
    #[serde(default)]
    pub method: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrowFunction {
    #[serde(default)]
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(rename = "async", default)]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Box<Expr>,
}

/// Shared by binary and logical expressions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Pattern>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
}

/// Shared by call and `new` expressions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Expr>,
    #[serde(default)]
    pub arguments: Vec<Expr>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
}

impl MemberExpression {
    /// Statically known property name: `a.b` or `a["b"]`
    pub fn static_property_name(&self) -> Option<&str> {
        match (&*self.property, self.computed) {
            (Expr::Identifier(ident), false) => Some(&ident.name),
            (Expr::Literal(lit), true) => lit.as_str(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Expr>,
}

/// Expression wrapping a single operand: `await x`, `...x`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArgumentExpression {
    pub argument: Box<Expr>,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    #[serde(rename = "ObjectPattern")]
    Object(ObjectPattern),
    #[serde(rename = "ArrayPattern")]
    Array(ArrayPattern),
    #[serde(rename = "AssignmentPattern")]
    Assignment(AssignmentPattern),
    #[serde(rename = "RestElement")]
    Rest(RestElement),
    /// Assignment target such as `a.b = ...`
    #[serde(rename = "MemberExpression")]
    Member(MemberExpression),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternMember {
    Property(PatternProperty),
    #[serde(rename = "RestElement")]
    Rest(RestElement),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternProperty {
    pub key: Expr,
    pub value: Pattern,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayPattern {
    pub elements: Vec<Option<Pattern>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentPattern {
    pub left: Box<Pattern>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestElement {
    pub argument: Box<Pattern>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_estree_import_and_call() {
        let json = r#"{
            "type": "Program",
            "sourceType": "module",
            "start": 0,
            "end": 52,
            "body": [
                {
                    "type": "ImportDeclaration",
                    "start": 0,
                    "specifiers": [
                        {
                            "type": "ImportSpecifier",
                            "imported": { "type": "Identifier", "name": "Button" },
                            "local": { "type": "Identifier", "name": "Btn" }
                        },
                        {
                            "type": "ImportDefaultSpecifier",
                            "local": { "type": "Identifier", "name": "Lib" }
                        }
                    ],
                    "source": { "type": "Literal", "value": "antd", "raw": "'antd'" }
                },
                {
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "CallExpression",
                        "callee": { "type": "Identifier", "name": "Btn" },
                        "arguments": [],
                        "optional": false
                    }
                },
                { "type": "EmptyStatement", "start": 50, "end": 51 }
            ]
        }"#;

        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.body.len(), 3);

        let Stmt::Import(import) = &program.body[0] else {
            panic!("expected import declaration");
        };
        assert_eq!(import.source.as_str(), Some("antd"));
        assert_eq!(import.specifiers[0].local().name, "Btn");
        assert!(matches!(
            &import.specifiers[0],
            ImportSpecifier::Named { imported, .. } if imported.name() == Some("Button")
        ));
        assert!(matches!(
            import.specifiers[1],
            ImportSpecifier::Default { .. }
        ));
        assert!(matches!(program.body[2], Stmt::Empty));
    }

    #[test]
    fn test_deserialize_arrow_bodies() {
        let expr_body = r#"{
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": { "type": "Identifier", "name": "x" }
        }"#;
        let block_body = r#"{
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": { "type": "BlockStatement", "body": [] }
        }"#;

        let Expr::Arrow(arrow) = serde_json::from_str::<Expr>(expr_body).unwrap() else {
            panic!("expected arrow function");
        };
        assert!(matches!(arrow.body, ArrowBody::Expression(_)));

        let Expr::Arrow(arrow) = serde_json::from_str::<Expr>(block_body).unwrap() else {
            panic!("expected arrow function");
        };
        assert!(matches!(arrow.body, ArrowBody::Block(_)));
    }

    #[test]
    fn test_export_default_forms() {
        let expression = r#"{
            "type": "ExportDefaultDeclaration",
            "declaration": { "type": "Identifier", "name": "Button" }
        }"#;
        let function = r#"{
            "type": "ExportDefaultDeclaration",
            "declaration": {
                "type": "FunctionDeclaration",
                "id": null,
                "params": [],
                "body": { "type": "BlockStatement", "body": [] }
            }
        }"#;

        let Stmt::ExportDefault(export) = serde_json::from_str::<Stmt>(expression).unwrap() else {
            panic!("expected export default");
        };
        assert!(matches!(
            export.declaration,
            DefaultExport::Expression(Expr::Identifier(_))
        ));

        let Stmt::ExportDefault(export) = serde_json::from_str::<Stmt>(function).unwrap() else {
            panic!("expected export default");
        };
        assert!(matches!(
            export.declaration,
            DefaultExport::Declaration(DefaultDeclaration::Function(_))
        ));
    }

    #[test]
    fn test_remove_statement_is_idempotent() {
        let mut program = Program::new(vec![
            Stmt::Import(ImportDeclaration {
                id: NodeId::SYNTHETIC,
                specifiers: vec![],
                source: Literal::string("a"),
            }),
            Stmt::Empty,
            Stmt::Import(ImportDeclaration {
                id: NodeId::SYNTHETIC,
                specifiers: vec![],
                source: Literal::string("b"),
            }),
        ]);
        program.assign_node_ids();

        assert!(program.remove_statement(NodeId::new(2)));
        assert!(!program.remove_statement(NodeId::new(2)));
        assert!(!program.remove_statement(NodeId::SYNTHETIC));
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_static_property_name() {
        let member = |property: Expr, computed: bool| MemberExpression {
            object: Box::new(Expr::Identifier(Identifier::new("Lib"))),
            property: Box::new(property),
            computed,
            optional: false,
        };

        assert_eq!(
            member(Expr::Identifier(Identifier::new("Button")), false).static_property_name(),
            Some("Button")
        );
        assert_eq!(
            member(Expr::Literal(Literal::string("Button")), true).static_property_name(),
            Some("Button")
        );
        assert_eq!(
            member(Expr::Identifier(Identifier::new("key")), true).static_property_name(),
            None
        );
    }
}
