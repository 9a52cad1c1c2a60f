//! ESTree JSON in, JavaScript out, through the public pipeline

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sunder::{
    config::{Config, LibraryConfig, StyleMode},
    orchestrator::Orchestrator,
    types::FileContext,
};

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("{value:?}") })
}

fn named_import(source: &str, names: &[&str]) -> Value {
    let specifiers: Vec<Value> = names
        .iter()
        .map(|name| json!({ "type": "ImportSpecifier", "imported": ident(name), "local": ident(name) }))
        .collect();
    json!({ "type": "ImportDeclaration", "specifiers": specifiers, "source": string(source) })
}

fn default_import(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportDefaultSpecifier", "local": ident(local) }],
        "source": string(source),
    })
}

fn call_stmt(callee: &str) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": { "type": "CallExpression", "callee": ident(callee), "arguments": [] },
    })
}

fn program(body: Vec<Value>) -> String {
    json!({ "type": "Program", "sourceType": "module", "body": body }).to_string()
}

fn run(config: &Config, body: Vec<Value>) -> String {
    let mut orchestrator = Orchestrator::new(config).unwrap();
    orchestrator
        .process_source(&program(body), &FileContext::new("input.json"))
        .unwrap()
        .code
}

#[test]
fn test_named_import_becomes_default_import_of_symbol_module() {
    let output = run(
        &Config::single("my-lib"),
        vec![named_import("my-lib", &["TimerComponent"]), call_stmt("TimerComponent")],
    );

    assert_snapshot!(output, @r#"
    import _TimerComponent from "my-lib/lib/timer-component";
    _TimerComponent();
    "#);
}

#[test]
fn test_css_style_import_is_added_once() {
    let config = Config::new(vec![LibraryConfig {
        style: StyleMode::Css,
        ..LibraryConfig::new("my-lib")
    }]);
    let output = run(
        &config,
        vec![
            named_import("my-lib", &["TimerComponent"]),
            call_stmt("TimerComponent"),
            call_stmt("TimerComponent"),
        ],
    );

    assert_eq!(output.matches("style/css").count(), 1);
    assert_snapshot!(output, @r#"
    import _TimerComponent from "my-lib/lib/timer-component";
    import "my-lib/lib/timer-component/style/css";
    _TimerComponent();
    _TimerComponent();
    "#);
}

#[test]
fn test_library_object_member_collapses() {
    let output = run(
        &Config::single("my-lib"),
        vec![
            default_import("Lib", "my-lib"),
            json!({
                "type": "ExpressionStatement",
                "expression": {
                    "type": "MemberExpression",
                    "object": ident("Lib"),
                    "property": ident("Button"),
                    "computed": false,
                },
            }),
        ],
    );

    assert_snapshot!(output, @r#"
    import _Button from "my-lib/lib/button";
    _Button;
    "#);
}

#[test]
fn test_shadowing_declaration_stops_rewrites() {
    let shadowing = json!({
        "type": "FunctionDeclaration",
        "id": ident("render"),
        "params": [],
        "body": {
            "type": "BlockStatement",
            "body": [
                {
                    "type": "VariableDeclaration",
                    "kind": "let",
                    "declarations": [{
                        "type": "VariableDeclarator",
                        "id": ident("Button"),
                        "init": { "type": "Literal", "value": null, "raw": "null" },
                    }],
                },
                call_stmt("Button"),
            ],
        },
    });
    let output = run(
        &Config::single("antd"),
        vec![named_import("antd", &["Button"]), call_stmt("Button"), shadowing],
    );

    assert_snapshot!(output, @r#"
    import _Button from "antd/lib/button";
    _Button();
    function render() {
      let Button = null;
      Button();
    }
    "#);
}

#[test]
fn test_several_libraries_in_one_pass() {
    let config = Config::from_toml_str(
        r#"
        [[library]]
        library_name = "antd"
        style = true

        [[library]]
        library_name = "lodash"
        library_directory = ""
        camel_to_dash = false
        "#,
    )
    .unwrap();
    let output = run(
        &config,
        vec![
            named_import("react", &["useState"]),
            named_import("antd", &["DatePicker"]),
            named_import("lodash", &["debounce"]),
            call_stmt("DatePicker"),
            call_stmt("debounce"),
            call_stmt("useState"),
        ],
    );

    assert_snapshot!(output, @r#"
    import _DatePicker from "antd/lib/date-picker";
    import "antd/lib/date-picker/style";
    import _debounce from "lodash/debounce";
    import { useState } from "react";
    _DatePicker();
    _debounce();
    useState();
    "#);
}

#[test]
fn test_unsupported_node_is_an_input_error() {
    let mut orchestrator = Orchestrator::new(&Config::single("antd")).unwrap();
    let json = program(vec![json!({ "type": "WithStatement" })]);

    let err = orchestrator
        .process_source(&json, &FileContext::new("legacy.json"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse ESTree JSON in legacy.json");
}
