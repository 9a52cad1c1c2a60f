//! Barrel-import rewriting for ECMAScript modules
//!
//! Turns `import { Button } from "antd"` plus its uses into per-symbol
//! imports such as `import _Button from "antd/lib/button"`, so a bundler
//! only loads the modules a file actually references.

pub mod ast;
pub mod ast_builder;
pub mod code_generator;
pub mod config;
pub mod dispatcher;
pub mod import_injector;
pub mod module_path;
pub mod orchestrator;
pub mod plugin;
pub mod scope;
pub mod transformation_context;
pub mod traversal;
pub mod types;
pub mod visitors;
