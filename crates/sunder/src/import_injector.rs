//! Injection of generated import declarations
//!
//! The injector hands out collision-free local names and collects the import
//! declarations requested during a traversal. The statements are spliced into
//! the top of the program once the walk is complete, so handlers never visit
//! nodes they created themselves.

use anyhow::{Result, bail};
use log::trace;
use rustc_hash::FxHashSet;

use crate::{
    ast::{Identifier, Stmt},
    ast_builder,
};

/// Collects generated imports for one program
#[derive(Debug, Default)]
pub struct ImportInjector {
    /// Every identifier name present in the file plus every generated name
    taken_names: FxHashSet<String>,
    /// Generated statements in request order
    statements: Vec<Stmt>,
}

impl ImportInjector {
    /// Create an injector that avoids every name in `taken_names`
    pub fn new(taken_names: FxHashSet<String>) -> Self {
        Self {
            taken_names,
            statements: Vec::new(),
        }
    }

    /// Add `import <uid> from "source"` and return the generated local
    pub fn add_default(&mut self, source: &str, name_hint: &str) -> Result<Identifier> {
        validate_source(source)?;
        let local = self.generate_uid(name_hint);
        trace!("Injecting default import {local} from {source:?}");
        self.statements
            .push(ast_builder::import_default(&local, source));
        Ok(Identifier::new(local))
    }

    /// Add `import { imported as <uid> } from "source"` and return the local
    pub fn add_named(&mut self, source: &str, imported: &str, name_hint: &str) -> Result<Identifier> {
        validate_source(source)?;
        let local = self.generate_uid(name_hint);
        trace!("Injecting named import {{ {imported} as {local} }} from {source:?}");
        self.statements
            .push(ast_builder::import_named(imported, &local, source));
        Ok(Identifier::new(local))
    }

    /// Add `import "source"`
    pub fn add_side_effect(&mut self, source: &str) -> Result<()> {
        validate_source(source)?;
        trace!("Injecting side-effect import {source:?}");
        self.statements.push(ast_builder::import_side_effect(source));
        Ok(())
    }

    /// Generate a local name derived from `hint` that is unused in the file
    ///
    /// `Button` becomes `_Button`, then `_Button2`, `_Button3` and so on.
    pub fn generate_uid(&mut self, hint: &str) -> String {
        let base = uid_base(hint);
        let mut counter = 1_usize;
        loop {
            let candidate = if counter > 1 {
                format!("_{base}{counter}")
            } else {
                format!("_{base}")
            };
            if self.taken_names.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Number of statements requested so far
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Drain the generated statements, in request order
    pub fn take_statements(&mut self) -> Vec<Stmt> {
        std::mem::take(&mut self.statements)
    }
}

fn validate_source(source: &str) -> Result<()> {
    if source.is_empty() {
        bail!("cannot inject an import with an empty module path");
    }
    if source.contains(['\0', '\n', '\r', '\u{2028}', '\u{2029}']) {
        bail!("cannot inject an import of malformed module path {source:?}");
    }
    Ok(())
}

/// Identifier-safe stem of a generated name
///
/// Invalid characters split words which are then camel-cased, leading digits
/// and underscores go, trailing digits go so the counter suffix stays
/// unambiguous.
fn uid_base(hint: &str) -> String {
    let identifier = to_identifier(hint);
    let stem = identifier
        .trim_start_matches('_')
        .trim_end_matches(|ch: char| ch.is_ascii_digit());
    if stem.is_empty() {
        "temp".to_owned()
    } else {
        stem.to_owned()
    }
}

fn to_identifier(hint: &str) -> String {
    let mut out = String::with_capacity(hint.len());
    let mut upper_next = false;
    for ch in hint.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            if out.is_empty() && ch.is_ascii_digit() {
                continue;
            }
            if upper_next {
                out.push(ch.to_ascii_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        } else {
            upper_next = !out.is_empty();
        }
    }
    out
}
