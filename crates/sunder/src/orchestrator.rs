//! File-level pipeline: ESTree JSON in, JavaScript out

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::{
    ast::{Program, SourceType},
    code_generator::generate,
    config::Config,
    dispatcher::Dispatcher,
    transformation_context::TransformStats,
    types::FileContext,
};

/// Output of one rewritten file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub code: String,
    pub stats: TransformStats,
}

/// Drives the dispatcher over whole files
#[derive(Debug)]
pub struct Orchestrator {
    dispatcher: Dispatcher,
}

impl Orchestrator {
    /// Validate `config` and build every engine it describes
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }

    /// Parse an ESTree `Program` from JSON
    pub fn parse(json: &str, file: &FileContext) -> Result<Program> {
        let program: Program = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse ESTree JSON in {}", file.display_name()))?;
        if program.source_type == SourceType::Script {
            warn!(
                "{} is a script; import declarations are only valid in modules",
                file.display_name()
            );
        }
        Ok(program)
    }

    /// Rewrite an already parsed program in place
    pub fn process_program(
        &mut self,
        program: &mut Program,
        file: &FileContext,
    ) -> Result<TransformStats> {
        let transformations = self
            .dispatcher
            .transform(program, file)
            .with_context(|| format!("Failed to rewrite {}", file.display_name()))?;
        Ok(transformations.get_stats())
    }

    /// Rewrite one ESTree JSON document and print it as JavaScript
    pub fn process_source(&mut self, json: &str, file: &FileContext) -> Result<ProcessedFile> {
        let mut program = Self::parse(json, file)?;
        let stats = self.process_program(&mut program, file)?;
        Ok(ProcessedFile {
            code: generate(&program),
            stats,
        })
    }

    pub fn process_file(&mut self, path: &Path) -> Result<ProcessedFile> {
        debug!("Reading {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        self.process_source(&json, &FileContext::new(path))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::LibraryConfig;

    const SCENARIO: &str = r#"{
        "type": "Program",
        "sourceType": "module",
        "start": 0,
        "end": 58,
        "body": [
            {
                "type": "ImportDeclaration",
                "start": 0,
                "end": 41,
                "specifiers": [
                    {
                        "type": "ImportSpecifier",
                        "imported": { "type": "Identifier", "name": "TimerComponent" },
                        "local": { "type": "Identifier", "name": "TimerComponent" }
                    }
                ],
                "source": { "type": "Literal", "value": "my-lib", "raw": "\"my-lib\"" }
            },
            {
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "Identifier", "name": "TimerComponent" },
                    "arguments": [],
                    "optional": false
                }
            }
        ]
    }"#;

    #[test]
    fn test_process_source() {
        let mut orchestrator = Orchestrator::new(&Config::single("my-lib")).unwrap();
        let processed = orchestrator
            .process_source(SCENARIO, &FileContext::anonymous())
            .unwrap();

        assert_snapshot!(processed.code, @r#"
        import _TimerComponent from "my-lib/lib/timer-component";
        _TimerComponent();
        "#);
        assert_eq!(processed.stats.symbols_rewritten, 1);
        assert_eq!(processed.stats.barrel_imports_removed, 1);
    }

    #[test]
    fn test_invalid_config_fails_before_parsing() {
        let err = Orchestrator::new(&Config::new(vec![LibraryConfig::default()])).unwrap_err();
        assert!(err.to_string().contains("libraryName"));
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let mut orchestrator = Orchestrator::new(&Config::single("antd")).unwrap();
        let err = orchestrator
            .process_source("{ \"body\": 3 }", &FileContext::new("broken.json"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse ESTree JSON in broken.json");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let mut orchestrator = Orchestrator::new(&Config::single("antd")).unwrap();
        let err = orchestrator
            .process_file(Path::new("does/not/exist.json"))
            .unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
