//! Configuration for the barrel-import rewriter
//!
//! A configuration is an ordered list of library records. Each record turns
//! into one independent rewrite engine. Records come from `sunder.toml`, from
//! babel-style JSON option files, or are built programmatically (the only way
//! to attach closures for custom paths and style imports).

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, anyhow, ensure};
use etcetera::BaseStrategy;
use log::debug;
use serde::Deserialize;

use crate::types::FileContext;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "sunder.toml";

/// Default sub-directory holding one directory per exported symbol
pub const DEFAULT_LIBRARY_DIRECTORY: &str = "lib";

type CustomNameFn = dyn Fn(&str) -> String + Send + Sync;
type StyleFn = dyn Fn(&str, &FileContext) -> Option<String> + Send + Sync;

/// Override for the synthesized module path of a symbol
///
/// Receives the symbol name after the configured name transform.
#[derive(Clone)]
pub enum CustomName {
    /// Template in which `{name}` is replaced by the transformed symbol name
    Template(String),
    Function(Arc<CustomNameFn>),
}

impl CustomName {
    pub fn function(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Template(template) => template.replace("{name}", name),
            Self::Function(f) => f(name),
        }
    }
}

impl From<String> for CustomName {
    fn from(template: String) -> Self {
        Self::Template(template)
    }
}

impl fmt::Debug for CustomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Which stylesheet, if any, is imported alongside each resolved symbol
#[derive(Clone, Default)]
pub enum StyleMode {
    #[default]
    Off,
    /// `<path>/style`
    On,
    /// `<path>/style/css`
    Css,
    /// Template in which `{path}` is replaced by the symbol's module path
    Template(String),
    /// Called with the module path and the file; `None` skips the import
    Function(Arc<StyleFn>),
}

impl StyleMode {
    pub fn function(
        f: impl Fn(&str, &FileContext) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Arc::new(f))
    }

    /// Side-effect import to add for a symbol living at `path`
    pub fn side_effect_path(&self, path: &str, file: &FileContext) -> Option<String> {
        match self {
            Self::Off => None,
            Self::On => Some(format!("{path}/style")),
            Self::Css => Some(format!("{path}/style/css")),
            Self::Template(template) => {
                Some(template.replace("{path}", path)).filter(|p| !p.is_empty())
            }
            Self::Function(f) => f(path, file).filter(|p| !p.is_empty()),
        }
    }
}

impl fmt::Debug for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::On => f.write_str("On"),
            Self::Css => f.write_str("Css"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Raw `style` value as written in a config file: `true`, `"css"`, a template
#[derive(Deserialize)]
#[serde(untagged)]
enum StyleSetting {
    Flag(bool),
    Named(String),
}

impl From<StyleSetting> for StyleMode {
    fn from(setting: StyleSetting) -> Self {
        match setting {
            StyleSetting::Flag(false) => Self::Off,
            StyleSetting::Flag(true) => Self::On,
            StyleSetting::Named(name) if name == "css" => Self::Css,
            StyleSetting::Named(name) if name.is_empty() => Self::Off,
            StyleSetting::Named(template) => Self::Template(template),
        }
    }
}

impl<'de> Deserialize<'de> for StyleMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StyleSetting::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> Deserialize<'de> for CustomName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// One library record
///
/// Field names follow `snake_case` in TOML; the babel-plugin-import
/// spellings (`libraryName`, `camel2DashComponentName`, ...) are accepted as
/// aliases so existing option objects can be reused verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Package name of the barrel module (required)
    #[serde(alias = "libraryName")]
    pub library_name: Option<String>,
    /// Defaults to [`DEFAULT_LIBRARY_DIRECTORY`]
    #[serde(alias = "libraryDirectory")]
    pub library_directory: Option<String>,
    /// Dash-case directory names, on unless disabled
    #[serde(alias = "camel2DashComponentName")]
    pub camel_to_dash: Option<bool>,
    /// Underscore-case directory names, overrides dash-case
    #[serde(alias = "camel2UnderlineComponentName")]
    pub camel_to_underline: Option<bool>,
    pub style: StyleMode,
    #[serde(alias = "fileName")]
    pub file_name: Option<String>,
    #[serde(alias = "customName")]
    pub custom_name: Option<CustomName>,
    /// Default import of each symbol module, on unless disabled
    #[serde(alias = "transformToDefaultImport")]
    pub transform_to_default_import: Option<bool>,
}

impl LibraryConfig {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: Some(library_name.into()),
            ..Self::default()
        }
    }

    /// The library name, or a configuration error naming the record
    pub fn required_library_name(&self, index: usize) -> Result<&str> {
        self.library_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| anyhow!("libraryName should be provided (library entry #{index})"))
    }
}

/// A single record or an ordered list of records
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// On-disk layout of `sunder.toml`
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(alias = "libraries")]
    library: Option<OneOrMany<LibraryConfig>>,
}

/// Ordered list of library records
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub libraries: Vec<LibraryConfig>,
}

impl Config {
    pub fn new(libraries: Vec<LibraryConfig>) -> Self {
        Self { libraries }
    }

    /// Configuration rewriting a single library with default settings
    pub fn single(library_name: impl Into<String>) -> Self {
        Self::new(vec![LibraryConfig::new(library_name)])
    }

    /// Parse `sunder.toml` contents: `[library]` or `[[library]]` tables
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).context("invalid sunder TOML config")?;
        Ok(Self::new(
            file.library.map(OneOrMany::into_vec).unwrap_or_default(),
        ))
    }

    /// Parse babel-style options: one option object or an array of them
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let records: OneOrMany<LibraryConfig> =
            serde_json::from_str(contents).context("invalid JSON options")?;
        Ok(Self::new(records.into_vec()))
    }

    /// Load a config file, choosing the format from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        };
        config.with_context(|| format!("failed to load config file {}", path.display()))
    }

    /// Resolve the configuration to use
    ///
    /// An explicit path always wins. Otherwise `sunder.toml` in `cwd` is used,
    /// then the one in the user's config directory. Returns an empty config
    /// when none exists.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        for candidate in Self::candidate_paths(cwd) {
            if candidate.is_file() {
                debug!("Using config file {}", candidate.display());
                return Self::from_path(&candidate);
            }
        }

        debug!("No config file found");
        Ok(Self::default())
    }

    fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![cwd.join(CONFIG_FILE_NAME)];
        match etcetera::choose_base_strategy() {
            Ok(strategy) => candidates.push(strategy.config_dir().join("sunder").join(CONFIG_FILE_NAME)),
            Err(err) => debug!("No user config directory available: {err}"),
        }
        candidates
    }

    /// Fail fast on records that cannot become an engine
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.libraries.is_empty(), "no libraries configured");
        for (index, library) in self.libraries.iter().enumerate() {
            library.required_library_name(index)?;
        }
        Ok(())
    }
}
