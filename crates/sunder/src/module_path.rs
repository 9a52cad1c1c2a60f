//! Module path synthesis for per-symbol imports
//!
//! Turns an exported symbol name such as `TimerComponent` into the module
//! path that holds it, e.g. `my-lib/lib/timer-component`.

use std::borrow::Cow;

use cow_utils::CowUtils;

use crate::config::CustomName;

/// How a symbol name is turned into a directory name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTransform {
    /// `TimerComponent` -> `timer-component`
    Dash,
    /// `TimerComponent` -> `timer_component`
    Underscore,
    /// Keep the name as written
    Identity,
}

impl NameTransform {
    /// Underscore-case wins over dash-case when both are requested
    pub fn from_flags(camel_to_dash: bool, camel_to_underline: bool) -> Self {
        if camel_to_underline {
            Self::Underscore
        } else if camel_to_dash {
            Self::Dash
        } else {
            Self::Identity
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Dash => camel_to_dash(name),
            Self::Underscore => camel_to_underscore(name),
            Self::Identity => name.to_owned(),
        }
    }
}

/// `TimerComponent` -> `timer-component`
pub fn camel_to_dash(name: &str) -> String {
    camel_to_separated(name, '-')
}

/// `TimerComponent` -> `timer_component`
pub fn camel_to_underscore(name: &str) -> String {
    camel_to_separated(name, '_')
}

// Lower-case the first character, then prefix every later ASCII upper-case
// letter with the separator.
fn camel_to_separated(name: &str, separator: char) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(name.len() + 4);
    out.extend(first.to_lowercase());
    for ch in chars {
        if ch.is_ascii_uppercase() {
            out.push(separator);
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Replace Windows separators with forward slashes
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    path.cow_replace('\\', "/")
}

/// Join path segments the way POSIX `path.join` does
///
/// Empty and `.` segments are dropped, `..` pops the previous segment and
/// duplicate separators collapse.
pub fn join_segments(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| normalize_separators(segment))
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (absolute, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) => ".".to_owned(),
        (false, false) => body,
    }
}

/// Inputs that decide where a symbol's module lives
#[derive(Debug, Clone)]
pub struct PathOptions {
    /// Package name of the barrel module, e.g. `antd`
    pub library_name: String,
    /// Sub-directory holding one directory per symbol, e.g. `lib`
    pub library_directory: String,
    pub transform: NameTransform,
    /// Fixed file name appended to every path, may be empty
    pub file_name: String,
    /// Overrides the whole path when set
    pub custom_name: Option<CustomName>,
}

impl PathOptions {
    /// Module path for `symbol`, always with forward slashes
    pub fn module_path(&self, symbol: &str) -> String {
        let transformed = self.transform.apply(symbol);
        let path = match &self.custom_name {
            Some(custom) => custom.apply(&transformed),
            None => join_segments(&[
                &self.library_name,
                &self.library_directory,
                &transformed,
                &self.file_name,
            ]),
        };
        normalize_separators(&path).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn options(transform: NameTransform) -> PathOptions {
        PathOptions {
            library_name: "my-lib".to_owned(),
            library_directory: "lib".to_owned(),
            transform,
            file_name: String::new(),
            custom_name: None,
        }
    }

    #[test]
    fn test_camel_case_transforms() {
        assert_eq!(camel_to_dash("TimerComponent"), "timer-component");
        assert_eq!(camel_to_underscore("TimerComponent"), "timer_component");
        assert_eq!(camel_to_dash("XyzAbc"), "xyz-abc");
        assert_eq!(camel_to_underscore("XyzAbc"), "xyz_abc");
        assert_eq!(camel_to_dash("button"), "button");
        assert_eq!(camel_to_dash("DatePicker2"), "date-picker2");
        assert_eq!(camel_to_dash("ABC"), "a-b-c");
        assert_eq!(camel_to_dash(""), "");
    }

    #[test]
    fn test_transform_flags() {
        assert_eq!(NameTransform::from_flags(true, false), NameTransform::Dash);
        assert_eq!(
            NameTransform::from_flags(true, true),
            NameTransform::Underscore
        );
        assert_eq!(
            NameTransform::from_flags(false, false),
            NameTransform::Identity
        );
        assert_eq!(NameTransform::Identity.apply("DatePicker"), "DatePicker");
    }

    #[test]
    fn test_join_segments() {
        assert_eq!(
            join_segments(&["my-lib", "lib", "timer-component", ""]),
            "my-lib/lib/timer-component"
        );
        assert_eq!(join_segments(&["my-lib", "", "button"]), "my-lib/button");
        assert_eq!(
            join_segments(&["my-lib", "es/./components/", "button"]),
            "my-lib/es/components/button"
        );
        assert_eq!(join_segments(&["my-lib", "lib/..", "button"]), "my-lib/button");
        assert_eq!(join_segments(&["..", "lib", "button"]), "../lib/button");
        assert_eq!(join_segments(&["/abs", "lib"]), "/abs/lib");
        assert_eq!(join_segments(&["", ""]), ".");
    }

    #[test]
    fn test_windows_separators_are_normalized() {
        assert_eq!(normalize_separators(r"my-lib\lib\button"), "my-lib/lib/button");
        assert_eq!(
            join_segments(&["my-lib", r"lib\es", "button"]),
            "my-lib/lib/es/button"
        );
    }

    #[test]
    fn test_module_path_variants() {
        assert_eq!(
            options(NameTransform::Dash).module_path("TimerComponent"),
            "my-lib/lib/timer-component"
        );
        assert_eq!(
            options(NameTransform::Underscore).module_path("TimerComponent"),
            "my-lib/lib/timer_component"
        );

        let with_file = PathOptions {
            file_name: "index.js".to_owned(),
            ..options(NameTransform::Dash)
        };
        assert_eq!(
            with_file.module_path("Button"),
            "my-lib/lib/button/index.js"
        );
    }

    #[test]
    fn test_custom_name_overrides_path() {
        let custom = PathOptions {
            custom_name: Some(CustomName::Function(Arc::new(|name: &str| {
                format!(r"my-lib\custom\{name}")
            }))),
            ..options(NameTransform::Dash)
        };
        assert_eq!(
            custom.module_path("TimerComponent"),
            "my-lib/custom/timer-component"
        );

        let template = PathOptions {
            custom_name: Some(CustomName::Template("my-lib/es/{name}/index".to_owned())),
            ..options(NameTransform::Identity)
        };
        assert_eq!(template.module_path("Button"), "my-lib/es/Button/index");
    }
}
