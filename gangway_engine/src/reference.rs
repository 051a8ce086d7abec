use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModuleReferenceError;

// scope/module
pub(crate) static SPECIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?<scope>[^/\s]+)/(?<module>[^/\s]+)$").unwrap());

pub(crate) const SPECIFIER_SEPARATOR: &str = "/";

/// Identifies a module within an independently deployed remote.
///
/// A reference with either field empty means "no module requested yet" and
/// is never handed to an import resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModuleReference {
    pub scope: String,
    pub module: String,
}

impl ModuleReference {
    pub fn new(scope: &str, module: &str) -> Self {
        Self {
            scope: scope.to_string(),
            module: module.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_loadable(&self) -> bool {
        !self.scope.is_empty() && !self.module.is_empty()
    }

    /// The string handed to the import resolver.
    pub fn specifier(&self) -> String {
        format!("{}{}{}", self.scope, SPECIFIER_SEPARATOR, self.module)
    }
}

impl FromStr for ModuleReference {
    type Err = ModuleReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = SPECIFIER_REGEX.captures(s) {
            return Ok(ModuleReference {
                scope: caps["scope"].to_string(),
                module: caps["module"].to_string(),
            });
        }

        Err(ModuleReferenceError::InvalidFormat {
            primitive_type: stringify!(ModuleReference).to_string(),
            message: format!("module reference '{}' was not in a valid format", s),
        })
    }
}

impl Display for ModuleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}{}{}",
            self.scope, SPECIFIER_SEPARATOR, self.module
        ))
    }
}

impl<'de> Deserialize<'de> for ModuleReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ModuleReference::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ModuleReference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
