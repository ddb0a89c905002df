//! Component selectors (what was requested) and identifiers (what was resolved).
//!
//! Both are written in the same textual notation:
//! - `:path` (leading colon) names a project of the same multi-project build
//! - `group:module:version` names an externally versioned module
//! - anything else is kept verbatim as an unrecognised kind

use std::fmt;

use serde::{Deserialize, Serialize};

/// A request for a component, as declared by a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentSelector {
    Project {
        path: String,
    },
    Module {
        group: String,
        module: String,
        version: String,
    },
    /// A selector kind the ordering policy cannot order.
    Other(String),
}

/// A concrete component chosen by the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentIdentifier {
    Project {
        path: String,
    },
    Module {
        group: String,
        module: String,
        version: String,
    },
    /// An identifier kind the ordering policy cannot order.
    Other(String),
}

enum Notation {
    Project(String),
    Module(String, String, String),
    Other(String),
}

fn parse_notation(s: &str) -> Notation {
    let s = s.trim();
    if s.starts_with(':') {
        return Notation::Project(s.to_string());
    }
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [group, module, version] if !group.is_empty() && !module.is_empty() => Notation::Module(
            group.to_string(),
            module.to_string(),
            version.to_string(),
        ),
        _ => Notation::Other(s.to_string()),
    }
}

/// Constructors, notation parsing, accessors, and string conversions shared by
/// both component enums, which have identical shapes.
macro_rules! component_notation {
    ($name:ident) => {
        impl $name {
            pub fn project(path: impl Into<String>) -> Self {
                Self::Project { path: path.into() }
            }

            pub fn module(
                group: impl Into<String>,
                module: impl Into<String>,
                version: impl Into<String>,
            ) -> Self {
                Self::Module {
                    group: group.into(),
                    module: module.into(),
                    version: version.into(),
                }
            }

            /// Parse from notation. Never fails; unknown shapes become `Other`.
            pub fn parse(s: &str) -> Self {
                match parse_notation(s) {
                    Notation::Project(path) => Self::Project { path },
                    Notation::Module(group, module, version) => Self::Module {
                        group,
                        module,
                        version,
                    },
                    Notation::Other(raw) => Self::Other(raw),
                }
            }

            /// `group:module` for modules, the path for projects.
            pub fn key(&self) -> String {
                match self {
                    Self::Project { path } => path.clone(),
                    Self::Module { group, module, .. } => format!("{group}:{module}"),
                    Self::Other(raw) => raw.clone(),
                }
            }

            pub fn kind(&self) -> &str {
                match self {
                    Self::Project { .. } => "project",
                    Self::Module { .. } => "module",
                    Self::Other(raw) => raw,
                }
            }

            /// The version (or version expression) of a module.
            pub fn version(&self) -> Option<&str> {
                match self {
                    Self::Module { version, .. } => Some(version),
                    _ => None,
                }
            }

            /// Whether this refers to `key`: `group:module`, a bare module name, or a project path.
            pub fn matches_key(&self, key: &str) -> bool {
                match self {
                    Self::Module { module, .. } => self.key() == key || module == key,
                    _ => self.key() == key,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Project { path } => f.write_str(path),
                    Self::Module {
                        group,
                        module,
                        version,
                    } => write!(f, "{group}:{module}:{version}"),
                    Self::Other(raw) => f.write_str(raw),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(component: $name) -> Self {
                component.to_string()
            }
        }
    };
}

component_notation!(ComponentSelector);
component_notation!(ComponentIdentifier);
