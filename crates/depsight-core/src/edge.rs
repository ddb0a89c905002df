use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::{ComponentIdentifier, ComponentSelector};

/// A single requested -> resolved dependency relationship plus the component
/// that declared it.
///
/// `requested` is optional only so that malformed upstream records can be
/// loaded and rejected by the ordering policy; well-formed edges always carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<ComponentSelector>,
    pub actual: ComponentIdentifier,
    pub from: ComponentIdentifier,
}

impl DependencyEdge {
    pub fn new(
        requested: ComponentSelector,
        actual: ComponentIdentifier,
        from: ComponentIdentifier,
    ) -> Self {
        Self {
            requested: Some(requested),
            actual,
            from,
        }
    }

    /// Whether the requested selector or the resolved identifier refers to `key`.
    ///
    /// Accepts `group:module`, a bare module name, or a project path.
    pub fn matches_key(&self, key: &str) -> bool {
        self.requested
            .as_ref()
            .is_some_and(|r| r.matches_key(key))
            || self.actual.matches_key(key)
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requested {
            Some(requested) => write!(f, "{requested}")?,
            None => f.write_str("<none>")?,
        }
        write!(f, " -> {} (from {})", self.actual, self.from)
    }
}
