use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque icon handle.
///
/// The aggregator only carries these through; resolving a handle to image
/// bytes belongs to whatever bundles the wallet's assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IconRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
