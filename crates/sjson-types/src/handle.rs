use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Caller-chosen identifier for a document in a registry.
///
/// Handles are never generated by the registry. A handle is unique among live
/// documents and may be reused once its document has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentHandle(i32);

impl DocumentHandle {
    /// Wrap a raw integer handle.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

impl From<i32> for DocumentHandle {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<DocumentHandle> for i32 {
    fn from(handle: DocumentHandle) -> Self {
        handle.0
    }
}

impl FromStr for DocumentHandle {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}
