use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method as an open, case-sensitive wrapper over the raw string.
///
/// Gateway events are not guaranteed to carry only standard verbs, so this is
/// deliberately not an enumeration; any string decodes successfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Method(String);

impl Method {
    pub fn new(method: impl Into<String>) -> Self {
        Method(method.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        Method(method.to_owned())
    }
}

impl From<String> for Method {
    fn from(method: String) -> Self {
        Method(method)
    }
}

impl PartialEq<&str> for Method {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
