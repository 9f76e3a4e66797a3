use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameters of a single remote call, keyed by the remote server's field names.
pub type Query = BTreeMap<&'static str, String>;

/// Separator the remote server puts between entries of list-valued responses.
pub const LINE_DELIMITER: &str = "\r\n";

/// Whether an identifier names a branch or a version of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Branch,
    Version,
}

impl RefKind {
    /// Field name the remote server expects for this kind of identifier.
    pub fn query_key(self) -> &'static str {
        match self {
            RefKind::Branch => "branch",
            RefKind::Version => "version",
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefSelector {
    pub kind: RefKind,
    pub id: String,
}

impl RefSelector {
    pub fn new(kind: RefKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn branch(id: impl Into<String>) -> Self {
        Self::new(RefKind::Branch, id)
    }

    pub fn version(id: impl Into<String>) -> Self {
        Self::new(RefKind::Version, id)
    }
}

/// How a remote call carries its query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// `POST {base}/{method}` with the query joined into the request body.
    FormBody,

    /// `GET {base}/{method}` with no parameters.
    Bare,
}

/// Splits a list-valued remote response into its entries.
///
/// A failed call and an empty response both yield no entries.
pub fn split_lines(response: Option<&str>) -> Vec<String> {
    match response {
        None | Some("") => Vec::new(),
        Some(text) => text.split(LINE_DELIMITER).map(str::to_string).collect(),
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
