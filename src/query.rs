//! Per-operation query construction.
//!
//! Every builder only ever inserts field names the remote server understands;
//! caller input lands in values, never in keys.

use std::fmt;

use crate::model::{Query, RefKind, RefSelector};

/// Returned when a merge would fold a branch into a version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeRejected;

impl MergeRejected {
    pub const MESSAGE: &'static str = "cannot merge branch to version";
}

impl fmt::Display for MergeRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for MergeRejected {}

pub fn key_query(key: &str) -> Query {
    let mut q = Query::new();
    q.insert("key", key.to_string());
    q
}

pub fn get_query(key: &str, at: &RefSelector) -> Query {
    let mut q = key_query(key);
    q.insert(at.kind.query_key(), at.id.clone());
    q
}

pub fn put_query(key: &str, at: &RefSelector, value: &str) -> Query {
    let mut q = get_query(key, at);
    q.insert("value", value.to_string());
    q
}

/// `from` is the existing branch or version the new branch starts at.
pub fn branch_query(key: &str, from: &RefSelector, new_branch: &str) -> Query {
    let mut q = key_query(key);
    q.insert("new_branch", new_branch.to_string());
    match from.kind {
        RefKind::Branch => q.insert("old_branch", from.id.clone()),
        RefKind::Version => q.insert("version", from.id.clone()),
    };
    q
}

pub fn merge_query(
    key: &str,
    value: &str,
    target: &RefSelector,
    reference: &RefSelector,
) -> Result<Query, MergeRejected> {
    let mut q = key_query(key);
    q.insert("value", value.to_string());
    match (target.kind, reference.kind) {
        (RefKind::Branch, RefKind::Branch) => {
            q.insert("tgt_branch", target.id.clone());
            q.insert("ref_branch", reference.id.clone());
        }
        (RefKind::Branch, RefKind::Version) => {
            q.insert("tgt_branch", target.id.clone());
            q.insert("ref_version1", reference.id.clone());
        }
        (RefKind::Version, RefKind::Version) => {
            q.insert("ref_version1", target.id.clone());
            q.insert("ref_version2", reference.id.clone());
        }
        (RefKind::Version, RefKind::Branch) => return Err(MergeRejected),
    }
    Ok(q)
}

pub fn rename_query(key: &str, old_branch: &str, new_branch: &str) -> Query {
    let mut q = key_query(key);
    q.insert("old_branch", old_branch.to_string());
    q.insert("new_branch", new_branch.to_string());
    q
}

/// Shared by `head` and `delete`, which both address one branch of a key.
pub fn branch_of_key_query(key: &str, branch: &str) -> Query {
    let mut q = key_query(key);
    q.insert("branch", branch.to_string());
    q
}

pub fn exists_query(key: &str, branch: Option<&str>) -> Query {
    match branch {
        Some(branch) => branch_of_key_query(key, branch),
        None => key_query(key),
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
