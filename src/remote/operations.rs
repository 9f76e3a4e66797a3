//! Typed wrappers for each remote method.

use crate::model::{RefSelector, split_lines};
use crate::query::{self, MergeRejected};

use super::*;

impl RemoteClient {
    pub async fn get_value(&self, key: &str, at: &RefSelector) -> Option<String> {
        self.execute("get", &query::get_query(key, at), Transport::FormBody)
            .await
    }

    pub async fn put_value(&self, key: &str, at: &RefSelector, value: &str) -> Option<String> {
        self.execute("put", &query::put_query(key, at, value), Transport::FormBody)
            .await
    }

    pub async fn branch(&self, key: &str, from: &RefSelector, new_branch: &str) -> Option<String> {
        self.execute(
            "branch",
            &query::branch_query(key, from, new_branch),
            Transport::FormBody,
        )
        .await
    }

    /// Rejected combinations never reach the remote server.
    pub async fn merge(
        &self,
        key: &str,
        value: &str,
        target: &RefSelector,
        reference: &RefSelector,
    ) -> Result<Option<String>, MergeRejected> {
        let q = query::merge_query(key, value, target, reference)?;
        Ok(self.execute("merge", &q, Transport::FormBody).await)
    }

    pub async fn rename(&self, key: &str, old_branch: &str, new_branch: &str) -> Option<String> {
        self.execute(
            "rename",
            &query::rename_query(key, old_branch, new_branch),
            Transport::FormBody,
        )
        .await
    }

    /// All keys on the server.
    pub async fn list_keys(&self) -> Vec<String> {
        let res = self.execute("list", &Query::new(), Transport::Bare).await;
        split_lines(res.as_deref())
    }

    /// All branches of `key`.
    pub async fn list_branches(&self, key: &str) -> Vec<String> {
        let res = self
            .execute("list", &query::key_query(key), Transport::FormBody)
            .await;
        split_lines(res.as_deref())
    }

    /// Each branch of `key` paired with its head version, `""` if the head
    /// could not be read.
    pub async fn branch_heads(&self, key: &str) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for branch in self.list_branches(key).await {
            let head = self.head(key, &branch).await.unwrap_or_default();
            out.push((branch, head));
        }
        out
    }

    pub async fn head(&self, key: &str, branch: &str) -> Option<String> {
        self.execute(
            "head",
            &query::branch_of_key_query(key, branch),
            Transport::FormBody,
        )
        .await
    }

    pub async fn latest(&self, key: &str) -> Vec<String> {
        let res = self
            .execute("latest", &query::key_query(key), Transport::FormBody)
            .await;
        split_lines(res.as_deref())
    }

    pub async fn delete(&self, key: &str, branch: &str) -> Vec<String> {
        let res = self
            .execute(
                "delete",
                &query::branch_of_key_query(key, branch),
                Transport::FormBody,
            )
            .await;
        split_lines(res.as_deref())
    }

    pub async fn exists(&self, key: &str, branch: Option<&str>) -> Option<String> {
        self.execute(
            "exists",
            &query::exists_query(key, branch),
            Transport::FormBody,
        )
        .await
    }
}
