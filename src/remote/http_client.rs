use super::*;

pub(super) fn base_url_for(address: &str) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        anyhow::bail!("remote address cannot be empty");
    }
    if address.chars().any(char::is_whitespace) {
        anyhow::bail!("remote address cannot contain whitespace");
    }

    let address = address.trim_end_matches('/');
    if address.contains("://") {
        Ok(address.to_string())
    } else {
        Ok(format!("http://{}", address))
    }
}

/// Joins the query as `key=value&key=value`, values sent as-is.
pub(super) fn encode_form_body(query: &Query) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

pub(super) fn strip_line_endings(body: &str) -> &str {
    body.trim_end_matches(['\r', '\n'])
}

impl RemoteClient {
    pub(super) fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
