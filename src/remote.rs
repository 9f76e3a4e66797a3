use anyhow::{Context, Result};

use crate::model::{Query, Transport};

mod http_client;
use self::http_client::{base_url_for, encode_form_body, strip_line_endings};

mod operations;

/// Client for one remote key-value server.
pub struct RemoteClient {
    address: String,
    base_url: String,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(address: &str) -> Result<Self> {
        let base_url = base_url_for(address)?;
        let client = reqwest::Client::builder()
            .user_agent("ustore-web")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            address: address.trim().to_string(),
            base_url,
            client,
        })
    }

    /// The address as the user entered it.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs `method` on the remote server.
    ///
    /// Returns the response body with trailing line terminators removed, or
    /// `None` if the call itself failed. An empty body stays `Some("")`.
    pub async fn execute(
        &self,
        method: &str,
        query: &Query,
        transport: Transport,
    ) -> Option<String> {
        match self.fetch(method, query, transport).await {
            Ok(body) => Some(strip_line_endings(&body).to_string()),
            Err(err) => {
                log::warn!("remote {} on {} failed: {:#}", method, self.base_url, err);
                None
            }
        }
    }

    async fn fetch(&self, method: &str, query: &Query, transport: Transport) -> Result<String> {
        let url = self.url(method);
        let req = match transport {
            Transport::FormBody => {
                let body = encode_form_body(query);
                log::debug!("POST {} {}", url, body);
                self.client
                    .post(&url)
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(body)
            }
            Transport::Bare => {
                log::debug!("GET {}", url);
                self.client.get(&url)
            }
        };

        let resp = req
            .send()
            .await
            .with_context(|| format!("{} request", method))?;
        if !resp.status().is_success() {
            log::warn!("remote {} answered {}", url, resp.status());
        }
        resp.text()
            .await
            .with_context(|| format!("read {} response", method))
    }
}
