//! Per-browser-session remote bindings.
//!
//! The browser holds a random secret in a cookie; the table only stores its
//! hash, so a leaked table dump cannot be replayed as a cookie.

use super::*;

pub(super) const SESSION_COOKIE: &str = "ustore_session";

pub(super) fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

pub(super) fn hash_secret(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

pub(super) fn generate_session_secret() -> Result<String> {
    // 32 bytes of entropy, hex-encoded.
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

/// Session secret carried by the request, if any.
pub(super) fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(super) fn session_set_cookie(secret: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, secret
    )
}

pub(super) fn session_clear_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}

fn is_expired(session: &Session, now: time::OffsetDateTime, ttl: time::Duration) -> bool {
    now - session.last_used > ttl
}

impl AppState {
    /// Looks up the remote bound to `secret` and marks the session as used.
    pub(super) async fn session_remote(&self, secret: &str) -> Option<Arc<RemoteClient>> {
        let id = hash_secret(secret);
        let now = time::OffsetDateTime::now_utc();

        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        if is_expired(session, now, self.session_ttl) {
            log::info!("session created {} expired", session.created_at);
            sessions.remove(&id);
            return None;
        }
        session.last_used = now;
        Some(session.remote.clone())
    }

    /// Binds `remote` to the session identified by `presented`, or to a fresh
    /// session when that one is missing or expired.
    ///
    /// Returns the new secret when a session was minted.
    pub(super) async fn bind_remote(
        &self,
        presented: Option<&str>,
        remote: RemoteClient,
    ) -> Result<Option<String>> {
        let now = time::OffsetDateTime::now_utc();
        let ttl = self.session_ttl;
        let remote = Arc::new(remote);

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !is_expired(s, now, ttl));

        if let Some(secret) = presented
            && let Some(session) = sessions.get_mut(&hash_secret(secret))
        {
            session.remote = remote;
            session.last_used = now;
            return Ok(None);
        }

        let secret = generate_session_secret()?;
        sessions.insert(
            hash_secret(&secret),
            Session {
                remote,
                created_at: now_ts(),
                last_used: now,
            },
        );
        Ok(Some(secret))
    }

    pub(super) async fn end_session(&self, secret: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&hash_secret(secret)).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/bin/ustore_web/session_store_tests.rs"]
mod tests;
