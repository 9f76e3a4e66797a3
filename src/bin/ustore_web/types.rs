use super::*;

#[derive(Clone)]
pub(crate) struct AppState {
    // Keyed by the blake3 hash of the cookie secret.
    pub(crate) sessions: Arc<RwLock<HashMap<String, Session>>>,

    // Sessions idle for longer than this are treated as logged out.
    pub(crate) session_ttl: time::Duration,
}

impl AppState {
    pub(crate) fn new(session_ttl: time::Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            session_ttl,
        }
    }
}

pub(crate) struct Session {
    pub(crate) remote: Arc<RemoteClient>,
    pub(crate) created_at: String,
    pub(crate) last_used: time::OffsetDateTime,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct OpResult<T> {
    pub(crate) result: T,
}

pub(crate) fn op_result<T: serde::Serialize>(result: T) -> Json<OpResult<T>> {
    Json(OpResult { result })
}
