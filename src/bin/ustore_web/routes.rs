//! HTTP route registration for the web front-end.

use super::*;

/// Routes that need a remote bound to the caller's session.
pub(super) fn session_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/list", get(list_page).post(list_branches))
        .route("/get", get(get_page).post(get_value))
        .route("/put", get(put_page).post(put_value))
        .route("/branch", get(branch_page).post(branch))
        .route("/merge", get(merge_page).post(merge))
        .route("/rename", get(rename_page).post(rename))
        .route("/delete", get(delete_page).post(delete))
        .route("/latest", post(latest))
        .route("/head", post(head))
        .route("/exists", post(exists))
        .layer(middleware::from_fn_with_state(state, require_session))
}

pub(super) fn build_app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .merge(session_router(state.clone()))
        .with_state(state)
}
