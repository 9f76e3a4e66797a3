use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginForm {
    ip: String,
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

pub(super) async fn login_page() -> Html<String> {
    views::login_page()
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, Response> {
    let remote = RemoteClient::new(&form.ip).map_err(bad_request)?;
    log::info!("session bound to remote {}", remote.base_url());

    let presented = session_cookie(&headers);
    let minted = state
        .bind_remote(presented.as_deref(), remote)
        .await
        .map_err(internal_error)?;

    let redirect = Redirect::to("/list");
    Ok(match minted {
        Some(secret) => (
            [(header::SET_COOKIE, session_set_cookie(&secret))],
            redirect,
        )
            .into_response(),
        None => redirect.into_response(),
    })
}

pub(super) async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(secret) = session_cookie(&headers)
        && state.end_session(&secret).await
    {
        log::info!("session ended");
    }
    (
        [(header::SET_COOKIE, session_clear_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

/// Lets the request through only when its session has a remote bound,
/// answering with the login page otherwise.
pub(super) async fn require_session(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(secret) = session_cookie(req.headers()) else {
        return views::login_page().into_response();
    };
    let Some(remote) = state.session_remote(&secret).await else {
        return views::login_page().into_response();
    };

    let mut req = req;
    req.extensions_mut().insert(remote);
    next.run(req).await
}

pub(super) async fn home() -> Redirect {
    Redirect::to("/list")
}
