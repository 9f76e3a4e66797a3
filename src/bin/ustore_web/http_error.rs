use super::*;

pub(super) fn bad_request(err: anyhow::Error) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": format!("{:#}", err)})),
    )
        .into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": format!("{:#}", err)})),
    )
        .into_response()
}
