use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct KeyForm {
    key: String,
}

pub(super) async fn list_page(Extension(remote): Extension<Arc<RemoteClient>>) -> Html<String> {
    let keys = remote.list_keys().await;
    views::list_page(remote.address(), &keys)
}

/// Every branch of a key with its head version.
pub(super) async fn list_branches(
    Extension(remote): Extension<Arc<RemoteClient>>,
    Form(form): Form<KeyForm>,
) -> Json<OpResult<Vec<(String, String)>>> {
    op_result(remote.branch_heads(&form.key).await)
}

pub(super) async fn latest(
    Extension(remote): Extension<Arc<RemoteClient>>,
    Form(form): Form<KeyForm>,
) -> Json<OpResult<Vec<String>>> {
    op_result(remote.latest(&form.key).await)
}
