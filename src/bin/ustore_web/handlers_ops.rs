//! Single-key operations: get, put, branch, merge, rename, delete, head, exists.

use ustore_web::query::MergeRejected;

use super::*;

type Remote = Extension<Arc<RemoteClient>>;

#[derive(Debug, serde::Deserialize)]
pub(super) struct GetForm {
    key: String,
    opt: RefKind,
    bransion: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct PutForm {
    key: String,
    opt: RefKind,
    bransion: String,
    value: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct BranchForm {
    key: String,
    opt: RefKind,
    bransion: String,
    branch: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct MergeForm {
    key: String,
    value: String,
    opt1: RefKind,
    bransion1: String,
    opt2: RefKind,
    bransion2: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RenameForm {
    key: String,
    old_brc: String,
    new_brc: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct KeyBranchForm {
    key: String,
    branch: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ExistsForm {
    key: String,

    #[serde(default)]
    branch: Option<String>,
}

pub(super) async fn get_page() -> Html<String> {
    views::get_page()
}

pub(super) async fn get_value(
    Extension(remote): Remote,
    Form(form): Form<GetForm>,
) -> Json<OpResult<String>> {
    let at = RefSelector::new(form.opt, form.bransion);
    let res = remote.get_value(&form.key, &at).await;
    op_result(res.unwrap_or_default())
}

pub(super) async fn put_page() -> Html<String> {
    views::put_page()
}

pub(super) async fn put_value(
    Extension(remote): Remote,
    Form(form): Form<PutForm>,
) -> Json<OpResult<String>> {
    let at = RefSelector::new(form.opt, form.bransion);
    let res = remote.put_value(&form.key, &at, &form.value).await;
    op_result(res.unwrap_or_default())
}

pub(super) async fn branch_page() -> Html<String> {
    views::branch_page()
}

pub(super) async fn branch(
    Extension(remote): Remote,
    Form(form): Form<BranchForm>,
) -> Json<OpResult<String>> {
    let from = RefSelector::new(form.opt, form.bransion);
    let res = remote.branch(&form.key, &from, &form.branch).await;
    op_result(res.unwrap_or_default())
}

pub(super) async fn merge_page() -> Html<String> {
    views::merge_page()
}

pub(super) async fn merge(
    Extension(remote): Remote,
    Form(form): Form<MergeForm>,
) -> Json<OpResult<String>> {
    let target = RefSelector::new(form.opt1, form.bransion1);
    let reference = RefSelector::new(form.opt2, form.bransion2);
    match remote
        .merge(&form.key, &form.value, &target, &reference)
        .await
    {
        Ok(res) => op_result(res.unwrap_or_default()),
        Err(MergeRejected) => op_result(MergeRejected::MESSAGE.to_string()),
    }
}

pub(super) async fn rename_page() -> Html<String> {
    views::rename_page()
}

pub(super) async fn rename(
    Extension(remote): Remote,
    Form(form): Form<RenameForm>,
) -> Json<OpResult<String>> {
    let res = remote.rename(&form.key, &form.old_brc, &form.new_brc).await;
    op_result(res.unwrap_or_default())
}

pub(super) async fn delete_page() -> Html<String> {
    views::delete_page()
}

pub(super) async fn delete(
    Extension(remote): Remote,
    Form(form): Form<KeyBranchForm>,
) -> Json<OpResult<Vec<String>>> {
    op_result(remote.delete(&form.key, &form.branch).await)
}

pub(super) async fn head(
    Extension(remote): Remote,
    Form(form): Form<KeyBranchForm>,
) -> Json<OpResult<String>> {
    let res = remote.head(&form.key, &form.branch).await;
    op_result(res.unwrap_or_default())
}

pub(super) async fn exists(
    Extension(remote): Remote,
    Form(form): Form<ExistsForm>,
) -> Json<OpResult<String>> {
    let branch = form.branch.as_deref().filter(|b| !b.is_empty());
    let res = remote.exists(&form.key, branch).await;
    op_result(res.unwrap_or_default())
}
