use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Extension, Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::RwLock;

use ustore_web::model::{RefKind, RefSelector};
use ustore_web::remote::RemoteClient;

#[path = "ustore_web/types.rs"]
mod types;
use self::types::*;
#[path = "ustore_web/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "ustore_web/session_store.rs"]
mod session_store;
use self::session_store::*;
#[path = "ustore_web/views.rs"]
mod views;
#[path = "ustore_web/handlers_session.rs"]
mod handlers_session;
use self::handlers_session::*;
#[path = "ustore_web/handlers_ops.rs"]
mod handlers_ops;
use self::handlers_ops::*;
#[path = "ustore_web/handlers_list.rs"]
mod handlers_list;
use self::handlers_list::*;
#[path = "ustore_web/routes.rs"]
mod routes;
use self::routes::*;
#[path = "ustore_web/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
