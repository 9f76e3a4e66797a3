use std::collections::HashMap;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};

/// One call the fake remote store received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone, Default)]
struct FakeState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    replies: Arc<Mutex<HashMap<String, String>>>,
}

/// In-process stand-in for the remote key-value server.
///
/// Replies are looked up by `"{path} {body}"` first, then by `"{path}"`, and
/// default to an empty body.
pub struct FakeRemote {
    pub address: String,
    state: FakeState,
}

#[allow(dead_code)]
impl FakeRemote {
    pub fn reply(&self, route: &str, body: &str) {
        self.state
            .replies
            .lock()
            .expect("replies lock")
            .insert(route.to_string(), body.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().expect("calls lock").clone()
    }

    pub fn bodies_for(&self, path: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.path == path)
            .map(|c| c.body)
            .collect()
    }
}

async fn record(State(state): State<FakeState>, method: Method, uri: Uri, body: String) -> String {
    let path = uri.path().to_string();
    let reply = {
        let replies = state.replies.lock().expect("replies lock");
        replies
            .get(&format!("{} {}", path, body))
            .or_else(|| replies.get(&path))
            .cloned()
            .unwrap_or_default()
    };
    state.calls.lock().expect("calls lock").push(RecordedCall {
        method: method.to_string(),
        path,
        body,
    });
    reply
}

pub fn spawn_fake_remote() -> Result<FakeRemote> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind fake remote")?;
    listener
        .set_nonblocking(true)
        .context("set fake remote nonblocking")?;
    let address = listener
        .local_addr()
        .context("read fake remote addr")?
        .to_string();

    let state = FakeState::default();
    let app = Router::new().fallback(record).with_state(state.clone());

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build fake remote runtime");
        rt.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt fake remote listener");
            let _ = axum::serve(listener, app).await;
        });
    });

    Ok(FakeRemote { address, state })
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn dead_address() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind probe")?;
    let addr = listener.local_addr().context("read probe addr")?;
    drop(listener);
    Ok(addr.to_string())
}

#[allow(dead_code)]
pub struct WebGuard {
    pub base_url: String,
    _data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for WebGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[allow(dead_code)]
impl WebGuard {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[allow(dead_code)]
pub fn spawn_web() -> Result<WebGuard> {
    let data_dir = tempfile::tempdir().context("create web tempdir")?;
    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_ustore-web"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn ustore-web")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(WebGuard {
        base_url,
        _data_dir: data_dir,
        child,
    })
}

#[allow(dead_code)]
fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[allow(dead_code)]
pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Client that leaves redirects to the test so `Set-Cookie` stays visible.
#[allow(dead_code)]
pub fn browser() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("build test client")
}

/// Logs in to `remote_address` and returns the `name=value` cookie pair.
#[allow(dead_code)]
pub fn login(
    client: &reqwest::blocking::Client,
    web: &WebGuard,
    remote_address: &str,
) -> Result<String> {
    let resp = client
        .post(web.url("/login"))
        .form(&[("ip", remote_address)])
        .send()
        .context("POST /login")?;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/list")
    );

    let set_cookie = resp
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .context("login did not set a cookie")?
        .to_str()
        .context("cookie header not utf-8")?;
    let pair = set_cookie
        .split(';')
        .next()
        .context("empty cookie header")?;
    Ok(pair.to_string())
}

/// Submits a form with the session cookie and returns the `result` field.
#[allow(dead_code)]
pub fn post_op(
    client: &reqwest::blocking::Client,
    web: &WebGuard,
    cookie: &str,
    path: &str,
    form: &[(&str, &str)],
) -> Result<serde_json::Value> {
    let resp = client
        .post(web.url(path))
        .header(reqwest::header::COOKIE, cookie)
        .form(form)
        .send()
        .with_context(|| format!("POST {}", path))?;
    anyhow::ensure!(
        resp.status().is_success(),
        "POST {} status {}",
        path,
        resp.status()
    );
    let v: serde_json::Value = resp
        .json()
        .with_context(|| format!("parse {} response", path))?;
    Ok(v["result"].clone())
}

#[allow(dead_code)]
pub fn get_page(
    client: &reqwest::blocking::Client,
    web: &WebGuard,
    cookie: Option<&str>,
    path: &str,
) -> Result<(reqwest::StatusCode, String)> {
    let mut req = client.get(web.url(path));
    if let Some(cookie) = cookie {
        req = req.header(reqwest::header::COOKIE, cookie);
    }
    let resp = req.send().with_context(|| format!("GET {}", path))?;
    let status = resp.status();
    let body = resp.text().context("read page")?;
    Ok((status, body))
}
