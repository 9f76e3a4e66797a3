//! Minimal HTML pages for the form-driven UI.
//!
//! Every action page posts its form to its own URL and shows the JSON
//! answer underneath.

use super::*;

const STYLE: &str = r#"
  body { font-family: sans-serif; margin: 2em; }
  nav a { margin-right: 1em; }
  label { display: block; margin-top: 0.6em; }
  pre { background: #f4f4f4; padding: 0.6em; }
"#;

const SUBMIT_SCRIPT: &str = r#"
  document.querySelectorAll('form[data-json]').forEach(function (form) {
    form.addEventListener('submit', function (ev) {
      ev.preventDefault();
      fetch(form.action, { method: 'POST', body: new URLSearchParams(new FormData(form)) })
        .then(function (r) { return r.text(); })
        .then(function (t) { document.getElementById('result').textContent = t; });
    });
  });
"#;

pub(super) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, nav: bool, body: &str) -> Html<String> {
    let nav = if nav {
        concat!(
            r#"<nav><a href="/list">list</a><a href="/get">get</a><a href="/put">put</a>"#,
            r#"<a href="/branch">branch</a><a href="/merge">merge</a><a href="/rename">rename</a>"#,
            r#"<a href="/delete">delete</a>"#,
            r#"<form method="post" action="/logout" style="display:inline"><button>logout</button></form></nav>"#,
        )
    } else {
        ""
    };
    Html(format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>ustore - {title}</title>\
         <style>{STYLE}</style></head><body>{nav}<h1>{title}</h1>{body}\
         <pre id=\"result\"></pre><script>{SUBMIT_SCRIPT}</script></body></html>",
        title = escape_html(title),
    ))
}

fn ref_choice(name: &str, id_field: &str, label: &str) -> String {
    format!(
        "<label>{label} <select name=\"{name}\">\
         <option value=\"{b}\">branch</option><option value=\"{v}\">version</option></select>\
         <input name=\"{id_field}\"></label>",
        b = RefKind::Branch,
        v = RefKind::Version,
    )
}

fn text_input(name: &str, label: &str) -> String {
    format!("<label>{label} <input name=\"{name}\"></label>")
}

fn action_form(action: &str, fields: &[String]) -> String {
    format!(
        "<form method=\"post\" action=\"/{action}\" data-json>{}<button>{action}</button></form>",
        fields.concat()
    )
}

pub(super) fn login_page() -> Html<String> {
    let form = "<form method=\"post\" action=\"/login\">\
                <label>server address <input name=\"ip\" placeholder=\"127.0.0.1:60000\"></label>\
                <button>connect</button></form>";
    layout("login", false, form)
}

pub(super) fn list_page(address: &str, keys: &[String]) -> Html<String> {
    let mut body = format!("<p>connected to <code>{}</code></p>", escape_html(address));
    if keys.is_empty() {
        body.push_str("<p>no keys</p>");
    } else {
        body.push_str("<ul id=\"keys\">");
        for key in keys {
            body.push_str(&format!("<li><span>{}</span></li>", escape_html(key)));
        }
        body.push_str("</ul>");
    }
    body.push_str("<h2>branches</h2>");
    body.push_str(&action_form("list", &[text_input("key", "key")]));
    body.push_str("<h2>latest versions</h2>");
    body.push_str(&action_form("latest", &[text_input("key", "key")]));
    layout("list", true, &body)
}

pub(super) fn get_page() -> Html<String> {
    let fields = [text_input("key", "key"), ref_choice("opt", "bransion", "at")];
    layout("get", true, &action_form("get", &fields))
}

pub(super) fn put_page() -> Html<String> {
    let fields = [
        text_input("key", "key"),
        ref_choice("opt", "bransion", "at"),
        text_input("value", "value"),
    ];
    layout("put", true, &action_form("put", &fields))
}

pub(super) fn branch_page() -> Html<String> {
    let fields = [
        text_input("key", "key"),
        ref_choice("opt", "bransion", "from"),
        text_input("branch", "new branch"),
    ];
    layout("branch", true, &action_form("branch", &fields))
}

pub(super) fn merge_page() -> Html<String> {
    let fields = [
        text_input("key", "key"),
        text_input("value", "value"),
        ref_choice("opt1", "bransion1", "target"),
        ref_choice("opt2", "bransion2", "reference"),
    ];
    layout("merge", true, &action_form("merge", &fields))
}

pub(super) fn rename_page() -> Html<String> {
    let fields = [
        text_input("key", "key"),
        text_input("old_brc", "old branch"),
        text_input("new_brc", "new branch"),
    ];
    layout("rename", true, &action_form("rename", &fields))
}

pub(super) fn delete_page() -> Html<String> {
    let fields = [text_input("key", "key"), text_input("branch", "branch")];
    layout("delete", true, &action_form("delete", &fields))
}

#[cfg(test)]
#[path = "../../tests/bin/ustore_web/views_tests.rs"]
mod tests;
