use super::*;

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn list_page_escapes_keys() {
    let Html(page) = list_page("127.0.0.1:60000", &["<b>".to_string(), "k2".to_string()]);
    assert!(page.contains("<span>&lt;b&gt;</span>"));
    assert!(page.contains("<span>k2</span>"));
    assert!(page.contains("127.0.0.1:60000"));
}

#[test]
fn list_page_without_keys_says_so() {
    let Html(page) = list_page("addr", &[]);
    assert!(page.contains("no keys"));
    assert!(!page.contains("id=\"keys\""));
}

#[test]
fn action_pages_post_expected_fields() {
    let Html(merge) = merge_page();
    for field in ["key", "value", "opt1", "bransion1", "opt2", "bransion2"] {
        assert!(merge.contains(&format!("name=\"{}\"", field)), "{}", field);
    }
    assert!(merge.contains("action=\"/merge\""));

    let Html(rename) = rename_page();
    for field in ["key", "old_brc", "new_brc"] {
        assert!(rename.contains(&format!("name=\"{}\"", field)), "{}", field);
    }
}

#[test]
fn login_page_has_no_nav() {
    let Html(page) = login_page();
    assert!(page.contains("name=\"ip\""));
    assert!(!page.contains("action=\"/logout\""));
}
