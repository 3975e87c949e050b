//! HTML pages served by the form handler.

use std::fmt::Write as _;

use axum::response::Html;

/// State of the landing form: an optional error banner and the values to prefill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingView {
    pub error: Option<String>,
    pub name: String,
    pub number: String,
}

impl LandingView {
    pub fn with_error(error: impl Into<String>, name: &str, number: &str) -> Self {
        Self {
            error: Some(error.into()),
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Call me back</title>
  <style>
    body { font-family: sans-serif; max-width: 32rem; margin: 3rem auto; padding: 0 1rem; }
    .error { color: #b00020; white-space: pre-line; border: 1px solid #b00020; padding: .5rem; }
    label { display: block; margin-top: 1rem; }
    input { width: 100%; padding: .4rem; }
    button { margin-top: 1.5rem; padding: .5rem 1.5rem; }
  </style>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>\n";

pub fn landing(view: &LandingView) -> Html<String> {
    let mut page = String::from(HEAD);
    page.push_str("  <h1>Interested in our product?</h1>\n");
    page.push_str("  <p>Leave your name and number and one of our sales agents will call you back.</p>\n");

    if let Some(error) = view.error.as_deref() {
        let _ = writeln!(page, r#"  <p class="error">{}</p>"#, escape(error));
    }

    let _ = write!(
        page,
        r#"  <form method="post" action="/callme">
    <label for="name">Your name</label>
    <input type="text" id="name" name="name" value="{name}">
    <label for="number">Your phone number</label>
    <input type="tel" id="number" name="number" value="{number}">
    <button type="submit">Call me</button>
  </form>
"#,
        name = escape(&view.name),
        number = escape(&view.number),
    );

    page.push_str(FOOT);
    Html(page)
}

pub fn sent() -> Html<String> {
    let mut page = String::from(HEAD);
    page.push_str("  <h1>Thank you!</h1>\n");
    page.push_str("  <p>One of our sales agents will call you back shortly.</p>\n");
    page.push_str(FOOT);
    Html(page)
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}
