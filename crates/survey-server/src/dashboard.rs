//! The dashboard page served at `/`.
//!
//! A single self-contained HTML document compiled into the binary. It talks
//! to the JSON API with relative URLs, so it works behind any host and port.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /`
pub async fn index() -> Html<&'static str> { Html(INDEX_HTML) }
