//! Static chat page, embedded at build time.

use axum::{
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use log::debug;

const INDEX: (&str, &str) = ("index.html", include_str!("../../static/index.html"));

const ASSETS: &[(&str, &str)] = &[
    INDEX,
    ("style.css", include_str!("../../static/style.css")),
    ("script.js", include_str!("../../static/script.js")),
];

/// Serve a known asset by path, or the page itself for anything else.
pub async fn serve(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let (name, body) = ASSETS
        .iter()
        .copied()
        .find(|(name, _)| *name == path)
        .unwrap_or(INDEX);
    debug!("Serving {name} for {}", uri.path());

    ([(header::CONTENT_TYPE, content_type(name))], body).into_response()
}

fn content_type(name: &str) -> String {
    let mime = mime_guess::from_path(name).first_or_octet_stream();
    if mime.type_() == mime::TEXT || mime.subtype() == mime::JAVASCRIPT {
        format!("{mime}; charset=utf-8")
    } else {
        mime.to_string()
    }
}
