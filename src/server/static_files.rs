//! Static file serving for the control panel.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use include_dir::{Dir, include_dir};

/// Embedded frontend files.
static FRONTEND: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend");

/// Serve the control panel page.
pub async fn index_handler() -> impl IntoResponse {
    match FRONTEND.get_file("index.html") {
        Some(file) => Html(String::from_utf8_lossy(file.contents()).into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "Frontend not found").into_response(),
    }
}
