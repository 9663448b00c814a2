use axum::response::Html;

/// Management page, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Handler for the index page (GET /).
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
