use axum::http::header;
use axum::response::IntoResponse;

/// The recorder page shipped with the binary. Its content is plain static
/// HTML; the service only serves it.
const INDEX_PAGE: &str = include_str!("../../../assets/index.html");

pub async fn index_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], INDEX_PAGE)
}
