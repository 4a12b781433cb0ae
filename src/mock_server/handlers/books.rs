//! Book endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;
use url::form_urlencoded;

use crate::mock_server::state::{BookFilter, MockState};
use crate::{Book, Page};

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": message }))).into_response()
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return detail(StatusCode::NOT_FOUND, "Not found.");
    };

    let state = state.read().await;

    match state.get_book(id) {
        Some(book) => (StatusCode::OK, Json(book.clone())).into_response(),
        None => detail(StatusCode::NOT_FOUND, "No Book matches the given query."),
    }
}

/// GET /books
pub async fn list_books(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let filter = match BookFilter::from_params(&params) {
        Ok(f) => f,
        Err(message) => return detail(StatusCode::BAD_REQUEST, &message),
    };

    let page_number = match params.iter().find(|(name, _)| name == "page") {
        Some((_, value)) => match value.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => return detail(StatusCode::NOT_FOUND, "Invalid page."),
        },
        None => 1,
    };

    let state = state.read().await;
    let all_books = state.list_books(&filter);
    let total = all_books.len();
    let page_size = state.page_size;

    // Apply pagination
    let start = match (page_number - 1).checked_mul(page_size) {
        Some(start) if start == 0 || start < total => start,
        _ => return detail(StatusCode::NOT_FOUND, "Invalid page."),
    };
    let end = start.saturating_add(page_size).min(total);
    let items: Vec<Book> = all_books[start..end].iter().map(|b| (*b).clone()).collect();

    let link = |target: usize| page_link(&state.base_url, &params, target);
    let page = Page {
        total_count: total as u64,
        next_link: (end < total).then(|| link(page_number + 1)).flatten(),
        previous_link: (page_number > 1).then(|| link(page_number - 1)).flatten(),
        items,
    };

    (StatusCode::OK, Json(page)).into_response()
}

/// Absolute link to page `target` with the request's other parameters kept.
///
/// Page 1 is linked without a `page` parameter.
fn page_link(base_url: &str, params: &[(String, String)], target: usize) -> Option<url::Url> {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(params.iter().filter(|(name, _)| name != "page"));
    if target > 1 {
        query.append_pair("page", &target.to_string());
    }
    let query = query.finish();

    let link = if query.is_empty() {
        format!("{base_url}/books")
    } else {
        format!("{base_url}/books?{query}")
    };
    url::Url::parse(&link).ok()
}
