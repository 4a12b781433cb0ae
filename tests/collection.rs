//! Collection queries and the convenience functions built on them.
//!
//! Uses wiremock to check the exact query parameters sent.

use gutendex::{
    books_by_author_year_range, books_by_copyright, books_by_ids, books_by_languages,
    books_by_topic, get_books, search_books, Book, Copyright, GutendexClient, List, QueryBuilder,
    Sort,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice_page() -> serde_json::Value {
    serde_json::json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": 11,
            "title": "Alice in Wonderland",
            "subjects": [],
            "authors": [{"name": "Carroll, Lewis", "birth_year": 1832, "death_year": 1898}],
            "summaries": [],
            "translators": [],
            "bookshelves": [],
            "languages": ["en"],
            "copyright": false,
            "media_type": "Text",
            "formats": {},
            "download_count": 33151
        }]
    })
}

fn empty_page() -> serde_json::Value {
    serde_json::json!({"count": 0, "next": null, "previous": null, "results": []})
}

fn client_for(mock_server: &MockServer) -> GutendexClient {
    GutendexClient::new(&mock_server.uri()).unwrap()
}

#[tokio::test]
async fn test_search_returns_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("search", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = search_books(&client, "alice").await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "Alice in Wonderland");
    assert!(!page.has_next());
    assert!(!page.has_previous());
}

#[tokio::test]
async fn test_search_with_spaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("search", "alice in wonderland"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = search_books(&client, "alice in wonderland").await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_unfiltered_list_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param_is_missing("search"))
        .and(query_param_is_missing("author_year_start"))
        .and(query_param_is_missing("author_year_end"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = Book::list(&client, &QueryBuilder::new()).await.unwrap();
    assert!(page.is_empty());

    let page = books_by_author_year_range(&client, None, None).await.unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_languages_and_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("languages", "fr,fi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("ids", "11,12,13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    books_by_languages(&client, &["fr", "fi"]).await.unwrap();
    let page = books_by_ids(&client, &[11, 12, 13]).await.unwrap();
    assert_eq!(page.items[0].id, 11);
}

#[tokio::test]
async fn test_topic_and_copyright() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("topic", "children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("copyright", "null"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    books_by_topic(&client, "children").await.unwrap();
    books_by_copyright(&client, Copyright::Unknown).await.unwrap();
}

#[tokio::test]
async fn test_author_year_range_sends_present_bounds_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("author_year_start", "1800"))
        .and(query_param_is_missing("author_year_end"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("author_year_start", "-500"))
        .and(query_param("author_year_end", "1899"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    books_by_author_year_range(&client, Some(1800), None)
        .await
        .unwrap();
    books_by_author_year_range(&client, Some(-500), Some(1899))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_combined_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("mime_type", "text/html"))
        .and(query_param("copyright", "true,false"))
        .and(query_param("sort", "descending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = QueryBuilder::new()
        .mime_type("text/html")
        .copyright_multiple(&[Copyright::True, Copyright::False])
        .sort(Sort::Descending);
    let page = get_books(&client, &query).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_each_fetch_decodes_fresh_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_page()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut first = search_books(&client, "alice").await.unwrap();
    let second = search_books(&client, "alice").await.unwrap();

    first.items[0].title.push_str(" (edited)");
    assert_eq!(second.items[0].title, "Alice in Wonderland");
}
