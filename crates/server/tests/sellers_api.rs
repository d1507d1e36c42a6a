use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use models::db::{connect_and_migrate, DatabaseConfig};
use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    let db = connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    Ok(routes::build_router(ServerState { db }, cors()))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create_seller(
    app: &Router,
    first: &str,
    last: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i64> {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/sellers/",
        Some(json!({"first_name": first, "last_name": last, "email": email, "password": password})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(body["id"].as_i64().expect("id"))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_create_seller() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, mut body) = send(
        &app,
        "POST",
        "/api/v1/sellers/",
        Some(json!({"first_name": "Ivan", "last_name": "Ivanov", "email": "ivanov@mail.ru", "password": "123Ivan"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let id = body.as_object_mut().unwrap().remove("id");
    assert!(id.and_then(|v| v.as_i64()).is_some(), "seller id not returned");
    assert_eq!(body, json!({"first_name": "Ivan", "last_name": "Ivanov", "email": "ivanov@mail.ru"}));
    Ok(())
}

#[tokio::test]
async fn test_create_seller_validation() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/sellers/",
        Some(json!({"first_name": "Ivan", "last_name": "x".repeat(51), "email": "ivanov@mail.ru", "password": "123Ivan"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    // missing field is rejected by the extractor with the same error body
    let (status, body) =
        send(&app, "POST", "/api/v1/sellers/", Some(json!({"first_name": "Ivan"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("last_name")));

    let (_, list) = send(&app, "GET", "/api/v1/sellers/", None).await?;
    assert_eq!(list, json!({"sellers": []}));
    Ok(())
}

#[tokio::test]
async fn test_get_sellers() -> anyhow::Result<()> {
    let app = build_app().await?;
    let maria = create_seller(&app, "Maria", "Ivanova", "ivanova@mail.ru", "123Maria").await?;
    let irina = create_seller(&app, "Irina", "Petrova", "petrova@mail.ru", "123Irina").await?;

    let (status, body) = send(&app, "GET", "/api/v1/sellers/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "sellers": [
                {"id": maria, "first_name": "Maria", "last_name": "Ivanova", "email": "ivanova@mail.ru", "books": []},
                {"id": irina, "first_name": "Irina", "last_name": "Petrova", "email": "petrova@mail.ru", "books": []},
            ]
        })
    );

    // same listing without the trailing slash
    let (status, again) = send(&app, "GET", "/api/v1/sellers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, body);
    Ok(())
}

#[tokio::test]
async fn test_get_single_seller() -> anyhow::Result<()> {
    let app = build_app().await?;
    let maria = create_seller(&app, "Maria", "Ivanova", "ivanova@mail.ru", "123Maria").await?;
    create_seller(&app, "Irina", "Petrova", "petrova@mail.ru", "123Irina").await?;

    let (status, body) = send(&app, "GET", &format!("/api/v1/sellers/{maria}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": maria, "first_name": "Maria", "last_name": "Ivanova", "email": "ivanova@mail.ru", "books": []})
    );

    let (status, _) = send(&app, "GET", &format!("/api/v1/sellers/{}", maria + 10), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_update_seller() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_seller(&app, "Maria", "Ivanova", "ivanova_maria@mail.ru", "123Maria").await?;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sellers/{id}"),
        Some(json!({
            "id": id,
            "first_name": "Mariya",
            "last_name": "Sidorova",
            "email": "sidorova@mail.ru",
            "password": "changed",
            "books": []
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "first_name": "Mariya", "last_name": "Sidorova", "email": "sidorova@mail.ru", "books": []})
    );

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/sellers/{}", id + 1),
        Some(json!({"first_name": "A", "last_name": "B", "email": "c@mail.ru"})),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_seller() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_seller(&app, "Maria", "Ivanova", "ivanova_maria@mail.ru", "123Maria").await?;

    let (status, book) = send(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({"author": "Pushkin", "title": "Eugeny Onegin", "year": 2001, "seller_id": id, "pages": 104})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let book_id = book["id"].as_i64().expect("book id");

    let (status, seller) = send(&app, "GET", &format!("/api/v1/sellers/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seller["books"][0]["title"], "Eugeny Onegin");

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/sellers/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/api/v1/books/{book_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, "GET", "/api/v1/sellers/", None).await?;
    assert_eq!(list, json!({"sellers": []}));
    let (_, books) = send(&app, "GET", "/api/v1/books/", None).await?;
    assert_eq!(books, json!({"books": []}));
    Ok(())
}

#[tokio::test]
async fn test_delete_seller_with_invalid_id() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_seller(&app, "Maria", "Ivanova", "ivanova_maria@mail.ru", "123Maria").await?;

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/sellers/{}", id + 1), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (_, list) = send(&app, "GET", "/api/v1/sellers/", None).await?;
    assert_eq!(list["sellers"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_update_seller_with_incomplete_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_seller(&app, "Maria", "Ivanova", "ivanova@mail.ru", "123Maria").await?;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sellers/{id}"),
        Some(json!({"first_name": "Mariya"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    // wrong type for a field
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sellers/{id}"),
        Some(json!({"first_name": 1, "last_name": "Sidorova", "email": "sidorova@mail.ru"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    let (_, stored) = send(&app, "GET", &format!("/api/v1/sellers/{id}"), None).await?;
    assert_eq!(stored["first_name"], "Maria");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/books/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn test_non_integer_id() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_seller(&app, "Maria", "Ivanova", "ivanova@mail.ru", "123Maria").await?;

    for (method, uri) in [
        ("GET", "/api/v1/sellers/abc"),
        ("DELETE", "/api/v1/sellers/abc"),
        ("GET", "/api/v1/books/1.5"),
    ] {
        let (status, body) = send(&app, method, uri, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["error"], "Bad Request", "{method} {uri}");
        assert!(body["detail"].is_string(), "{method} {uri}");
    }

    let (_, list) = send(&app, "GET", "/api/v1/sellers/", None).await?;
    assert_eq!(list["sellers"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_book_for_unknown_seller_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({"author": "Gogol", "title": "Dead Souls", "year": 1842, "seller_id": 77, "pages": 352})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Referential Integrity Error");

    let (_, books) = send(&app, "GET", "/api/v1/books", None).await?;
    assert_eq!(books, json!({"books": []}));
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/sellers/{id}"].is_object());
    Ok(())
}
