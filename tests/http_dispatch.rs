//! In-process HTTP tests for the dispatch boundary.

use axum::http::StatusCode;
use route_dispatch::config::RouteConfig;
use route_dispatch::http::X_REQUEST_ID;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_builtin_routes() {
    let app = common::builtin_server().router();

    let res = app.clone().oneshot(common::request("GET", "/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "Welcome home!");

    let res = app.clone().oneshot(common::request("GET", "/user/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: 42");

    let res = app.clone().oneshot(common::request("POST", "/user")).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(common::body_text(res).await, "User created!");
}

#[tokio::test]
async fn test_unmatched_method_is_404() {
    let app = common::builtin_server().router();

    let res = app.clone().oneshot(common::request("DELETE", "/user/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(common::body_text(res).await, "Not Found");

    let res = app.oneshot(common::request("POST", "/user/5")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_path_is_404() {
    let app = common::builtin_server().router();

    for uri in ["/user", "/user/1/extra", "/users/1", "/User/1"] {
        let res = app.clone().oneshot(common::request("GET", uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
async fn test_query_string_is_ignored() {
    let app = common::builtin_server().router();

    let res = app.oneshot(common::request("GET", "/user/7?tab=posts")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: 7");
}

#[tokio::test]
async fn test_path_is_decoded_and_escaped() {
    let app = common::builtin_server().router();

    let res = app
        .clone()
        .oneshot(common::request("GET", "/user/%3Cscript%3E"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: &lt;script&gt;");

    let res = app.oneshot(common::request("GET", "//user//9")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: 9");
}

#[tokio::test]
async fn test_undecodable_path_is_400() {
    let app = common::builtin_server().router();

    let res = app.oneshot(common::request("GET", "/user/%FF")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_encoded_slash_does_not_split_segment() {
    let app = common::server_with_routes(vec![
        RouteConfig::new("GET", "/user/{id}/edit", "user.show"),
        RouteConfig::new("GET", "/user/{id}", "user.show"),
    ])
    .router();

    let res = app.clone().oneshot(common::request("GET", "/user/7%2Fedit")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_text(res).await, "Bad Request");

    let res = app.oneshot(common::request("GET", "/user/7/edit")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: 7");
}

#[tokio::test]
async fn test_request_id_is_set_and_propagated() {
    let app = common::builtin_server().router();

    let res = app.clone().oneshot(common::request("GET", "/")).await.unwrap();
    let generated = res.headers().get(X_REQUEST_ID).expect("request id");
    assert_eq!(generated.len(), 36);

    let req = axum::http::Request::builder()
        .uri("/nowhere")
        .header(X_REQUEST_ID, "abc-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers().get(X_REQUEST_ID).unwrap(), "abc-123");
}

#[tokio::test]
async fn test_registration_order_shadows_later_routes() {
    let app = common::server_with_routes(vec![
        RouteConfig::new("GET", "/user/{id}", "user.show"),
        RouteConfig::new("GET", "/user/new", "home.index"),
    ])
    .router();

    let res = app.oneshot(common::request("GET", "/user/new")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "User ID: new");
}

#[tokio::test]
async fn test_method_is_case_insensitive_for_extension_methods() {
    let app = common::server_with_routes(vec![RouteConfig::new("purge", "/", "home.index")]).router();

    let res = app.oneshot(common::request("PURGE", "/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
