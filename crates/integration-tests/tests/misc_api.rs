//! Greeting, models, files, uploads, and user shapes.

#![allow(clippy::unwrap_used)]

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;

use pantry_integration_tests::{TestApp, body_json, body_string, get, json_request};

#[tokio::test]
async fn greeting_is_fixed() {
    let app = TestApp::spawn();
    let response = app.request(get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"Hello": "World"}));
}

#[tokio::test]
async fn health_is_ok() {
    let app = TestApp::spawn();
    let response = app.request(get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn each_model_name_has_its_own_message() {
    let app = TestApp::spawn();

    let mut messages = Vec::new();
    for name in ["alexnet", "resnet", "lenet"] {
        let response = app.request(get(&format!("/models/{name}"))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["model_name"], name);
        messages.push(body["message"].as_str().unwrap().to_string());
    }

    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), 3, "messages must be distinct");
}

#[tokio::test]
async fn unknown_model_name_is_rejected_before_the_handler() {
    let app = TestApp::spawn();
    let response = app.request(get("/models/vgg")).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn file_path_captures_all_remaining_segments() {
    let app = TestApp::spawn();
    let response = app.request(get("/files/home/johndoe/myfile.txt")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["file_path"], "home/johndoe/myfile.txt");
}

#[tokio::test]
async fn upload_reports_name_and_size_per_part() {
    let app = TestApp::spawn();

    let boundary = "XPANTRYBOUNDARY";
    let payload = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"hello.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello world\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"data.bin\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         \x00\x01\x02\x03\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/uploadfile/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(payload))
        .unwrap();

    let response = app.request(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["filename"], "hello.txt");
    assert_eq!(files[0]["size"], 11);
    assert_eq!(files[1]["filename"], "data.bin");
    assert_eq!(files[1]["content_type"], "application/octet-stream");
}

#[tokio::test]
async fn empty_upload_is_bad_request() {
    let app = TestApp::spawn();

    let boundary = "XPANTRYBOUNDARY";
    let request = Request::builder()
        .method("POST")
        .uri("/uploadfile/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(format!("--{boundary}--\r\n")))
        .unwrap();

    let response = app.request(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_user_never_echoes_the_password() {
    let app = TestApp::spawn();

    let response = app
        .request(json_request(
            "POST",
            "/user/",
            &json!({
                "username": "johndoe",
                "password": "secret1234",
                "email": "johndoe@example.com",
                "full_name": "John Doe"
            }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(!body.contains("password"));
    assert!(!body.contains("secret1234"));

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["username"], "johndoe");
    assert_eq!(body["full_name"], "John Doe");
}

#[tokio::test]
async fn user_with_malformed_email_is_rejected_with_422() {
    let app = TestApp::spawn();

    let response = app
        .request(json_request(
            "POST",
            "/user/",
            &json!({
                "username": "johndoe",
                "password": "secret1234",
                "email": "not-an-email"
            }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["detail"][0]["msg"].as_str().unwrap().contains("@"));
}

#[tokio::test]
async fn item_listing_echoes_the_ads_cookie() {
    let app = TestApp::spawn();

    let request = Request::builder()
        .method("GET")
        .uri("/items/")
        .header(header::COOKIE, "ads_in=granted")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.request(request).await).await;
    assert_eq!(body["ads_in"], "granted");

    // no cookie: the field is present but null
    let body = body_json(app.request(get("/items/")).await).await;
    assert_eq!(body["ads_in"], json!(null));
}

#[tokio::test]
async fn index_weights_round_trip_with_integer_keys() {
    let app = TestApp::spawn();

    let response = app
        .request(json_request(
            "POST",
            "/index-weights/",
            &json!({"1": 2.5, "7": 0.25}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"1": 2.5, "7": 0.25}));

    // non-numeric keys fail validation
    let response = app
        .request(json_request("POST", "/index-weights/", &json!({"one": 2.5})))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn multiple_images_are_validated_and_echoed() {
    let app = TestApp::spawn();

    let images = json!([
        {"url": "http://example.com/baz.jpg", "name": "baz"},
        {"url": "http://example.com/dave.jpg", "name": "dave"}
    ]);
    let response = app
        .request(json_request("POST", "/images/multiple", &images))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["name"], "dave");

    // a malformed URL anywhere in the list fails validation
    let response = app
        .request(json_request(
            "POST",
            "/images/multiple",
            &json!([{"url": "not a url", "name": "bad"}]),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn user_id_is_echoed() {
    let app = TestApp::spawn();
    let body = body_json(app.request(get("/users/johndoe")).await).await;
    assert_eq!(body["user_id"], "johndoe");
}

#[tokio::test]
async fn current_user_stub() {
    let app = TestApp::spawn();
    let body = body_json(app.request(get("/users/me")).await).await;
    assert_eq!(body["user_id"], "the current user");
}

#[tokio::test]
async fn user_item_shape_follows_query_parameters() {
    let app = TestApp::spawn();

    let body = body_json(
        app.request(get("/users/7/items/plumbus?q=how&short=true"))
            .await,
    )
    .await;
    assert_eq!(body["owner_id"], 7);
    assert_eq!(body["item_id"], "plumbus");
    assert_eq!(body["q"], "how");
    assert!(body.get("description").is_none());

    let body = body_json(app.request(get("/users/7/items/plumbus")).await).await;
    assert!(body.get("q").is_none());
    assert!(
        body["description"]
            .as_str()
            .unwrap()
            .contains("amazing item")
    );
}
