//! HTTP contract tests for the Waste Not API
//!
//! The router runs against in-memory stores and a temporary upload
//! directory, so no database is needed.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt; // for .oneshot()

use waste_not_api::{
    AppState, create_router, password::PasswordService, uploads::UploadStorage,
};

const BOUNDARY: &str = "wastenotboundary7MA4YWxk";

fn test_app() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let storage = UploadStorage::init(tmp.path().join("uploads")).expect("upload dir");
    let passwords = PasswordService::with_params(8, 1, 1).expect("argon2 params");
    let app = create_router(AppState::in_memory(storage, passwords));
    (app, tmp)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn multipart_upload(field: &str, filename: Option<&str>, data: &[u8]) -> Request<Body> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/food/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn upload_dir_entries(tmp: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(tmp.path().join("uploads"))
        .expect("read upload dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_home_and_health() {
    let (app, _tmp) = test_app();

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "waste_not API is running"}));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_then_list_donation() {
    let (app, _tmp) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/donations/",
            json!({
                "food_name": "Vegetable lasagna",
                "quantity": "6 servings",
                "donor": "Green Fork",
                "receiver": "Sunrise Shelter"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Donation created successfully"}));

    let (status, body) = send(&app, get("/api/donations/")).await;
    assert_eq!(status, StatusCode::OK);
    let donations = body.as_array().expect("array");
    assert_eq!(donations.len(), 1);

    let donation = &donations[0];
    assert_eq!(donation["food_name"], "Vegetable lasagna");
    assert_eq!(donation["quantity"], "6 servings");
    assert_eq!(donation["donor"], "Green Fork");
    assert_eq!(donation["receiver"], "Sunrise Shelter");
    assert!(donation["id"].is_number());
    let created_at = donation["created_at"].as_str().expect("timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_donation_fields_are_optional_and_slash_is_optional() {
    let (app, _tmp) = test_app();

    let (status, _) = send(&app, json_request("POST", "/api/donations", json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        json_request("POST", "/api/donations/", json!({"food_name": null, "donor": "Ana"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, with_slash) = send(&app, get("/api/donations/")).await;
    let (_, without_slash) = send(&app, get("/api/donations")).await;
    assert_eq!(with_slash, without_slash);

    let donations = with_slash.as_array().unwrap();
    assert_eq!(donations.len(), 2);
    assert!(donations[0]["food_name"].is_null());
    assert_eq!(donations[1]["donor"], "Ana");
    assert!(donations[0]["id"].as_i64() < donations[1]["id"].as_i64());
}

#[tokio::test]
async fn test_malformed_donation_body_is_rejected() {
    let (app, _tmp) = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/donations/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert!(status.is_client_error());

    let (_, body) = send(&app, get("/api/donations/")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_mistyped_donation_body_is_unprocessable() {
    let (app, _tmp) = test_app();

    for payload in [json!([1, 2]), json!({"quantity": 5}), json!("pasta")] {
        let (status, _) = send(&app, json_request("POST", "/api/donations/", payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let (_, body) = send(&app, get("/api/donations/")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_matches_are_fixed() {
    let (app, _tmp) = test_app();
    let expected = json!([
        {"shelter": "Sunrise Shelter", "distance": "1.2 km"},
        {"shelter": "Community Kitchen", "distance": "2.5 km"}
    ]);

    let (status, body) = send(&app, get("/api/donations/match")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    send(
        &app,
        json_request("POST", "/api/donations/", json!({"food_name": "Rice"})),
    )
    .await;
    let (_, body) = send(
        &app,
        get("/api/donations/match?latitude=40.7&longitude=-74.0&category=grains"),
    )
    .await;
    assert_eq!(body, expected);

    let (status, body) = send(&app, get("/api/donations/match?latitude=north")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_upload_returns_label_and_writes_file() {
    let (app, tmp) = test_app();

    let (status, body) = send(&app, multipart_upload("image", Some("pasta.png"), b"\x89PNG")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Image received");
    assert_eq!(body["detected_food"], "Pasta");

    let expected_path = tmp.path().join("uploads").join("pasta.png");
    assert_eq!(body["file_path"], expected_path.display().to_string());
    assert_eq!(std::fs::read(expected_path).unwrap(), b"\x89PNG");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected_before_writing() {
    let (app, tmp) = test_app();

    let (status, body) = send(&app, multipart_upload("note", Some("a.png"), b"data")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file uploaded"}));

    let (status, body) = send(&app, multipart_upload("image", None, b"just text")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file uploaded"}));

    let (status, body) = send(&app, json_request("POST", "/api/food/upload", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file uploaded"}));

    assert!(upload_dir_entries(&tmp).is_empty());
}

#[tokio::test]
async fn test_upload_path_traversal_stays_in_upload_dir() {
    let (app, tmp) = test_app();

    let (status, body) = send(&app, multipart_upload("image", Some("../../x.png"), b"img")).await;
    assert_eq!(status, StatusCode::OK);

    let expected_path = tmp.path().join("uploads").join("x.png");
    assert_eq!(body["file_path"], expected_path.display().to_string());
    assert_eq!(upload_dir_entries(&tmp), vec!["x.png".to_string()]);
    assert!(!tmp.path().join("x.png").exists());
}

#[tokio::test]
async fn test_upload_same_name_overwrites() {
    let (app, tmp) = test_app();

    send(&app, multipart_upload("image", Some("meal.jpg"), b"first")).await;
    send(&app, multipart_upload("image", Some("meal.jpg"), b"second")).await;

    assert_eq!(upload_dir_entries(&tmp), vec!["meal.jpg".to_string()]);
    let stored = std::fs::read(tmp.path().join("uploads").join("meal.jpg")).unwrap();
    assert_eq!(stored, b"second");
}

#[tokio::test]
async fn test_register_twice_is_rejected() {
    let (app, _tmp) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users/register",
            json!({"username": "lena", "password": "pw1"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "User registered successfully"}));

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users/register",
            json!({"username": "lena", "password": "something else"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User already exists"}));
}

#[tokio::test]
async fn test_login_requires_exact_credentials() {
    let (app, _tmp) = test_app();

    send(
        &app,
        json_request(
            "POST",
            "/api/users/register",
            json!({"username": "omar", "password": "correct horse"}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users/login",
            json!({"username": "omar", "password": "correct horse"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Login successful"}));

    for attempt in [
        json!({"username": "omar", "password": "wrong"}),
        json!({"username": "omar2", "password": "correct horse"}),
        json!({"username": "omar"}),
    ] {
        let (status, body) = send(&app, json_request("POST", "/api/users/login", attempt)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_has_single_winner() {
    let (app, _tmp) = test_app();

    let attempts: Vec<_> = (0..16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let req = json_request(
                    "POST",
                    "/api/users/register",
                    json!({"username": "racer", "password": format!("pw{i}")}),
                );
                send(&app, req).await.0
            })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, 15);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _tmp) = test_app();

    let req = Request::builder()
        .uri("/api/donations/")
        .header(header::ORIGIN, "http://example.org")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api/users/login")
        .header(header::ORIGIN, "http://localhost:8081")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(preflight).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
