mod common;

use serde_json::json;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let repository = InMemoryShortUrlRepository::new();
    common::create_test_mapping(&repository, "https://example.com/target", "redirect").await;

    let server = common::create_test_server(common::create_default_state(repository));

    let response = server.get("/redirect").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let repository = InMemoryShortUrlRepository::new();
    common::create_test_mapping(&repository, "https://example.com/target", "slashed1").await;

    let server = common::create_test_server(common::create_default_state(repository));

    let response = server.get("/slashed1/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_default_state(
        InMemoryShortUrlRepository::new(),
    ));

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_redirect_target_is_byte_exact() {
    let long_url = "HTTPS://Example.COM/Some/Path?q=Rust&x=%20#frag";
    let repository = InMemoryShortUrlRepository::new();
    common::create_test_mapping(&repository, long_url, "exact123").await;

    let server = common::create_test_server(common::create_default_state(repository));

    let response = server.get("/exact123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location").as_bytes(), long_url.as_bytes());
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let server = common::create_test_server(common::create_default_state(
        InMemoryShortUrlRepository::new(),
    ));

    let created = server
        .post("/api/shorten/")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let short_code = created.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{short_code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_short_codes_are_case_sensitive() {
    let repository = InMemoryShortUrlRepository::new();
    common::create_test_mapping(&repository, "https://lower.example", "abcdefgh").await;
    common::create_test_mapping(&repository, "https://upper.example", "ABCDEFGH").await;

    let server = common::create_test_server(common::create_default_state(repository));

    assert_eq!(
        server.get("/abcdefgh").await.header("location"),
        "https://lower.example"
    );
    assert_eq!(
        server.get("/ABCDEFGH").await.header("location"),
        "https://upper.example"
    );
    server.get("/AbCdEfGh").await.assert_status_not_found();
}
