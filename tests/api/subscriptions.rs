use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use tokio::task::JoinSet;

use crate::helpers::TestApp;

#[tokio::test]
async fn api_subscribe_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_subscribe(&json!({ "email": "a@x.com" })).await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "message": "Success" }));
    assert_eq!(app.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_missing_fields_is_a_400_and_touches_nothing() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({}), "Empty json"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "email": false }), "False email"),
        (json!({ "email": 0 }), "Zero email"),
        (json!({ "name": "John Doe" }), "Missing email"),
    ];

    for (body, description) in cases {
        let (status, message) = app.subscribe(&body).await?;
        assert_eq!(
            status, 400,
            "The API did not return a 400 BAD REQUEST the payload was {description}."
        );
        assert_eq!(message, "Missing required fields", "payload: {description}");
    }

    assert_eq!(app.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_non_json_body_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(format!("http://{}/api/subscribe", app.addr))
        .header("content-type", "application/json")
        .body("email=a@x.com")
        .send()
        .await?;

    assert!(res.status().is_client_error(), "got: {}", res.status());
    assert_eq!(app.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_error_responses_keep_the_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_subscribe(&json!({ "email": "a@x.com" })).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let res = app.post_subscribe(&json!({})).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(
        res.headers().contains_key("x-request-id"),
        "400 response is missing the request id"
    );

    Ok(())
}

#[tokio::test]
async fn api_subscribe_twice_is_idempotent() -> Result<()> {
    let app = TestApp::spawn().await?;
    let body = json!({ "email": "a@x.com" });

    assert_eq!(app.subscribe(&body).await?, (200, "Success".to_string()));
    assert_eq!(app.count().await?, 1);

    assert_eq!(
        app.subscribe(&body).await?,
        (200, "Already subscribed".to_string())
    );
    assert_eq!(app.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_scenario() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, message) = app.subscribe(&json!({})).await?;
    assert_eq!((status, message.as_str()), (400, "Missing required fields"));
    assert_eq!(app.count().await?, 0);

    let (_, message) = app.subscribe(&json!({ "email": "a@x.com" })).await?;
    assert_eq!(message, "Success");
    assert_eq!(app.count().await?, 1);

    let (_, message) = app.subscribe(&json!({ "email": "a@x.com" })).await?;
    assert_eq!(message, "Already subscribed");
    assert_eq!(app.count().await?, 1);

    let (_, message) = app.subscribe(&json!({ "email": "b@y.com" })).await?;
    assert_eq!(message, "Success");
    assert_eq!(app.count().await?, 2);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_concurrent_requests_insert_once() -> Result<()> {
    let app = TestApp::spawn().await?;
    let url = format!("http://{}/api/subscribe", app.addr);

    let mut requests = JoinSet::new();
    for _ in 0..10 {
        let client = app.http_client.clone();
        let url = url.clone();
        requests.spawn(async move {
            client
                .post(url)
                .json(&json!({ "email": "race@x.com" }))
                .send()
                .await?
                .json::<serde_json::Value>()
                .await
        });
    }

    let mut successes = 0;
    while let Some(body) = requests.join_next().await {
        if body?? == json!({ "message": "Success" }) {
            successes += 1;
        }
    }

    assert_eq!(successes, 1, "exactly one request should insert the email");
    assert_eq!(app.count().await?, 1);

    Ok(())
}
