use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

use crate::helpers::{read_message, TestApp};

#[tokio::test]
async fn api_count_empty_store_is_zero() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get_count().await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "message": 0 }));

    Ok(())
}

#[tokio::test]
async fn api_count_ignores_duplicate_subscriptions() -> Result<()> {
    let app = TestApp::spawn().await?;
    let before = app.count().await?;

    let emails = ["a@x.com", "b@y.com", "a@x.com", "c@z.com", "b@y.com"];
    for email in emails {
        app.subscribe(&json!({ "email": email })).await?;
    }

    assert_eq!(app.count().await?, before + 3);

    Ok(())
}

#[tokio::test]
async fn api_count_matches_the_store() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in ["a@x.com", "b@y.com"] {
        app.store.add(email).await?;
    }

    let count: u64 = read_message(app.get_count().await?).await?;
    assert_eq!(count, app.store.count().await?);
    assert_eq!(count, 2);

    Ok(())
}

#[tokio::test]
async fn api_count_rejects_post() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(format!("http://{}/api/count", app.addr))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
