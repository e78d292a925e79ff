//! Runs the subscribe flow against a real Redis instance.
//! Needs a Redis server at `REDIS_URL` (defaults to `redis://127.0.0.1:6379`):
//! `cargo test -- --ignored`

use anyhow::Result;
use serde_json::json;
use subscribers::config::StoreBackend;

use crate::helpers::{test_config, TestApp};

#[tokio::test]
#[ignore = "needs a running Redis server"]
async fn redis_subscribe_and_count() -> Result<()> {
    // Every test config uses a fresh set key, so the set starts out empty.
    let app = TestApp::spawn_with(test_config(StoreBackend::Redis)).await?;

    assert_eq!(app.count().await?, 0);

    let (status, message) = app.subscribe(&json!({ "email": "a@x.com" })).await?;
    assert_eq!((status, message.as_str()), (200, "Success"));

    let (status, message) = app.subscribe(&json!({ "email": "a@x.com" })).await?;
    assert_eq!((status, message.as_str()), (200, "Already subscribed"));

    let (_, message) = app.subscribe(&json!({ "email": "b@y.com" })).await?;
    assert_eq!(message, "Success");

    assert_eq!(app.count().await?, 2);

    app.store.shutdown().await?;

    Ok(())
}
