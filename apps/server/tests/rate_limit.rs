//! Per-client request limits

mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use support::{TestApp, TestResponse};

async fn limited_app(per_hour: u32) -> anyhow::Result<TestApp> {
    TestApp::new_with_config(|config| {
        config.rate_limit.enabled = true;
        config.rate_limit.requests_per_hour = per_hour;
        config.rate_limit.requests_per_day = 100;
    })
    .await
}

async fn get_from(app: &TestApp, uri: &str, client: &str) -> anyhow::Result<TestResponse> {
    app.request(
        Request::get(uri)
            .header("x-forwarded-for", client)
            .body(Body::empty())?,
    )
    .await
}

#[tokio::test]
async fn admitted_responses_report_remaining_quota() -> anyhow::Result<()> {
    let app = limited_app(2).await?;

    let res = get_from(&app, "/search", "203.0.113.7").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.header("x-ratelimit-limit"), Some("2"));
    assert_eq!(res.header("x-ratelimit-remaining"), Some("1"));
    assert!(res
        .header("x-ratelimit-reset")
        .is_some_and(|r| r.parse::<i64>().is_ok()));
    Ok(())
}

#[tokio::test]
async fn over_limit_client_gets_429() -> anyhow::Result<()> {
    let app = limited_app(2).await?;

    for _ in 0..2 {
        let res = get_from(&app, "/search", "203.0.113.7").await?;
        assert_eq!(res.status, StatusCode::OK);
    }

    let res = get_from(&app, "/extension/directus-extension-dark-theme", "203.0.113.7").await?;
    assert_eq!(res.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(res.header("x-ratelimit-remaining"), Some("0"));
    assert!(res
        .header("retry-after")
        .and_then(|v| v.parse::<i64>().ok())
        .is_some_and(|secs| secs > 0));
    assert!(res.header("x-request-id").is_some());

    let body = res.json()?;
    assert_eq!(body["error"], "Rate limit exceeded");
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.contains("2 requests per hour")));
    Ok(())
}

#[tokio::test]
async fn clients_do_not_share_quota() -> anyhow::Result<()> {
    let app = limited_app(1).await?;

    assert_eq!(get_from(&app, "/search", "203.0.113.7").await?.status, StatusCode::OK);
    assert_eq!(
        get_from(&app, "/search", "203.0.113.7").await?.status,
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(get_from(&app, "/search", "198.51.100.2").await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn health_is_never_limited() -> anyhow::Result<()> {
    let app = limited_app(1).await?;

    for _ in 0..3 {
        let res = get_from(&app, "/health", "203.0.113.7").await?;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.header("x-ratelimit-limit").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn disabled_by_default() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    for _ in 0..3 {
        let res = get_from(&app, "/search", "203.0.113.7").await?;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.header("x-ratelimit-limit").is_none());
    }
    Ok(())
}
