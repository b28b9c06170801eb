use axum::body::to_bytes;
use client::config::AppEnv;

use super::*;

fn make_state() -> AppState {
    AppState::new(RuntimeConfig {
        app_env: AppEnv::Production,
        base_url: "https://api.example.test".to_owned(),
        google_map_api_key: "maps-key".to_owned(),
    })
}

#[tokio::test]
async fn runtime_config_serves_camel_case_document() {
    let response = runtime_config(State(make_state())).await.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        doc,
        serde_json::json!({
            "appEnv": "production",
            "baseUrl": "https://api.example.test",
            "googleMapApiKey": "maps-key",
        })
    );
}
