use client::config::{AppEnv, RuntimeConfig};

use super::*;

async fn serve_api() -> String {
    let state = AppState::new(RuntimeConfig {
        app_env: AppEnv::Development,
        base_url: "http://localhost:8080".to_owned(),
        google_map_api_key: "maps-key".to_owned(),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_routes(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn config_json_is_routed() {
    let base = serve_api().await;
    let doc: RuntimeConfig = reqwest::get(format!("{base}/config.json")).await.unwrap().json().await.unwrap();
    assert_eq!(doc.base_url, "http://localhost:8080");
    assert_eq!(doc.google_map_api_key, "maps-key");
    assert_eq!(doc.app_env, AppEnv::Development);
}

#[tokio::test]
async fn healthz_is_routed() {
    let base = serve_api().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}
