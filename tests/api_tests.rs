//! Router-level tests for the HTTP API.
//!
//! The remote monitor URL points at a closed local port, so every test
//! exercises the degraded path deterministically and offline.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use frutiger_monitor::web::{create_app, AppState, WebConfig};
use frutiger_monitor::{MetricsCollector, SensorCache, TempResolver};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

const DEAD_URL: &str = "http://127.0.0.1:9/data.json";

fn test_app() -> axum::Router {
    test_app_with(DEAD_URL)
}

fn test_app_with(libre_url: &str) -> axum::Router {
    let config = WebConfig::new("127.0.0.1", 5000).with_libre_url(libre_url);
    let resolver = Arc::new(TempResolver::new(SensorCache::new(&config.libre_url)));
    let state = AppState {
        collector: Arc::new(Mutex::new(MetricsCollector::new(resolver.clone()))),
        resolver,
        port: config.port,
    };
    create_app(&config, state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_port_endpoint() {
    let (status, body) = get(test_app(), "/api/port").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["port"], 5000);
}

/// Minimal loopback HTTP stub serving one canned JSON body per request.
async fn spawn_stub(body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/data.json", listener.local_addr().unwrap());

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    url
}

#[tokio::test]
async fn test_libre_debug_reachable_remote() {
    let body = r#"{"data":{"SensorId":"","Value":"","Children":[
        {"SensorId":"/amdcpu/0/temperature/2","Value":"61,4 °C","Children":[]},
        {"SensorId":"/nvme/0/temperature/0","Value":"42,5°C","Children":[]}
    ]}}"#;
    let url = spawn_stub(body).await;

    let (status, body) = get(test_app_with(&url), "/api/libre-debug").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["libre_hw_connected"], true);
    assert_eq!(body["cpu_temp"], 61.4);
    assert_eq!(body["disk_temp"], 42.5);
}

#[tokio::test]
async fn test_libre_debug_unreachable_remote() {
    let (status, body) = get(test_app(), "/api/libre-debug").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
    assert_eq!(body["libre_hw_connected"], false);
    assert_eq!(body["url"], DEAD_URL);
}

#[tokio::test]
async fn test_metrics_endpoint_shape() {
    let (status, body) = get(test_app(), "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);

    for key in ["cpu", "gpu", "ram", "disk", "network", "processes"] {
        assert!(body.get(key).is_some(), "missing key {key}");
    }

    let cpu_usage = body["cpu"]["usage"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&cpu_usage));

    // Temperatures degrade to >= 0, never to an error.
    assert!(body["cpu"]["temperature"].as_f64().unwrap() >= 0.0);
    assert!(body["disk"]["temperature"].as_f64().unwrap() >= 0.0);

    let processes = body["processes"].as_array().unwrap();
    assert!(!processes.is_empty() && processes.len() <= 12);
    for process in processes {
        assert!(process["name"].is_string());
        assert!(process["cpu"].as_f64().unwrap() <= 100.0);
        assert!(process["ram"].as_f64().unwrap() <= 100.0);
        assert_eq!(process["gpu"], 0.0);
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
