use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::config::{self, Config};
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let api = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CHAT SESSION (completion proxy + PDF extraction)
        // ========================================
        .route(
            "/api/chat/completion",
            post(handlers::a001_chat_session::complete),
        )
        .route(
            "/api/chat/document",
            post(handlers::a001_chat_session::upload_document)
                .layer(DefaultBodyLimit::max(config.upload.max_bytes)),
        )
        // Только API: статика отдаётся без буферизации тела
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ));

    let app = match config::get_static_dir(config) {
        Some(static_dir) => {
            tracing::info!("Serving frontend from: {}", static_dir.display());
            api.fallback_service(ServeDir::new(static_dir))
        }
        None => api,
    };

    app.layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    fn config_with_static_dir(dir: &std::path::Path) -> Config {
        config::parse_config(&format!(
            r#"
[server]
host = "127.0.0.1"
port = 3000
static_dir = '{}'

[gemini]
api_base = "http://127.0.0.1:1/v1beta"
model = "gemini-2.0-flash"

[upload]
max_bytes = 1024
"#,
            dir.display()
        ))
        .unwrap()
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn test_static_files_bypass_request_logger() {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("app.wasm"), b"wasm bundle").unwrap();

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = configure_routes(&config_with_static_dir(static_dir.path()));

        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");

        let (status, body) = get(&app, "/app.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "wasm bundle");

        let output = logs.contents();
        assert!(output.contains("GET /health -> 200"), "logs: {output}");
        assert!(!output.contains("GET /app.wasm"), "logs: {output}");
    }

    #[tokio::test]
    async fn test_document_route_rejects_missing_file() {
        let static_dir = tempfile::tempdir().unwrap();
        let app = configure_routes(&config_with_static_dir(static_dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat/document")
                    .header("content-type", "multipart/form-data; boundary=X")
                    .body(Body::from("--X--\r\n"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
