//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN};
use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers;
use super::middleware::{panic_response, status_logging_middleware};
use super::routes::create_routes;
use super::state::AppState;

/// CORS 预检缓存时间
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 前端构建产物目录
    pub frontend_path: PathBuf,
    /// 允许的跨域来源，None 表示允许所有来源
    pub frontend_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            frontend_path: PathBuf::from("./frontend/build"),
            frontend_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_frontend(mut self, path: impl Into<PathBuf>, origin: Option<String>) -> Self {
        self.frontend_path = path.into();
        self.frontend_origin = origin.filter(|o| !o.is_empty());
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn router(&self) -> Router {
        let routes = mount_frontend(create_routes(), &self.config.frontend_path);
        let cors = cors_layer(self.config.frontend_origin.as_deref());

        with_middleware(routes.with_state(self.state.clone()), cors)
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

/// 挂载前端：目录存在时托管静态文件，未命中路径回退到 index.html；
/// 否则只在根路径返回纯文本占位
fn mount_frontend(routes: Router<Arc<AppState>>, dir: &Path) -> Router<Arc<AppState>> {
    if dir.is_dir() {
        info!(path = %dir.display(), "Serving frontend build");
        let index = ServeFile::new(dir.join("index.html"));
        routes.fallback_service(ServeDir::new(dir).fallback(index))
    } else {
        warn!(path = %dir.display(), "Frontend build not found");
        routes.route("/", get(handlers::backend_running))
    }
}

/// CORS 配置
///
/// 未配置来源时允许所有来源，仅适用于开发环境
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .max_age(CORS_MAX_AGE);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin).allow_credentials(true),
        Some(Err(e)) => {
            warn!(error = %e, "Invalid frontend origin, allowing all origins");
            base.allow_origin(Any)
        }
        None => {
            warn!("FRONTEND_ORIGIN not set, allowing all origins (development only)");
            base.allow_origin(Any)
        }
    }
}

/// 中间件栈（由内到外）：panic 恢复、状态码日志、访问日志、CORS
fn with_middleware(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(status_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    struct TestApp {
        router: Router,
        state: Arc<AppState>,
    }

    fn test_app(config: ServerConfig) -> TestApp {
        let server = HttpServer::new(config, AppState::in_memory());
        TestApp {
            router: server.router(),
            state: server.state.clone(),
        }
    }

    fn api_app() -> TestApp {
        test_app(ServerConfig::default().with_frontend("/nonexistent/vendo-build", None))
    }

    async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(router, request).await
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(router, request).await
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    // ------------------------------------------------------------------
    // Intake
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_subscribe_twice_any_casing_stores_one() {
        let app = api_app();

        let (status, body) =
            post_json(&app.router, "/api/subscribe", json!({"email": "Ann@Example.com"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "subscribed"}));

        let (status, _) =
            post_json(&app.router, "/api/subscribe", json!({"email": "ann@example.COM"})).await;
        assert_eq!(status, StatusCode::OK);

        let subscribers = app.state.subscriber_repo.find_all().await.unwrap();
        assert_eq!(subscribers.len(), 1);
        assert_eq!(subscribers[0].email.as_str(), "ann@example.com");
    }

    #[tokio::test]
    async fn test_subscribe_invalid_email_is_400() {
        let app = api_app();
        let (status, body) =
            post_json(&app.router, "/api/subscribe", json!({"email": "nope"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("email"));
        assert_eq!(app.state.subscriber_repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = api_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/subscribe")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_contact_missing_field_is_400_and_not_stored() {
        let app = api_app();
        let (status, body) = post_json(
            &app.router,
            "/api/contact",
            json!({"name": "Ada", "email": "ada@example.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("message"));
        assert!(app.state.contact_repo.find_all().await.unwrap().is_empty());
        assert!(app.state.audit_log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_received() {
        let app = api_app();
        let (status, body) = post_json(
            &app.router,
            "/api/contact",
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "received"}));
        assert_eq!(app.state.contact_repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_demo_missing_company_is_400() {
        let app = api_app();
        let (status, _) = post_json(
            &app.router,
            "/api/demo",
            json!({"name": "Ada", "email": "ada@example.com", "company": ""}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(app.state.demo_repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_queued_with_optional_fields() {
        let app = api_app();
        let (status, body) = post_json(
            &app.router,
            "/api/demo",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "company": "Engines Ltd",
                "size": "11-50"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "queued"}));

        let demos = app.state.demo_repo.find_all().await.unwrap();
        assert_eq!(demos.len(), 1);
        assert_eq!(demos[0].size.as_deref(), Some("11-50"));
        assert_eq!(demos[0].message, None);
    }

    #[tokio::test]
    async fn test_each_intake_writes_one_audit_entry() {
        let app = api_app();
        post_json(&app.router, "/api/subscribe", json!({"email": "a@example.com"})).await;
        post_json(
            &app.router,
            "/api/contact",
            json!({"name": "A", "email": "a@example.com", "message": "m"}),
        )
        .await;
        post_json(
            &app.router,
            "/api/demo",
            json!({"name": "A", "email": "a@example.com", "company": "C"}),
        )
        .await;
        post_json(&app.router, "/api/subscribe", json!({"email": "bad"})).await;

        let entries = app.state.audit_log.list().await.unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.event_name()).collect();
        assert_eq!(names, ["subscribe", "contact", "demo_request"]);
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_subscribes_are_all_stored() {
        let app = api_app();
        let n = 50;
        let tasks: Vec<_> = (0..n)
            .map(|i| {
                let router = app.router.clone();
                tokio::spawn(async move {
                    let (status, _) = post_json(
                        &router,
                        "/api/subscribe",
                        json!({"email": format!("user{i}@example.com")}),
                    )
                    .await;
                    assert_eq!(status, StatusCode::OK);
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(app.state.subscriber_repo.count().await.unwrap(), n);
        assert_eq!(app.state.audit_log.list().await.unwrap().len(), n);
    }

    // ------------------------------------------------------------------
    // Vendors / RFP
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_vendor_search() {
        let app = api_app();

        let (status, body) = get_json(&app.router, "/api/vendors/search?q=kyc").await;
        assert_eq!(status, StatusCode::OK);
        let vendors = body.as_array().unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0]["name"], "KYCify");
        assert_eq!(vendors[0]["domain"], "KYC / Identity");

        let (_, body) = get_json(&app.router, "/api/vendors/search?q=").await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["v-001", "v-002", "v-003"]);

        let (_, body) = get_json(&app.router, "/api/vendors/search").await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = get_json(&app.router, "/api/vendors/search?q=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_vendor_search_repeated_query_uses_first() {
        let app = api_app();

        let (status, body) = get_json(&app.router, "/api/vendors/search?q=kyc&q=pay").await;
        assert_eq!(status, StatusCode::OK);
        let vendors = body.as_array().unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0]["name"], "KYCify");

        let (status, body) =
            get_json(&app.router, "/api/vendors/search?page=2&q=infra&extra").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "v-003");
    }

    #[tokio::test]
    async fn test_generate_rfp() {
        let app = api_app();
        let (status, body) = post_json(
            &app.router,
            "/api/rfps/generate",
            json!({"goal": "Build a mobile app"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let draft = body["draft"].as_str().unwrap();
        assert!(draft.contains("Goal:\nBuild a mobile app\n"));
        assert!(draft.contains("Scope:\n(not specified)\n"));
        assert!(draft.contains("Estimated Budget:\n(not specified)\n"));

        let entries = app.state.audit_log.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event_name(), "rfp_generated");
    }

    #[tokio::test]
    async fn test_generate_rfp_without_goal_is_400() {
        let app = api_app();
        let (status, body) =
            post_json(&app.router, "/api/rfps/generate", json!({"scope": "x"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("goal"));
    }

    #[tokio::test]
    async fn test_ping() {
        let app = api_app();
        let (status, body) = get_json(&app.router, "/api/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    // ------------------------------------------------------------------
    // Frontend / CORS
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_placeholder_when_frontend_missing() {
        let app = api_app();
        let (status, text) = get_text(&app.router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "VendoAI backend running");

        let (status, _) = get_text(&app.router, "/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_spa_fallback_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>landing</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();

        let app = test_app(ServerConfig::default().with_frontend(dir.path(), None));

        let (status, text) = get_text(&app.router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "<html>landing</html>");

        let (status, text) = get_text(&app.router, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "console.log('app')");

        let (status, text) = get_text(&app.router, "/pricing/enterprise").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "<html>landing</html>");

        // API 路由优先于静态回退
        let (status, _) = get_text(&app.router, "/api/ping").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_by_default() {
        let app = api_app();
        let request = Request::builder()
            .uri("/api/ping")
            .header(ORIGIN, "http://anywhere.test")
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
        assert!(response
            .headers()
            .get("access-control-allow-credentials")
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_uses_configured_origin() {
        let app = test_app(ServerConfig::default().with_frontend(
            "/nonexistent/vendo-build",
            Some("http://localhost:3000".to_string()),
        ));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/subscribe")
            .header(ORIGIN, "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        let headers = response.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            HeaderValue::from_static("http://localhost:3000")
        );
        assert_eq!(
            headers["access-control-allow-credentials"],
            HeaderValue::from_static("true")
        );
    }
}
