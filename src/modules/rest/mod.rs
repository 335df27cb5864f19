// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::common::error::ErrorCapture;
use crate::modules::common::log::Tracing;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::handler::error_handler;
use crate::modules::error::SukiResult;
use crate::modules::metrics::endpoint::PrometheusEndpoint;
use crate::modules::{settings::cli::SETTINGS, utils::shutdown::shutdown_signal};

use super::error::ApiErrorResponse;
use crate::raise_error;
use api::create_openapi_service;
use http::HeaderValue;
use native_db::Database;
use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Compression, SetHeader};
use poem::{middleware::Cors, Endpoint, EndpointExt, Route, Server};
use poem_openapi::ContactObject;
use std::sync::Arc;
use std::time::Duration;

pub mod api;

pub type ApiResult<T, E = ApiErrorResponse> = std::result::Result<T, E>;

const DESCRIPTION: &str = r#"
    Suki is the backend for a personal portfolio site.

    - Records status check-ins from client probes in an embedded store.
    - Relays contact-form submissions to the site operator's inbox over authenticated SMTP.
    - Serves interactive API consoles under /api-docs and Prometheus metrics under /metrics.
"#;

// The frontend is served from arbitrary origins, so every response carries a
// wildcard CORS grant, including errors and panics produced above the router.
fn cors_headers() -> SetHeader {
    SetHeader::new()
        .overriding(
            http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        )
        .overriding(
            http::header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        )
}

fn build_route(store: Arc<Database<'static>>) -> impl Endpoint<Output = poem::Response> {
    let api_service = create_openapi_service(store)
        .description(DESCRIPTION)
        .contact(ContactObject::new().email("hello@sukiportfolio.com"))
        .summary("Backend for the Suki portfolio site");

    let swagger = api_service.swagger_ui();
    let redoc = api_service.redoc();
    let scalar = api_service.scalar();
    let spec_json = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();
    let openapi_explorer = api_service.openapi_explorer();

    let open_api_route = Route::new()
        .nest_no_strip("/api", api_service)
        .with(ErrorCapture)
        .with(Tracing);

    let cors = Cors::new()
        .allow_credentials(true)
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "HEAD"])
        .allow_headers(vec!["Content-Type", "Authorization"])
        .max_age(SETTINGS.suki_cors_max_age);

    Route::new()
        .nest("/api-docs/swagger", swagger)
        .nest("/api-docs/redoc", redoc)
        .nest("/api-docs/explorer", openapi_explorer)
        .nest("/api-docs/scalar", scalar)
        .nest("/api-docs/spec.json", spec_json)
        .nest("/api-docs/spec.yaml", spec_yaml)
        .nest("/metrics", PrometheusEndpoint)
        .nest_no_strip("/api", open_api_route)
        .catch_all_error(error_handler)
        .with(cors)
        .with_if(SETTINGS.suki_http_compression_enabled, Compression::new())
        .with(CatchPanic::new())
        .with(cors_headers())
}

pub async fn start_http_server(store: Arc<Database<'static>>) -> SukiResult<()> {
    let listener = TcpListener::bind((
        SETTINGS.suki_bind_ip.clone().unwrap_or("0.0.0.0".into()),
        SETTINGS.suki_http_port as u16,
    ));

    let route = build_route(store);

    let server = Server::new(listener)
        .name("Suki Backend")
        .idle_timeout(Duration::from_secs(60))
        .run_with_graceful_shutdown(route, shutdown_signal(), Some(Duration::from_secs(5)));
    println!(
        "Suki backend is now running on port {}.",
        SETTINGS.suki_http_port
    );
    server
        .await
        .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::database::MODELS;
    use native_db::Builder;
    use poem::http::{header, Method, StatusCode, Uri};
    use poem::Request;
    use serde_json::Value;
    use tempfile::{tempdir, TempDir};

    fn open_store() -> (TempDir, Arc<Database<'static>>) {
        let dir = tempdir().unwrap();
        let store = Arc::new(
            Builder::new()
                .create(&MODELS, dir.path().join("status.db"))
                .unwrap(),
        );
        (dir, store)
    }

    fn get(uri: &'static str) -> Request {
        Request::builder()
            .method(Method::GET)
            .uri(Uri::from_static(uri))
            .finish()
    }

    fn post_json(uri: &'static str, body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri(Uri::from_static(uri))
            .content_type("application/json")
            .body(body.to_string())
    }

    async fn body_json(resp: poem::Response) -> Value {
        let body = resp.into_body().into_string().await.unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_root_greets_and_carries_cors_headers() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route.call(get("/api/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&HeaderValue::from_static("true"))
        );

        let body = body_json(resp).await;
        assert_eq!(body["message"], "Hello World");
    }

    #[tokio::test]
    async fn test_status_roundtrip_through_router() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route
            .call(post_json("/api/status", r#"{"client_name":"uptime-probe"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let created = body_json(resp).await;
        assert_eq!(created["client_name"], "uptime-probe");
        assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(created["timestamp"]
            .as_str()
            .is_some_and(|ts| ts.ends_with('Z')));

        let resp = route.call(get("/api/status")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let listed = body_json(resp).await;
        let items = listed.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["client_name"], "uptime-probe");
        assert_eq!(items[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_status_validation_failures_return_422() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route.call(post_json("/api/status", "{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::InvalidParameter as u32);

        let resp = route
            .call(post_json("/api/status", r#"{"client_name":""}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_contact_without_relay_config_returns_400() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route
            .call(post_json(
                "/api/contact",
                r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );

        let body = body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "SMTP_NOT_CONFIGURED");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_contact_rejects_invalid_email() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route
            .call(post_json(
                "/api/contact",
                r#"{"name":"Ada","email":"not-an-email","message":"Hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_path_gets_error_shape_and_cors() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let resp = route.call(get("/api/nope")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        let body = body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::ResourceNotFound as u32);
    }

    #[tokio::test]
    async fn test_method_not_allowed_on_status() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let req = Request::builder()
            .method(Method::DELETE)
            .uri(Uri::from_static("/api/status"))
            .finish();
        let resp = route.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(Uri::from_static("/api/contact"))
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .finish();
        let resp = route.call(req).await.unwrap();
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_metrics_endpoint_exposed() {
        let (_dir, store) = open_store();
        let route = build_route(store);

        route.call(get("/api/")).await.unwrap();
        let resp = route.call(get("/metrics")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().into_string().await.unwrap();
        assert!(body.contains("suki_request_total_by_method_and_operation"));
    }
}
