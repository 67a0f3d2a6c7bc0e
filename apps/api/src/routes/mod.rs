pub mod cv;
pub mod health;
pub mod info;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::background::handlers as background;
use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Static info
        .route("/api/info", get(info::handle_info))
        .route("/api/download-cv", get(cv::handle_download_cv))
        .route("/api/cv/options", get(cv::handle_cv_options))
        // Contact form relay
        .route("/api/contact", post(contact::handle_contact))
        .route(
            "/api/contact/inquiry-types",
            get(contact::handle_inquiry_types),
        )
        // Decorative background layouts
        .route(
            "/api/background/:variant",
            get(background::handle_background),
        )
        .nest_service("/public", public)
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::contact::controller::tests::FakeDispatcher;
    use crate::contact::dispatch::{EmailDispatcher, EMAILJS_SEND_URL};
    use crate::models::profile::Profile;

    fn test_state(public_dir: &Path, mailer: Arc<dyn EmailDispatcher>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                public_dir: public_dir.to_path_buf(),
                cv_path: public_dir.join("cv.pdf"),
                emailjs: None,
                emailjs_api_url: EMAILJS_SEND_URL.to_string(),
            },
            profile: Profile::owner(),
            mailer,
        }
    }

    fn app(public_dir: &Path) -> Router {
        build_router(test_state(public_dir, Arc::new(FakeDispatcher::succeeding())))
    }

    async fn get_path(router: Router, path: &str) -> Response {
        router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(router: Router, path: &str, body: Value) -> Response {
        router
            .oneshot(
                Request::post(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_form() -> Value {
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "inquiryType": "collaboration",
            "message": "Let's talk engines."
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let response = get_path(app(dir.path()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_info_returns_profile() {
        let dir = tempfile::tempdir().unwrap();
        let response = get_path(app(dir.path()), "/api/info").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(!body["name"].as_str().unwrap().is_empty());
        assert!(!body["email"].as_str().unwrap().is_empty());
        assert!(body["social"]["github"].is_string());
        assert!(body["social"]["linkedin"].is_string());
    }

    #[tokio::test]
    async fn test_download_cv_sends_attachment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF-1.4 test").unwrap();

        let response = get_path(app(dir.path()), "/api/download-cv").await;
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("TheophilusAE_CV.pdf"));
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_download_cv_missing_file_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let response = get_path(app(dir.path()), "/api/download-cv").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Could not download the file.");
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_public_assets_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), "hi").unwrap();

        let response = get_path(app(dir.path()), "/public/hello.txt").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"hi");
    }

    #[tokio::test]
    async fn test_cv_options_lists_both_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let body = json_body(get_path(app(dir.path()), "/api/cv/options").await).await;
        let types: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["creative", "ats"]);
    }

    #[tokio::test]
    async fn test_contact_success() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = Arc::new(FakeDispatcher::succeeding());
        let router = build_router(test_state(dir.path(), dispatcher.clone()));

        let response = post_json(router, "/api/contact", valid_form()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["submission_id"].is_string());
        assert_eq!(dispatcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_contact_validation_failure_skips_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = Arc::new(FakeDispatcher::succeeding());
        let router = build_router(test_state(dir.path(), dispatcher.clone()));

        let response = post_json(
            router,
            "/api/contact",
            json!({ "fullName": "  ", "email": "not-an-email" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let fields = json_body(response).await["error"]["fields"].clone();
        assert_eq!(fields["email"], "Invalid email format");
        assert_eq!(fields["fullName"], "Full name is required");
        assert_eq!(fields["inquiryType"], "Please select inquiry type");
        assert_eq!(fields["message"], "Message is required");
        assert!(fields.get("company").is_none());
        assert_eq!(dispatcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_contact_dispatch_failure_is_bad_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = Arc::new(FakeDispatcher::failing());
        let router = build_router(test_state(dir.path(), dispatcher.clone()));

        let response = post_json(router, "/api/contact", valid_form()).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "DISPATCH_ERROR");
        assert_eq!(dispatcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_inquiry_types() {
        let dir = tempfile::tempdir().unwrap();
        let body = json_body(get_path(app(dir.path()), "/api/contact/inquiry-types").await).await;
        let options = body.as_array().unwrap();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0]["value"], "internship");
    }

    #[tokio::test]
    async fn test_background_particles() {
        let dir = tempfile::tempdir().unwrap();
        let body = json_body(get_path(app(dir.path()), "/api/background/particles").await).await;
        assert_eq!(body["variant"], "particles");
        assert_eq!(body["particles"].as_array().unwrap().len(), 80);
        assert_eq!(body["particles"][4]["hue"], "purple");
    }

    #[tokio::test]
    async fn test_background_unknown_variant_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let body = json_body(get_path(app(dir.path()), "/api/background/aurora").await).await;
        assert_eq!(body["variant"], "default");
        assert!(body["gradient"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = get_path(app(dir.path()), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }
}
