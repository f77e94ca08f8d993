// API Integration Tests
//
// Purpose: exercise every route through the router without binding a socket
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use edp_curriculum::{create_router, AppState, ServerConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app
    fn create_test_app() -> axum::Router {
        let config = ServerConfig {
            analyzer_url: "https://analyzer.test".to_string(),
            ..ServerConfig::default()
        };
        create_router(AppState::new(config))
    }

    // Helper: Issue a GET request
    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // Helper: Read response body as text
    async fn text_response(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body was not UTF-8")
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        serde_json::from_str(&text_response(response).await).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Unit Documents
    // =========================================================================

    #[tokio::test]
    async fn test_list_units() {
        let response = get("/api/units").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let units = body.as_array().unwrap();
        assert_eq!(units.len(), 8);
        assert_eq!(units[3]["title"], "Financial Planning");
        assert_eq!(units[3]["section_count"], 4);
    }

    #[tokio::test]
    async fn test_get_unit() {
        let response = get("/api/units/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["unit"], 1);
        assert_eq!(body["heading"], "Unit 1: Introduction to Entrepreneurship");

        let sections = body["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0]["title"], "Section 1: Entrepreneurial Mindset");
        assert!(sections[0]["body"]
            .as_str()
            .unwrap()
            .starts_with("Entrepreneurship is about identifying opportunities"));
        assert!(sections[0]["image_ref"].is_string());
    }

    #[tokio::test]
    async fn test_get_unknown_unit() {
        let response = get("/api/units/9").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["title"], "Unknown Unit");
        assert_eq!(body["sections"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_unit_defaults_to_one() {
        let body = json_response(get("/api/units/intro").await).await;
        assert_eq!(body["unit"], 1);
        assert_eq!(body["title"], "Introduction to Entrepreneurship");
    }

    #[tokio::test]
    async fn test_unit_markdown() {
        let response = get("/api/units/3/markdown").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );

        let md = text_response(response).await;
        assert!(md.contains("# Unit 3: Business Model Development"));
        assert!(md.contains("## Section 3: Customer Segments"));
    }

    // =========================================================================
    // Section 3: Single Sections
    // =========================================================================

    #[tokio::test]
    async fn test_get_section() {
        let response = get("/api/units/4/sections/6").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["title"], "Section 6: Topic");
        assert!(body["body"].as_str().unwrap().starts_with("Financial planning"));
        assert!(body["image_ref"].is_string());
    }

    #[tokio::test]
    async fn test_section_rejects_non_positive() {
        let response = get("/api/units/2/sections/0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("section"));

        let response = get("/api/units/-1/sections/2").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_section_rejects_non_numeric() {
        let response = get("/api/units/2/sections/first").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // =========================================================================
    // Section 4: Navigation and Program
    // =========================================================================

    #[tokio::test]
    async fn test_navigation() {
        let body = json_response(get("/api/navigation?active=2").await).await;
        assert_eq!(body["active_unit"], 2);

        let tabs = body["tabs"].as_array().unwrap();
        assert_eq!(tabs.len(), 8);
        assert_eq!(tabs[1]["active"], true);
        assert_eq!(tabs[0]["active"], false);

        let progress = body["progress"].as_array().unwrap();
        assert_eq!(progress[0]["tone"], "High");
        assert_eq!(progress[7]["tone"], "Low");
    }

    #[tokio::test]
    async fn test_navigation_without_active_defaults_to_one() {
        let body = json_response(get("/api/navigation").await).await;
        assert_eq!(body["active_unit"], 1);
    }

    #[tokio::test]
    async fn test_program() {
        let body = json_response(get("/api/program?active=5").await).await;
        assert_eq!(body["title"], "Entrepreneurship Development Program");
        assert_eq!(body["start"]["href"], "/unit/5");
        assert_eq!(body["slides"].as_array().unwrap().len(), 4);
    }

    // =========================================================================
    // Section 5: HTML Pages
    // =========================================================================

    #[tokio::test]
    async fn test_unit_page() {
        let response = get("/unit/2").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert!(html.contains("Unit 2: Market Research and Validation"));
        assert!(html.contains("Section 5: Validation Techniques"));
        assert!(html.contains("Home Unit 8"));
        assert!(html.contains("Student Analyzer"));
    }

    #[tokio::test]
    async fn test_unit_page_unknown_unit() {
        let response = get("/unit/42").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert!(html.contains("Unit 42: Unknown Unit"));
    }

    #[tokio::test]
    async fn test_program_page() {
        let response = get("/edp").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert!(html.contains("Entrepreneurship Development Program"));
        assert!(html.contains("Start Learning Unit 1"));
    }
}
