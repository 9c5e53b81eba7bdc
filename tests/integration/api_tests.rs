//! HTTP surface end to end with a mock GitHub upstream

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{app_config, contributions_response, github_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use portfolio_stats::server::server::HttpServer;
    use portfolio_stats::server::state::AppState;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BROWSER: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 Safari/605.1.15";

    #[actix_web::test]
    async fn test_refresh_then_stats_reflects_commits() {
        let github = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer ghp_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contributions_response(
                120,
                30,
                &[("2026-04-01", 6, Some("THIRD_QUARTILE"))],
            )))
            .expect(1)
            .mount(&github)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = app_config(dir.path());
        config.github = github_config(&github.uri());
        config.security.commits_api_key = "refresh-key".to_string();

        let state = AppState::build(config).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/commits/refresh")
            .insert_header(("x-api-key", "refresh-key"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["commits_this_year"], 150);
        assert_eq!(body["message"], "Commits refreshed");

        let res = test::call_service(&app, test::TestRequest::get().uri("/stats").to_request()).await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["commits"]["this_year"], 150);
        assert_eq!(body["data"]["commits"]["calendar"][0]["level"], "THIRD_QUARTILE");

        assert!(dir.path().join("commits.json").exists());
    }

    #[actix_web::test]
    async fn test_cached_commits_served_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("commits.json"),
            json!({"this_year": 321, "year_start": "2026-01-01", "calendar": []}).to_string(),
        )
        .unwrap();

        let state = AppState::build(app_config(dir.path())).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/stats").to_request()).await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["commits"]["this_year"], 321);
        assert_eq!(body["data"]["commits"]["year_start"], "2026-01-01");
    }

    #[actix_web::test]
    async fn test_visitor_flow_with_forwarded_addresses() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::build(app_config(dir.path())).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let track = |forwarded: &str| {
            test::TestRequest::post()
                .uri("/visitors/track")
                .insert_header(("x-forwarded-for", forwarded.to_string()))
                .insert_header(("user-agent", BROWSER))
                .to_request()
        };

        let body: Value = test::read_body_json(test::call_service(&app, track("203.0.113.10")).await).await;
        assert_eq!(body["tracked"], true);

        // Same client behind a different proxy chain
        let body: Value =
            test::read_body_json(test::call_service(&app, track("203.0.113.10, 10.1.1.1")).await)
                .await;
        assert_eq!(body["tracked"], false);

        let body: Value = test::read_body_json(test::call_service(&app, track("203.0.113.11")).await).await;
        assert_eq!(body, json!({"total": 2, "today": 2, "tracked": true}));

        let res = test::call_service(&app, test::TestRequest::get().uri("/visitors").to_request()).await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"total": 2, "today": 2, "tracked": false}));
    }

    #[actix_web::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = app_config(dir.path());
        config.server.cors.allowed_origins = vec!["https://portfolio.example".to_string()];

        let state = AppState::build(config).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/stats")
            .insert_header(("origin", "https://portfolio.example"))
            .insert_header(("access-control-request-method", "GET"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
        assert_eq!(
            res.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("https://portfolio.example")
        );
    }
}
