//! GitHub contributions client against a mock GraphQL endpoint

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{contributions_response, github_config};
    use crate::{assert_err, assert_ok};
    use chrono::{Datelike, Utc};
    use portfolio_stats::ApiError;
    use portfolio_stats::config::GithubConfig;
    use portfolio_stats::services::{CommitSource, GithubClient};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_sums_public_and_private_contributions() {
        let server = MockServer::start().await;
        let body = contributions_response(
            40,
            2,
            &[
                ("2026-01-01", 3, Some("FIRST_QUARTILE")),
                ("2026-01-02", 0, None),
            ],
        );

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer ghp_test"))
            .and(body_partial_json(json!({"variables": {"username": "octocat"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        let commits = assert_ok!(client.fetch_commits().await);

        assert_eq!(commits.this_year, 42);
        assert_eq!(commits.calendar.len(), 2);
        assert_eq!(commits.calendar[0].date, "2026-01-01");
        assert_eq!(commits.calendar[0].count, 3);
        assert_eq!(commits.calendar[0].level, "FIRST_QUARTILE");
        assert_eq!(commits.calendar[1].level, "NONE");

        let year_start = commits.year_start.unwrap();
        assert_eq!(year_start, format!("{}-01-01", Utc::now().year()));
        assert!(commits.last_fetched.is_some());
    }

    #[tokio::test]
    async fn test_fetch_flattens_weeks_in_order() {
        let server = MockServer::start().await;
        let body = json!({
            "data": {"user": {"contributionsCollection": {
                "totalCommitContributions": 5,
                "restrictedContributionsCount": 0,
                "contributionCalendar": {"weeks": [
                    {"contributionDays": [
                        {"date": "2026-01-01", "contributionCount": 1, "contributionLevel": "FIRST_QUARTILE"}
                    ]},
                    {"contributionDays": [
                        {"date": "2026-01-08", "contributionCount": 4, "contributionLevel": "FOURTH_QUARTILE"},
                        {"date": "2026-01-09", "contributionCount": 0, "contributionLevel": "NONE"}
                    ]}
                ]}
            }}}
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        let commits = assert_ok!(client.fetch_commits().await);

        let dates: Vec<_> = commits.calendar.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-01-01", "2026-01-08", "2026-01-09"]);
        assert_eq!(commits.this_year, 5);
    }

    #[tokio::test]
    async fn test_http_error_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        let err = assert_err!(client.fetch_commits().await);
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_graphql_errors_are_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "Could not resolve to a User with the login of 'octocat'."}]
            })))
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        let err = assert_err!(client.fetch_commits().await);
        assert!(err.to_string().contains("GraphQL"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        assert!(matches!(
            client.fetch_commits().await,
            Err(ApiError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_user_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": null}})))
            .mount(&server)
            .await;

        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        assert!(client.fetch_commits().await.is_err());
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = GithubConfig {
            token: String::new(),
            ..github_config(&server.uri())
        };
        let client = assert_ok!(GithubClient::new(&config));
        let err = assert_err!(client.fetch_commits().await);
        assert!(matches!(err, ApiError::Config(_)));

        let config = GithubConfig {
            username: String::new(),
            ..github_config(&server.uri())
        };
        let client = assert_ok!(GithubClient::new(&config));
        assert!(matches!(
            client.fetch_commits().await,
            Err(ApiError::Config(_))
        ));
    }
}
