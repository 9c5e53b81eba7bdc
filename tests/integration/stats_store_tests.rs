//! Stats store with a real GitHub client, cache file and connected sinks

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::fixtures::{contributions_response, github_config};
    use crate::common::{CollectingSink, StaticSource};
    use portfolio_stats::core::broadcast::{BroadcastHub, StatsSink};
    use portfolio_stats::services::{GithubClient, StatsStore};
    use serde_json::{Value, json};
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HOUR: Duration = Duration::from_secs(3600);

    async fn github_store(server: &MockServer, cache: &Path) -> Arc<StatsStore> {
        let client = assert_ok!(GithubClient::new(&github_config(&server.uri())));
        Arc::new(
            StatsStore::new(
                Arc::new(BroadcastHub::new()),
                Arc::new(client),
                cache.to_path_buf(),
                HOUR,
            )
            .await,
        )
    }

    fn object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn test_refresh_persists_and_reloads() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contributions_response(
                10,
                3,
                &[("2026-02-01", 2, Some("SECOND_QUARTILE"))],
            )))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("nested").join("commits.json");

        let store = github_store(&server, &cache).await;
        assert_eq!(store.refresh_commit_stats().await, 13);
        assert_eq!(store.get()["commits"]["this_year"], 13);

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&cache).unwrap()).unwrap();
        assert_eq!(on_disk["this_year"], 13);
        assert_eq!(on_disk["calendar"][0]["level"], "SECOND_QUARTILE");
        assert!(!cache.with_extension("json.tmp").exists());

        // A fresh process starts from the cached value
        let restarted = StatsStore::new(
            Arc::new(BroadcastHub::new()),
            StaticSource::failing(),
            cache.clone(),
            HOUR,
        )
        .await;
        assert_eq!(restarted.commits_total(), 13);
        assert_eq!(restarted.get()["commits"]["calendar"][0]["date"], "2026-02-01");
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_cache_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("commits.json");
        std::fs::write(&cache, r#"{"this_year": 7, "calendar": []}"#).unwrap();

        let store = github_store(&server, &cache).await;
        assert_eq!(store.commits_total(), 7);
        assert_eq!(store.refresh_commit_stats().await, 7);

        let on_disk = std::fs::read_to_string(&cache).unwrap();
        assert_eq!(on_disk, r#"{"this_year": 7, "calendar": []}"#);
    }

    #[tokio::test]
    async fn test_refresh_broadcasts_to_attached_clients() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(
            Arc::new(BroadcastHub::new()),
            StaticSource::ok(99),
            dir.path().join("commits.json"),
            HOUR,
        )
        .await;

        let sink = CollectingSink::new();
        assert_ok!(store.attach(Arc::clone(&sink) as Arc<dyn StatsSink>).await);
        store.refresh_commit_stats().await;

        let frames = sink.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["type"], "stats");
        assert_eq!(frames[0]["data"]["commits"]["this_year"], 0);
        assert_eq!(frames[1]["data"]["commits"]["this_year"], 99);
    }

    #[tokio::test]
    async fn test_update_reaches_every_client_and_detach_stops_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(
            Arc::new(BroadcastHub::new()),
            StaticSource::failing(),
            dir.path().join("commits.json"),
            HOUR,
        )
        .await;

        let first = CollectingSink::new();
        let second = CollectingSink::new();
        let first_id = assert_ok!(store.attach(Arc::clone(&first) as Arc<dyn StatsSink>).await);
        assert_ok!(store.attach(Arc::clone(&second) as Arc<dyn StatsSink>).await);
        assert_eq!(store.hub().connection_count(), 2);

        store
            .update(object(json!({"developer": {"status": "online"}})))
            .await;
        store.detach(&first_id);
        store
            .update(object(json!({"developer": {"status": "idle"}})))
            .await;

        let first = first.frames();
        let second = second.frames();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
        assert_eq!(first[1]["data"]["developer"]["status"], "online");
        assert_eq!(second[2]["data"]["developer"]["status"], "idle");
        // Sibling fields survive a one-level merge
        assert!(second[2]["data"]["developer"]["activities"].is_array());
    }

    #[tokio::test]
    async fn test_polling_refreshes_immediately_and_stops_on_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(
            StatsStore::new(
                Arc::new(BroadcastHub::new()),
                StaticSource::ok(12),
                dir.path().join("commits.json"),
                HOUR,
            )
            .await,
        );

        let shutdown = CancellationToken::new();
        let handle = Arc::clone(&store).start_commit_polling(shutdown.clone());

        for _ in 0..50 {
            if store.commits_total() == 12 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(store.commits_total(), 12);

        shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("poller should stop promptly")
            .unwrap();
    }
}
