//! Visitor counting on the migrated schema

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use chrono::NaiveDate;
    use portfolio_stats::services::{VisitorCounts, VisitorStore, visitors::hash_ip};

    const FIREFOX: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:126.0) Gecko/20100101 Firefox/126.0";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_one_count_per_address_per_day() {
        let db = TestDatabase::new().await;
        let store = VisitorStore::new(db.db(), "salt");

        let first = assert_ok!(store.track_on("203.0.113.5", FIREFOX, day(1)).await);
        assert_eq!(first, VisitorCounts { total: 1, today: 1, tracked: true });

        let repeat = assert_ok!(store.track_on("203.0.113.5", FIREFOX, day(1)).await);
        assert_eq!(repeat, VisitorCounts { total: 1, today: 1, tracked: false });

        let next_day = assert_ok!(store.track_on("203.0.113.5", FIREFOX, day(2)).await);
        assert_eq!(next_day, VisitorCounts { total: 2, today: 1, tracked: true });

        let other = assert_ok!(store.track_on("203.0.113.6", FIREFOX, day(2)).await);
        assert_eq!(other, VisitorCounts { total: 3, today: 2, tracked: true });

        let on_first = assert_ok!(store.counts_on(day(1)).await);
        assert_eq!(on_first, VisitorCounts { total: 3, today: 1, tracked: false });
    }

    #[tokio::test]
    async fn test_automated_agents_are_not_counted() {
        let db = TestDatabase::new().await;
        let store = VisitorStore::new(db.db(), "salt");

        for agent in ["", "curl/8.5.0", "python-requests/2.31", "Googlebot/2.1", "HeadlessChrome"] {
            let counts = assert_ok!(store.track_on("198.51.100.1", agent, day(3)).await);
            assert!(!counts.tracked, "{agent:?} should not be tracked");
            assert_eq!(counts.total, 0);
        }
    }

    #[tokio::test]
    async fn test_concurrent_tracking_counts_once() {
        let db = TestDatabase::new().await;
        let store = std::sync::Arc::new(VisitorStore::new(db.db(), "salt"));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.track_on("192.0.2.44", FIREFOX, day(4)).await
            }));
        }

        let mut tracked = 0;
        for handle in handles {
            if assert_ok!(handle.await.unwrap()).tracked {
                tracked += 1;
            }
        }
        assert_eq!(tracked, 1);
        assert_eq!(assert_ok!(store.counts_on(day(4)).await).today, 1);
    }

    #[test]
    fn test_hash_depends_on_salt() {
        let a = hash_ip("one", "203.0.113.5");
        let b = hash_ip("two", "203.0.113.5");
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(!a.contains("203.0.113.5"));
    }
}
