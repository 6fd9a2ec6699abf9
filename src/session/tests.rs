//! Session Module Tests
//!
//! ## Test Scopes
//! - **Guard**: Exclusive acquisition and release on drop.
//! - **Accounting**: Cursor and remaining-count bookkeeping across pages.
//! - **Generations**: Pages from a replaced search are rejected.

#[cfg(test)]
mod tests {
    use crate::provider::types::Query;
    use crate::session::guard::InFlightGuard;
    use crate::session::state::PaginationSession;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn query(raw: &str) -> Query {
        Query::parse(raw).unwrap()
    }

    // ============================================================
    // GUARD
    // ============================================================

    #[test]
    fn test_guard_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);

        let first = InFlightGuard::try_acquire(&flag);
        assert!(first.is_some());
        assert!(flag.load(Ordering::SeqCst));

        // Second claim must fail while the first is alive
        assert!(InFlightGuard::try_acquire(&flag).is_none());

        drop(first);
        assert!(!flag.load(Ordering::SeqCst));
        assert!(InFlightGuard::try_acquire(&flag).is_some());
    }

    #[test]
    fn test_guard_released_on_early_return() {
        fn bail_out(flag: &AtomicBool) -> Result<(), &'static str> {
            let _guard = InFlightGuard::try_acquire(flag).ok_or("busy")?;
            Err("failed mid-flight")
        }

        let flag = AtomicBool::new(false);
        assert!(bail_out(&flag).is_err());
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_session_guards_are_independent() {
        let session = PaginationSession::new();

        let _search = session.try_begin_search().unwrap();
        assert!(session.is_searching());
        assert!(!session.is_fetching());

        let fetch = session.try_begin_fetch();
        assert!(fetch.is_some());
        assert!(session.try_begin_fetch().is_none());
    }

    // ============================================================
    // ACCOUNTING
    // ============================================================

    #[tokio::test]
    async fn test_new_session_has_no_remaining_count() {
        let session = PaginationSession::new();
        let snapshot = session.snapshot().await;

        assert_eq!(snapshot.page, 1);
        assert_eq!(snapshot.remaining, None);
        assert!(!snapshot.has_more());
        assert!(snapshot.listening);
    }

    #[tokio::test]
    async fn test_first_page_sets_remaining() {
        let session = PaginationSession::new();
        let generation = session.begin_search(query("cats")).await;

        let remaining = session.record_first_page(generation, 120, 40).await;

        assert_eq!(remaining, Some(80));
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.total_hits, Some(120));
        assert_eq!(snapshot.page, 1);
        assert!(snapshot.has_more());
    }

    #[tokio::test]
    async fn test_next_pages_decrement_running_total() {
        let session = PaginationSession::new();
        let generation = session.begin_search(query("cats")).await;
        session.record_first_page(generation, 100, 40).await;

        assert_eq!(session.record_next_page(generation, 2, 40).await, Some(20));
        assert_eq!(session.record_next_page(generation, 3, 20).await, Some(0));

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.page, 3);
        assert_eq!(snapshot.total_hits, Some(100));
        assert!(!snapshot.has_more());
    }

    #[tokio::test]
    async fn test_huge_totals_clamp_instead_of_wrapping() {
        let session = PaginationSession::new();
        let generation = session.begin_search(query("cats")).await;

        let remaining = session.record_first_page(generation, u64::MAX, 40).await;
        assert_eq!(remaining, Some(i64::MAX - 40));

        let remaining = session.record_next_page(generation, 2, 40).await;
        assert_eq!(remaining, Some(i64::MAX - 80));
        assert!(session.snapshot().await.has_more());
    }

    #[tokio::test]
    async fn test_begin_search_resets_everything() {
        let session = PaginationSession::new();
        let first = session.begin_search(query("cats")).await;
        session.record_first_page(first, 120, 40).await;
        session.record_next_page(first, 2, 40).await;
        session.detach(first).await;

        let second = session.begin_search(query("dogs")).await;
        let snapshot = session.snapshot().await;

        assert_eq!(second, first + 1);
        assert_eq!(snapshot.query, Some(query("dogs")));
        assert_eq!(snapshot.page, 1);
        assert_eq!(snapshot.remaining, None);
        assert_eq!(snapshot.total_hits, None);
        assert!(snapshot.listening);
    }

    // ============================================================
    // GENERATIONS
    // ============================================================

    #[tokio::test]
    async fn test_stale_pages_are_rejected() {
        let session = PaginationSession::new();
        let old = session.begin_search(query("cats")).await;
        session.record_first_page(old, 120, 40).await;

        let new = session.begin_search(query("dogs")).await;
        session.record_first_page(new, 10, 10).await;

        assert_eq!(session.record_next_page(old, 2, 40).await, None);
        assert_eq!(session.record_first_page(old, 120, 40).await, None);
        assert!(!session.detach(old).await);

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.remaining, Some(0));
        assert_eq!(snapshot.page, 1);
        assert!(snapshot.listening);
    }
}
