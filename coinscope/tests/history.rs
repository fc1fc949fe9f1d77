mod helpers;

use std::time::Duration;

use coinscope::{Coinscope, CoinscopeError};
use coinscope_mock::{DynamicMockStore, MockBehavior, fixtures};
use helpers::{id, mock, series};

#[tokio::test]
async fn first_page_is_newest_first() {
    let cs = mock();
    let page = cs.history(&id("bitcoin"), 1, 50).await.unwrap();
    assert_eq!(page.total, fixtures::POINTS);
    assert_eq!(page.pages, fixtures::POINTS.div_ceil(50));
    assert_eq!(page.data.len(), 50);

    let newest = fixtures::ANCHOR + (fixtures::POINTS as i64 - 1) * fixtures::STEP_SECS;
    assert_eq!(page.data[0].ts.timestamp(), newest);
    assert!(page.data.windows(2).all(|w| w[0].ts > w[1].ts));
}

#[tokio::test]
async fn pages_do_not_overlap_and_the_last_one_is_short() {
    let cs = mock();
    // 720 points in pages of 100: 8 pages, the last holding 20.
    let p1 = cs.history(&id("bitcoin"), 1, 100).await.unwrap();
    let p2 = cs.history(&id("bitcoin"), 2, 100).await.unwrap();
    let last = cs.history(&id("bitcoin"), 8, 100).await.unwrap();
    assert_eq!(p1.pages, 8);
    assert!(p1.data.last().unwrap().ts > p2.data[0].ts);
    assert_eq!(last.data.len(), 20);
    assert_eq!(last.data.last().unwrap().ts.timestamp(), fixtures::ANCHOR);
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_total() {
    let cs = mock();
    let page = cs.history(&id("bitcoin"), 99, 1_000).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, fixtures::POINTS);
    assert_eq!(page.pages, 1);
}

#[tokio::test]
async fn rejects_bad_page_or_limit_before_calling_the_store() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_behavior(id("x"), MockBehavior::Return(series("x", &[(0, 1.0)])))
        .await;
    let cs = Coinscope::builder().store(store).build().unwrap();

    for (page, limit) in [(0, 10), (1, 0), (1, 1_001), (usize::MAX, 1_000)] {
        let err = cs.history(&id("x"), page, limit).await.unwrap_err();
        assert!(matches!(err, CoinscopeError::InvalidArg(_)), "{page}/{limit}: {err:?}");
    }
    assert_eq!(controller.calls(&id("x")).await, 0);

    let ok = cs.history(&id("x"), 1, 1_000).await.unwrap();
    assert_eq!(ok.total, 1);
    // The default slice reads the full history once.
    assert_eq!(controller.requested_limits(&id("x")).await, vec![usize::MAX]);
}

#[tokio::test]
async fn store_failures_propagate() {
    let cs = mock();
    assert_eq!(
        cs.history(&id("no-such-coin"), 1, 10).await.unwrap_err(),
        CoinscopeError::no_data("no-such-coin")
    );
    assert_eq!(
        cs.history(&id("EMPTY"), 1, 10).await.unwrap_err(),
        CoinscopeError::no_data("EMPTY")
    );
    assert!(matches!(
        cs.history(&id("FAIL"), 1, 10).await.unwrap_err(),
        CoinscopeError::Store { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn hanging_store_times_out() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller.set_behavior(id("x"), MockBehavior::Hang).await;
    let cs = Coinscope::builder()
        .store(store)
        .store_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    assert!(matches!(
        cs.history(&id("x"), 1, 10).await.unwrap_err(),
        CoinscopeError::StoreTimeout { .. }
    ));
}
