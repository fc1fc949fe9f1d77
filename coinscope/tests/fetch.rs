mod helpers;

use std::time::Duration;

use coinscope::{Coinscope, CoinscopeError};
use coinscope_mock::{DynamicMockStore, MockBehavior};
use helpers::{id, mock, mock_builder, series};

#[tokio::test]
async fn fetch_returns_latest_ascending() {
    let cs = mock();
    let s = cs.fetch(&id("bitcoin"), 25).await.unwrap();
    assert_eq!(s.len(), 25);
    assert!(s.timestamps().windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn zero_limit_is_invalid() {
    let err = mock().fetch(&id("bitcoin"), 0).await.unwrap_err();
    assert!(matches!(err, CoinscopeError::InvalidArg(_)));
}

#[tokio::test]
async fn empty_ok_from_store_becomes_no_data() {
    let err = mock().fetch(&id("EMPTY"), 10).await.unwrap_err();
    assert_eq!(err, CoinscopeError::no_data("EMPTY"));
}

#[tokio::test]
async fn unknown_asset_is_no_data() {
    let err = mock().fetch(&id("dogecoin"), 10).await.unwrap_err();
    assert!(err.is_no_data());
}

#[tokio::test]
async fn store_failure_keeps_store_tag() {
    let err = mock().fetch(&id("FAIL"), 10).await.unwrap_err();
    assert!(matches!(err, CoinscopeError::Store { ref store, .. } if store == "coinscope-mock"));
}

#[tokio::test]
async fn slow_store_times_out() {
    let cs = mock_builder()
        .store_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let err = cs.fetch(&id("TIMEOUT"), 10).await.unwrap_err();
    assert_eq!(err, CoinscopeError::store_timeout("coinscope-mock", "TIMEOUT"));
}

#[tokio::test]
async fn untagged_errors_are_attributed_to_the_store() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_behavior(id("a"), MockBehavior::Fail(CoinscopeError::Other("boom".into())))
        .await;
    controller
        .set_behavior(id("b"), MockBehavior::Fail(CoinscopeError::no_data("b")))
        .await;
    controller
        .set_behavior(id("c"), MockBehavior::Return(series("c", &[(0, 1.0), (60, 2.0)])))
        .await;
    let cs = Coinscope::builder().store(store).build().unwrap();

    let err = cs.fetch(&id("a"), 5).await.unwrap_err();
    assert_eq!(
        err,
        CoinscopeError::Store {
            store: "dyn".into(),
            msg: "unknown error: boom".into()
        }
    );
    assert_eq!(
        cs.fetch(&id("b"), 5).await.unwrap_err(),
        CoinscopeError::no_data("b")
    );
    assert_eq!(cs.fetch(&id("c"), 5).await.unwrap().prices(), vec![1.0, 2.0]);
    assert_eq!(controller.requested_limits(&id("c")).await, vec![5]);
}

#[tokio::test(start_paused = true)]
async fn hanging_store_is_cut_by_store_timeout() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller.set_behavior(id("slow"), MockBehavior::Hang).await;
    let cs = Coinscope::builder()
        .store(store)
        .store_timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let err = cs.fetch(&id("slow"), 5).await.unwrap_err();
    assert_eq!(err, CoinscopeError::store_timeout("dyn", "slow"));
}
