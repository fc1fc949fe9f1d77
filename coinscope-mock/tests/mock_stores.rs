use std::num::NonZeroUsize;

use chrono::DateTime;
use coinscope_core::{AssetId, CoinscopeError, Observation, Series, SeriesStore, estimate_step_seconds};
use coinscope_mock::{DynamicMockStore, MockBehavior, MockStore, fixtures};

fn id(s: &str) -> AssetId {
    AssetId::new(s).unwrap()
}

fn limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[tokio::test]
async fn fixtures_are_ascending_and_respect_limit() {
    let store = MockStore::new();
    for asset in MockStore::known_assets() {
        let s = store.latest(&id(asset), limit(100)).await.unwrap();
        assert_eq!(s.len(), 100);
        assert!(s.timestamps().windows(2).all(|w| w[0] < w[1]));
        assert!(s.prices().iter().all(|p| *p > 0.0));
    }
    let all = store.latest(&id("bitcoin"), limit(10_000)).await.unwrap();
    assert_eq!(all.len(), fixtures::POINTS);
}

#[tokio::test]
async fn fixture_cadence_is_inferable() {
    let store = MockStore::new();
    let btc = store.latest(&id("bitcoin"), limit(1_000)).await.unwrap();
    let late = store.latest(&id("late-coin"), limit(500)).await.unwrap();
    assert_eq!(estimate_step_seconds(&btc), Some(fixtures::STEP_SECS));
    assert_eq!(
        estimate_step_seconds(&late),
        Some(fixtures::LATE_STEP_SECS)
    );
    assert!(late.first().unwrap().ts > btc.first().unwrap().ts);
}

#[tokio::test]
async fn special_ids() {
    let store = MockStore::new();
    assert!(matches!(
        store.latest(&id("FAIL"), limit(5)).await,
        Err(CoinscopeError::Store { .. })
    ));
    assert!(store.latest(&id("EMPTY"), limit(5)).await.unwrap().is_empty());
    assert_eq!(
        store.latest(&id("dogecoin"), limit(5)).await.unwrap_err(),
        CoinscopeError::no_data("dogecoin")
    );
}

#[tokio::test]
async fn dynamic_store_follows_script_and_counts_calls() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    let a = id("a");
    let obs = (0..5)
        .map(|i| Observation::new(DateTime::from_timestamp(i * 60, 0).unwrap(), i as f64))
        .collect();
    controller
        .set_behavior(a.clone(), MockBehavior::Return(Series::new(a.clone(), obs)))
        .await;
    let err = CoinscopeError::Other("boom".into());
    controller
        .set_behavior(id("b"), MockBehavior::Fail(err.clone()))
        .await;

    let got = store.latest(&a, limit(3)).await.unwrap();
    assert_eq!(got.prices(), vec![2.0, 3.0, 4.0]);
    assert_eq!(store.latest(&id("b"), limit(3)).await.unwrap_err(), err);
    assert!(store.latest(&id("c"), limit(3)).await.unwrap_err().is_no_data());

    assert_eq!(controller.calls(&a).await, 1);
    assert_eq!(controller.requested_limits(&id("b")).await, vec![3]);
    controller.clear_all_behaviors().await;
    assert_eq!(controller.calls(&a).await, 0);
}

#[tokio::test(start_paused = true)]
async fn dynamic_store_hang_never_resolves() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller.set_behavior(id("slow"), MockBehavior::Hang).await;
    let res = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        store.latest(&id("slow"), limit(1)),
    )
    .await;
    assert!(res.is_err());
}
