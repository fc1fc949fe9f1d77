mod helpers;

use std::time::Duration;

use chrono::DateTime;
use coinscope::{Coinscope, CoinscopeError, Correlation};
use coinscope_mock::{DynamicMockStore, MockBehavior, fixtures};
use helpers::{id, ids, mock, mock_builder, series};

#[tokio::test]
async fn aligned_regular_assets_share_every_row() {
    let cs = mock();
    let table = cs
        .aligned(&ids(&["bitcoin", "ethereum", "matic-network"]))
        .await
        .unwrap();
    assert_eq!(table.step(), Duration::from_secs(120));
    assert_eq!(table.len(), 500);
    assert_eq!(table.assets()[2].as_str(), "matic-network");
    for a in ["bitcoin", "ethereum", "matic-network"] {
        assert_eq!(table.stale_count(a).unwrap(), 0);
    }
}

#[tokio::test]
async fn aligned_trims_until_the_late_asset_starts() {
    let cs = mock_builder().correlation_limit(1_000).build().unwrap();
    let table = cs.aligned(&ids(&["bitcoin", "late-coin"])).await.unwrap();

    let late_start = DateTime::from_timestamp(fixtures::ANCHOR + 3_600, 0).unwrap();
    assert_eq!(table.rows()[0].ts, late_start);
    assert_eq!(table.len(), 690);
    assert_eq!(table.stale_count("bitcoin").unwrap(), 0);
    // five-minute cadence on a two-minute grid is mostly carried forward
    assert!(table.stale_count("late-coin").unwrap() > table.len() / 2);
    assert!(!table.rows()[0].cells[1].stale);
}

#[tokio::test]
async fn inferred_grid_uses_the_coarsest_cadence() {
    let cs = mock_builder().infer_grid_step().build().unwrap();
    let table = cs.aligned(&ids(&["bitcoin", "late-coin"])).await.unwrap();
    assert_eq!(
        table.step(),
        Duration::from_secs(fixtures::LATE_STEP_SECS.unsigned_abs())
    );
    assert_eq!(table.stale_count("bitcoin").unwrap(), 0);
}

#[tokio::test]
async fn inference_falls_back_when_no_cadence_is_visible() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_behavior(id("a"), MockBehavior::Return(series("a", &[(600, 1.0)])))
        .await;
    controller
        .set_behavior(id("b"), MockBehavior::Return(series("b", &[(600, 2.0)])))
        .await;
    let cs = Coinscope::builder()
        .store(store)
        .infer_grid_step()
        .build()
        .unwrap();
    let table = cs.aligned(&ids(&["a", "b"])).await.unwrap();
    assert_eq!(table.step(), Duration::from_secs(120));
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn aligned_fails_fast_on_any_asset() {
    let cs = mock();
    let err = cs.aligned(&ids(&["bitcoin", "FAIL"])).await.unwrap_err();
    assert!(matches!(err, CoinscopeError::Store { .. }));

    let err = cs.aligned(&ids(&["bitcoin", "ghost"])).await.unwrap_err();
    assert_eq!(err, CoinscopeError::no_data("ghost"));

    assert!(matches!(
        cs.aligned(&[]).await,
        Err(CoinscopeError::InvalidArg(_))
    ));
    assert!(matches!(
        cs.aligned(&ids(&["bitcoin", "bitcoin"])).await,
        Err(CoinscopeError::InvalidArg(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn aligned_respects_request_deadline() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller.set_behavior(id("a"), MockBehavior::Hang).await;
    controller.set_behavior(id("b"), MockBehavior::Hang).await;
    let cs = Coinscope::builder()
        .store(store)
        .request_timeout(Duration::from_secs(1))
        .store_timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    let err = cs.aligned(&ids(&["a", "b"])).await.unwrap_err();
    assert_eq!(err, CoinscopeError::request_timeout("aligned"));
}

#[tokio::test]
async fn correlation_report_covers_all_pairs_by_default() {
    let cs = mock_builder().rolling_window(30).build().unwrap();
    let assets = ids(&["bitcoin", "ethereum", "matic-network"]);
    let report = cs.correlation_report(&assets, None).await.unwrap();

    assert_eq!(report.matrix.dim(), 3);
    assert!(report.warnings.is_empty());
    for a in ["bitcoin", "ethereum", "matic-network"] {
        assert_eq!(report.matrix.get(a, a).unwrap(), Correlation::Coefficient(1.0));
        for b in ["bitcoin", "ethereum", "matic-network"] {
            assert_eq!(report.matrix.get(a, b).unwrap(), report.matrix.get(b, a).unwrap());
        }
    }
    let btc_eth = report.matrix.get("bitcoin", "ethereum").unwrap().value().unwrap();
    assert!(btc_eth > 0.5, "bitcoin/ethereum move together: {btc_eth}");

    let pairs: Vec<(&str, &str)> = report
        .rolling
        .iter()
        .map(|r| (r.asset_a.as_str(), r.asset_b.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("bitcoin", "ethereum"),
            ("bitcoin", "matic-network"),
            ("ethereum", "matic-network")
        ]
    );
    for r in &report.rolling {
        assert_eq!(r.window, 30);
        assert_eq!(r.points.len(), report.table.len());
        assert!(r.points[..29].iter().all(|p| p.value.is_none()));
        assert!(r.points[29..].iter().all(|p| p.value.is_some()));
    }
}

#[tokio::test]
async fn invalid_pairs_become_warnings() {
    let cs = mock();
    let assets = ids(&["bitcoin", "ethereum"]);
    let pairs = [
        (id("bitcoin"), id("bitcoin")),
        (id("bitcoin"), id("dogecoin")),
        (id("ethereum"), id("bitcoin")),
    ];
    let report = cs.correlation_report(&assets, Some(&pairs)).await.unwrap();

    assert_eq!(report.rolling.len(), 1);
    assert_eq!(report.rolling[0].asset_a.as_str(), "ethereum");
    assert_eq!(
        report.warnings,
        vec![
            CoinscopeError::InvalidPair {
                asset: "bitcoin".into()
            },
            CoinscopeError::unknown_asset("dogecoin"),
        ]
    );
}

#[tokio::test]
async fn rolling_correlation_rejects_self_pair_before_fetching() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    let cs = Coinscope::builder().store(store).build().unwrap();
    let err = cs
        .rolling_correlation(&id("a"), &id("a"))
        .await
        .unwrap_err();
    assert_eq!(err, CoinscopeError::InvalidPair { asset: "a".into() });
    assert_eq!(controller.calls(&id("a")).await, 0);
}

#[tokio::test]
async fn rolling_correlation_of_a_pair() {
    let cs = mock_builder().rolling_window(5).build().unwrap();
    let r = cs
        .rolling_correlation(&id("ethereum"), &id("matic-network"))
        .await
        .unwrap();
    assert_eq!(r.points.len(), 500);
    assert_eq!(r.coefficients().len(), 496);
}
