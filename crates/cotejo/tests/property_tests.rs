//! Property tests for snapshot comparison and resource slugs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cotejo::prelude::*;
use proptest::prelude::*;

fn style_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::from("none")),
        Just(String::from("underline")),
        Just(String::from("rgb(255, 255, 0)")),
        Just(String::from("2px solid rgb(0, 0, 0)")),
    ]
}

fn record() -> impl Strategy<Value = StyleAttributes> {
    (
        prop_oneof![Just("A"), Just("BUTTON")],
        "[a-zA-Z ]{0,12}",
        proptest::collection::vec(style_value(), 4),
    )
        .prop_map(|(tag, label, values)| {
            StyleKey::ALL
                .iter()
                .zip(values)
                .fold(StyleAttributes::new(tag, label), |attrs, (key, value)| {
                    attrs.with_style(*key, value)
                })
        })
}

fn snapshot(max: usize) -> impl Strategy<Value = Vec<StyleAttributes>> {
    proptest::collection::vec(record(), 0..max)
}

fn correlation() -> impl Strategy<Value = Correlation> {
    prop_oneof![Just(Correlation::Identity), Just(Correlation::Positional)]
}

fn comparator(
    correlation: Correlation,
    baseline: Vec<StyleAttributes>,
    later: Vec<StyleAttributes>,
) -> StyleSnapshotComparator {
    let config = ComparatorConfig::new().with_correlation(correlation);
    let mut comparator = StyleSnapshotComparator::with_config(config).unwrap();
    comparator.record_snapshot(Phase::Baseline, baseline);
    comparator.record_snapshot(Phase::Toggled, later);
    comparator
}

proptest! {
    #[test]
    fn prop_has_changed_iff_changes(
        correlation in correlation(),
        baseline in snapshot(8),
        later in snapshot(8),
    ) {
        let cmp = comparator(correlation, baseline, later);
        for report in cmp.compare_to_baseline(Phase::Toggled).unwrap() {
            prop_assert_eq!(report.has_changed, !report.changes.is_empty());
            if report.is_no_data() {
                prop_assert!(!report.has_changed);
                prop_assert_eq!(report.marker(), Some(NO_DATA_MARKER));
            }
        }
    }

    #[test]
    fn prop_one_report_per_baseline_element(
        correlation in correlation(),
        baseline in snapshot(8),
        later in snapshot(8),
    ) {
        let expected = baseline.len();
        let cmp = comparator(correlation, baseline, later);
        let summary = cmp.summarize(Phase::Toggled).unwrap();
        prop_assert_eq!(summary.total, expected);
        prop_assert_eq!(summary.changed + summary.unchanged + summary.skipped, expected);
        for (i, report) in summary.reports.iter().enumerate() {
            prop_assert_eq!(report.index, i);
        }
    }

    #[test]
    fn prop_identical_snapshot_is_reverted(
        correlation in correlation(),
        baseline in snapshot(8),
    ) {
        let cmp = comparator(correlation, baseline.clone(), baseline);
        let summary = cmp.assert_all_reverted(Phase::Toggled).unwrap();
        prop_assert_eq!(summary.changed, 0);
        prop_assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn prop_empty_later_snapshot_never_fails(
        correlation in correlation(),
        baseline in snapshot(8),
    ) {
        let expected = baseline.len();
        let cmp = comparator(correlation, baseline, Vec::new());
        let changed = cmp.assert_all_changed(Phase::Toggled).unwrap();
        let reverted = cmp.assert_all_reverted(Phase::Toggled).unwrap();
        prop_assert_eq!(changed.skipped, expected);
        prop_assert_eq!(reverted.judged(), 0);
    }

    #[test]
    fn prop_comparison_is_pure(
        correlation in correlation(),
        baseline in snapshot(6),
        later in snapshot(6),
    ) {
        let cmp = comparator(correlation, baseline, later);
        let first = cmp.compare_to_baseline(Phase::Toggled).unwrap();
        let second = cmp.compare_to_baseline(Phase::Toggled).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_identity_ignores_order(records in snapshot(8), seed in any::<u64>()) {
        let baseline: Vec<StyleAttributes> = records
            .into_iter()
            .enumerate()
            .map(|(i, attrs)| StyleAttributes {
                label: format!("{i} {}", attrs.label),
                ..attrs
            })
            .collect();
        let mut shuffled = baseline.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
        }
        let cmp = comparator(Correlation::Identity, baseline, shuffled);
        let summary = cmp.summarize(Phase::Toggled).unwrap();
        prop_assert_eq!(summary.changed, 0);
        prop_assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn prop_recorded_run_round_trip(baseline in snapshot(5), toggled in snapshot(5)) {
        let run = RecordedRun {
            baseline,
            toggled: Some(toggled),
            reverted: None,
        };
        let json = serde_json::to_string(&run).unwrap();
        prop_assert_eq!(RecordedRun::from_json_str(&json).unwrap(), run);
    }

    #[test]
    fn prop_slug_charset(title in "\\PC{0,40}") {
        let slug = resource_slug(&title);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
        prop_assert!(!slug.contains("--"));
        prop_assert_eq!(resource_slug(&slug), slug.clone());
    }

    #[test]
    fn prop_fragment_shape(label in "[A-Za-z]{1,10}", title in "[A-Za-z0-9 ]{1,30}") {
        let fragment = expected_url_fragment(&label, &title);
        prop_assert!(fragment.starts_with('/'));
        prop_assert!(fragment.ends_with('/'));
        prop_assert_eq!(fragment.matches('/').count(), 3);
    }
}

#[test]
fn test_slug_helpers_at_crate_root() {
    assert_eq!(cotejo::resource_slug("Intro to KMS"), "intro-to-kms");
    assert_eq!(cotejo::category_slug("Video"), "video");
    assert_eq!(
        cotejo::expected_url_fragment("Video", "Intro to KMS"),
        "/video/intro-to-kms/"
    );
}
