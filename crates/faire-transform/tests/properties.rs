//! Property tests for the normalizer.

use faire_model::{ProjectMetadata, RecordKind, Row};
use faire_standards::{FieldRule, load_bundled_dictionary};
use faire_transform::normalization::{
    check_date, compose_measurement, normalize_date, truncate_region, DateCheck,
};
use faire_transform::normalize_field;
use proptest::prelude::*;

proptest! {
    #[test]
    fn truncation_never_keeps_a_colon(value in ".{0,40}") {
        if let Some(region) = truncate_region(&value) {
            prop_assert!(!region.contains(':'));
            prop_assert_eq!(truncate_region(&region), Some(region.clone()));
        }
    }

    #[test]
    fn truncation_keeps_colon_free_text(value in "[A-Za-z ,]{1,30}") {
        let trimmed = value.trim();
        let expected = (!trimmed.is_empty()).then(|| trimmed.to_string());
        prop_assert_eq!(truncate_region(&value), expected);
    }

    #[test]
    fn calendar_dates_are_verbatim(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let date = format!("{year:04}-{month:02}-{day:02}");
        prop_assert_eq!(check_date(&date), DateCheck::Valid(date.clone()));
        let stamp = format!("{date}T00:00:00");
        prop_assert_eq!(check_date(&stamp), DateCheck::Valid(stamp.clone()));
    }

    #[test]
    fn date_normalization_is_idempotent(value in ".{0,25}") {
        let once = normalize_date(&value);
        prop_assert_eq!(normalize_date(&once), once);
    }

    #[test]
    fn measurement_is_idempotent(
        value in "[0-9]{1,4}(\\.[0-9]{1,2})?",
        unit in proptest::option::of("[a-zA-Z/]{1,4}"),
    ) {
        let once = compose_measurement(&value, unit.as_deref(), None);
        let twice = compose_measurement(&once.value, unit.as_deref(), None);
        prop_assert_eq!(twice.value, once.value);
    }

    #[test]
    fn sample_fields_are_idempotent(value in "[ -~]{1,30}", unit in "[a-zA-Z]{0,3}") {
        let dictionary = load_bundled_dictionary().expect("bundled dictionary");
        let project = ProjectMetadata::default();
        for spec in dictionary.fields(RecordKind::Sample) {
            // The control flag is derived from the category column, not re-fed.
            if spec.rule == FieldRule::ControlFlag {
                continue;
            }
            let mut row = Row::new(2).with(&spec.source, value.as_str());
            for column in spec.unit_column.iter().chain(spec.qualifier_column.iter()) {
                row = row.with(column, unit.as_str());
            }
            let once = normalize_field(spec, &row, &project);
            let Some(first) = once.value.clone() else {
                continue;
            };
            let refed = row.clone().with(&spec.source, first.as_str());
            let twice = normalize_field(spec, &refed, &project);
            prop_assert_eq!(twice.value, once.value, "{}", spec.target);
            prop_assert_eq!(twice.units, once.units, "{}", spec.target);
        }
    }
}

#[test]
fn scenario_values() {
    assert_eq!(truncate_region("A: B, C").as_deref(), Some("A"));
    for accepted in ["2019-10-16", "2019-10", "2019", "2019-10-16T00:00:00"] {
        assert_eq!(normalize_date(accepted), accepted);
    }
    for rejected in ["2019-00-00", "2019-00-00T00:00:00"] {
        assert_eq!(normalize_date(rejected), "not provided");
    }
    assert_eq!(normalize_date("not provided"), "not provided");
    assert_eq!(normalize_date("not collected"), "not collected");
    assert_eq!(compose_measurement("1", Some("L"), None).value, "1 L");
}
