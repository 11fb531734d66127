use std::fs;

use faire_model::RecordKind;
use faire_standards::{
    FieldDictionary, FieldRule, Placement, Scope, StandardsError, load_bundled_dictionary,
    load_dictionary,
};

const MINIMAL: &str = r#"
[checklist]
id = "ERC000024"
default_taxon_id = "408172"
control_missing_value = "missing: control sample"

[identifiers]
sample_alias = "samp_name"
sample_category = "samp_category"
run_sample_name = "samp_name"
run_library_id = "lib_id"

[[sample]]
source = "eventDate"
target = "collection_date"
rule = "date"
mandatory = true
default = "not provided"

[[run]]
source = "filename"
target = "forward_filename"

[[run]]
source = "checksum_filename"
target = "forward_checksum"
rule = "md5"

[[run]]
source = "filename2"
target = "reverse_filename"

[[run]]
source = "checksum_filename2"
target = "reverse_checksum"
rule = "md5"
"#;

#[test]
fn bundled_dictionary_loads() {
    let dictionary = load_bundled_dictionary().expect("load bundled dictionary");
    assert_eq!(dictionary.checklist.id, "ERC000024");
    assert_eq!(dictionary.checklist.default_taxon_id, "408172");
    assert!(!dictionary.fields(RecordKind::Sample).is_empty());
    assert!(!dictionary.fields(RecordKind::Experiment).is_empty());
}

#[test]
fn bundled_mandatory_sample_fields() {
    let dictionary = load_bundled_dictionary().expect("load bundled dictionary");
    let mandatory: Vec<&str> = dictionary
        .mandatory(RecordKind::Sample)
        .map(|spec| spec.target.as_str())
        .collect();
    assert_eq!(
        mandatory,
        vec![
            "project_name",
            "collection_date",
            "geographic_location_latitude",
            "geographic_location_longitude",
            "geographic_location_country_andor_sea",
            "broadscale_environmental_context",
            "local_environmental_context",
            "environmental_medium",
            "depth",
        ]
    );
    for spec in dictionary.mandatory(RecordKind::Sample) {
        assert_eq!(spec.default.as_deref(), Some("not provided"));
    }
}

#[test]
fn lookup_maps_and_drops() {
    let dictionary = load_bundled_dictionary().expect("load bundled dictionary");
    assert_eq!(
        dictionary.target_for(RecordKind::Sample, "eventDate"),
        Some("collection_date")
    );
    assert_eq!(dictionary.target_for(RecordKind::Sample, "site_id"), None);
    assert_eq!(dictionary.target_for(RecordKind::Sample, "samp_size_unit"), None);

    let geo: Vec<&str> = dictionary
        .targets_for(RecordKind::Sample, "geo_loc_name")
        .collect();
    assert_eq!(
        geo,
        vec![
            "geographic_location_country_andor_sea",
            "geographic_location_region_and_locality"
        ]
    );
}

#[test]
fn unit_fields_carry_units() {
    let dictionary = load_bundled_dictionary().expect("load bundled dictionary");
    let depth = dictionary
        .field(RecordKind::Sample, "depth")
        .expect("depth field");
    assert_eq!(depth.units.as_deref(), Some("m"));

    let size = dictionary
        .field(RecordKind::Sample, "amount_or_size_of_sample_collected")
        .expect("size field");
    assert_eq!(size.rule, FieldRule::Measurement);
    assert_eq!(size.unit_column.as_deref(), Some("samp_size_unit"));
    assert!(size.emit_units);

    let with_units: Vec<&str> = dictionary
        .unit_fields(RecordKind::Sample)
        .map(|spec| spec.target.as_str())
        .collect();
    assert!(with_units.contains(&"depth"));
    assert!(with_units.contains(&"amount_or_size_of_sample_collected"));
    assert!(!with_units.contains(&"nitrate"));
}

#[test]
fn scope_and_placement_parse() {
    let dictionary = load_bundled_dictionary().expect("load bundled dictionary");
    let project = dictionary
        .field(RecordKind::Sample, "project_name")
        .expect("project_name field");
    assert_eq!(project.scope, Scope::Project);

    let conc = dictionary
        .field(RecordKind::Experiment, "library_concentration")
        .expect("library_concentration field");
    assert_eq!(conc.placement, Placement::Protocol);
    assert_eq!(conc.default_unit.as_deref(), Some("ng/uL"));
    assert_eq!(conc.display_label(), "Library concentration");
}

#[test]
fn minimal_dictionary_parses() {
    let dictionary = FieldDictionary::from_toml_str(MINIMAL, "inline").expect("parse");
    assert_eq!(dictionary.fields(RecordKind::Sample).len(), 1);
    assert!(dictionary.fields(RecordKind::Experiment).is_empty());
    assert_eq!(
        dictionary.default_for(RecordKind::Sample, "collection_date"),
        Some("not provided")
    );
}

#[test]
fn duplicate_target_is_rejected() {
    let text = MINIMAL.replace(
        "[[run]]\nsource = \"filename\"",
        "[[sample]]\nsource = \"other\"\ntarget = \"collection_date\"\n\n[[run]]\nsource = \"filename\"",
    );
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::DuplicateTarget { .. }), "{err}");
}

#[test]
fn mandatory_without_default_is_rejected() {
    let text = MINIMAL.replace("default = \"not provided\"\n", "");
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::MissingDefault { .. }), "{err}");
}

#[test]
fn blank_default_is_rejected() {
    let text = MINIMAL.replace("default = \"not provided\"", "default = \"  \"");
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(
        matches!(
            err,
            StandardsError::BlankDefault { ref target, .. } if target == "collection_date"
        ),
        "{err}"
    );
}

#[test]
fn blank_control_value_is_rejected() {
    let text = MINIMAL.replace(
        "control_missing_value = \"missing: control sample\"",
        "control_missing_value = \"\"",
    );
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::BlankControlValue), "{err}");
}

#[test]
fn target_outlives_source_name() {
    let dictionary = load_bundled_dictionary().expect("bundled dictionary");
    let target = {
        let source = String::from("geo_loc_name");
        dictionary.target_for(RecordKind::Sample, &source)
    };
    assert_eq!(target, Some("geographic_location_country_andor_sea"));
}

#[test]
fn measurement_without_unit_column_is_rejected() {
    let text = MINIMAL.replace("rule = \"date\"", "rule = \"measurement\"");
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::MissingRuleKey { .. }), "{err}");
}

#[test]
fn missing_run_target_is_rejected() {
    let text = MINIMAL.replace("target = \"reverse_checksum\"", "target = \"other\"");
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::MissingRunTarget { .. }), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let text = MINIMAL.replace("rule = \"date\"", "rule = \"date\"\nunit = \"m\"");
    let err = FieldDictionary::from_toml_str(&text, "inline").unwrap_err();
    assert!(matches!(err, StandardsError::Toml { .. }), "{err}");
}

#[test]
fn explicit_path_overrides_bundled() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, MINIMAL.replace("ERC000024", "ERC000011")).expect("write dictionary");
    let dictionary = load_dictionary(Some(path)).expect("load custom dictionary");
    assert_eq!(dictionary.checklist.id, "ERC000011");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = FieldDictionary::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
