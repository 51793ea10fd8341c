use uuid::uuid;

use super::*;
use crate::packed_code::verify_packed_code;

#[test]
fn packs_master_upgrade_code() {
    assert_eq!(
        PackedCode::from_uuid(MASTER_UPGRADE_CODE).as_str(),
        "F499BC52FCDCB12419656725A8FA0C1E"
    );
}

#[test]
fn packs_legacy_service_component_code() {
    assert_eq!(
        PackedCode::from_uuid(LEGACY_SERVICE_COMPONENT_CODE).as_str(),
        "32FAF4D19A4677B4AAECA19B32580DC9"
    );
}

#[test]
fn packed_code_writes_low_nibble_first() {
    // Data1 is little-endian, so 0x1A lands in the first byte.
    let code = uuid!("0000001A-0000-0000-0000-000000000000");
    let packed = PackedCode::from_uuid(code);
    assert!(
        packed.as_str().starts_with("A1"),
        "unexpected packed form: {packed}"
    );
}

#[test]
fn packed_code_keeps_tail_bytes_in_order() {
    let code = uuid!("00000000-0000-0000-0102-030405060708");
    assert_eq!(
        PackedCode::from_uuid(code).as_str(),
        "00000000000000001020304050607080"
    );
}

#[test]
fn packed_code_is_upper_case_and_fixed_width() {
    let code = uuid!("abcdef01-2345-6789-abcd-ef0123456789");
    let packed = PackedCode::from_uuid(code);
    assert_eq!(packed.as_str().len(), 32);
    assert_eq!(packed.as_str(), packed.as_str().to_ascii_uppercase());
}

#[test]
fn encoding_self_check_passes() {
    verify_packed_code_encoding().expect("well-known codes must pack to their known forms");
}

#[test]
fn encoding_self_check_reports_mismatch() {
    let err = verify_packed_code(MASTER_UPGRADE_CODE, "32FAF4D19A4677B4AAECA19B32580DC9")
        .expect_err("mismatched packed form must fail");
    assert_eq!(err.to_string(), "Failed.");
}

#[test]
fn label_rule_matches_prefix_and_exact() {
    let rule = CleanupTargets::default().product_labels;
    assert!(rule.matches("JetBrains ETW Service"));
    assert!(rule.matches("JetBrains ETW Host Service"));
    assert!(rule.matches("JetBrains ETW Host Service 2.0"));
}

#[test]
fn label_rule_rejects_non_prefix_and_near_misses() {
    let rule = CleanupTargets::default().product_labels;
    assert!(!rule.matches("Other JetBrains ETW Host Service"));
    assert!(!rule.matches("JetBrains ETW Service 2.0"));
    assert!(!rule.matches("jetbrains etw service"));
    assert!(!rule.matches(""));
}

#[test]
fn empty_label_rule_matches_nothing() {
    let rule = LabelRule::default();
    assert!(!rule.matches("JetBrains ETW Service"));
}

#[test]
fn default_targets_describe_etw_host_service() {
    let targets = CleanupTargets::default();
    assert_eq!(targets, CleanupTargets::jetbrains_etw_host());
    assert_eq!(targets.component_marker, "ETW Host");
    assert_eq!(targets.product_labels.prefixes(), ["JetBrains ETW Host Service"]);
    assert_eq!(targets.product_labels.exacts(), ["JetBrains ETW Service"]);
    assert_eq!(
        targets.packed_upgrade_code(),
        "F499BC52FCDCB12419656725A8FA0C1E"
    );
    assert_eq!(
        targets.packed_legacy_component_code(),
        "32FAF4D19A4677B4AAECA19B32580DC9"
    );
}
