use super::*;

fn one(key: &str, raw: &str) -> UserOverrides {
    let mut set = UserOverrides::empty();
    set.push(key, raw);
    set
}

#[test]
fn underscores_become_hyphens() {
    let set = one("psy_rd", "2.0");
    assert_eq!(set.get("psy-rd"), Some("2.0"));
    assert_eq!(set.get("psy_rd"), None);
}

#[test]
fn true_keeps_the_key_and_stores_one() {
    let set = one("open-gop", "True");
    assert_eq!(set.get("open-gop"), Some("1"));
}

#[test]
fn false_negates_the_key_and_stores_one() {
    let set = one("open-gop", "False");
    assert_eq!(set.get("no-open-gop"), Some("1"));
    assert_eq!(set.get("open-gop"), None);
}

#[test]
fn false_on_a_negated_key_strips_the_prefix() {
    let set = one("no-open-gop", "False");
    assert_eq!(set.get("open-gop"), Some("1"));
    assert_eq!(set.get("no-open-gop"), None);
}

#[test]
fn classification_happens_once_at_the_boundary() {
    assert_eq!(OverrideValue::classify("True"), OverrideValue::Bool(true));
    assert_eq!(OverrideValue::classify("False"), OverrideValue::Bool(false));
    assert_eq!(
        OverrideValue::classify("false"),
        OverrideValue::Raw("false".to_string())
    );
}

#[test]
fn non_boolean_values_pass_through_verbatim() {
    let set = one("crf", "not-a-number");
    assert_eq!(set.get("crf"), Some("not-a-number"));
}

#[test]
fn duplicate_keys_overwrite_in_place() {
    let mut set = UserOverrides::empty();
    set.push("aq_mode", "2");
    set.push("rect", "1");
    set.push("aq-mode", "3");
    assert_eq!(set.combined(&[]), "aq-mode=3:rect=1");
}

#[test]
fn combined_skips_separate_parameters() {
    let mut set = UserOverrides::empty();
    set.push("preset", "slow");
    set.push("psy_rd", "2.0");
    set.push("tune", "grain");
    assert_eq!(set.combined(SEPARATE_PARAMETERS), "psy-rd=2.0");
}

#[test]
fn combined_is_empty_for_separate_only_sets() {
    let mut set = UserOverrides::empty();
    set.push("preset", "slow");
    assert!(set.has_any());
    assert_eq!(set.combined(SEPARATE_PARAMETERS), "");
}

#[test]
fn empty_set_answers_queries() {
    let set = UserOverrides::empty();
    assert!(!set.has_any());
    assert!(!set.contains("preset"));
    assert_eq!(set.get("preset"), None);
    assert_eq!(set.combined(&[]), "");
}
