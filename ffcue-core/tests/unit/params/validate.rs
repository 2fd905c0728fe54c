use super::*;

use crate::params::system::EncodeParams;

fn set_of(entries: &[(&str, &str)]) -> UserOverrides {
    let mut set = UserOverrides::empty();
    for (key, raw) in entries {
        set.push(key, raw);
    }
    set
}

fn check(set: &UserOverrides) -> CueResult<()> {
    check_conflicts(set, EncodeParams::required_keys())
}

#[test]
fn clean_overrides_pass() {
    let set = set_of(&[("psy_rd", "2.0"), ("preset", "slow"), ("open_gop", "False")]);
    assert!(check(&set).is_ok());
}

#[test]
fn geometry_keys_are_always_forbidden() {
    // Underscore input normalizes to the forbidden hyphen form.
    let set = set_of(&[("input_res", "1920x1080")]);
    let err = check(&set).unwrap_err();
    assert_eq!(
        err.to_string(),
        "input-res is a forbidden parameter and cannot be set, provided in user parameters file"
    );
}

#[test]
fn required_system_keys_cannot_be_shadowed() {
    let set = set_of(&[("frame_rate", "25")]);
    let err = check(&set).unwrap_err();
    assert!(matches!(err, CueError::HostOwned { ref key } if key == "frame-rate"));
}

#[test]
fn compliance_flags_cannot_be_set() {
    let set = set_of(&[("aud", "1")]);
    let err = check(&set).unwrap_err();
    assert!(matches!(err, CueError::Compliance { ref key, ref provided } if key == "aud" && provided == "aud"));
}

#[test]
fn compliance_flags_cannot_be_negated() {
    // "aud": "False" normalizes to the key no-aud.
    let set = set_of(&[("aud", "False")]);
    let err = check(&set).unwrap_err();
    assert!(matches!(err, CueError::Compliance { ref key, ref provided } if key == "aud" && provided == "no-aud"));
}

#[test]
fn forbidden_check_runs_before_the_others() {
    let set = set_of(&[("aud", "1"), ("frame_rate", "25"), ("fps", "24")]);
    let err = check(&set).unwrap_err();
    assert!(matches!(err, CueError::Forbidden { ref key } if key == "fps"));
}

#[test]
fn host_owned_check_runs_before_compliance() {
    let set = set_of(&[("aud", "1"), ("frame_rate", "25")]);
    let err = check(&set).unwrap_err();
    assert!(matches!(err, CueError::HostOwned { .. }));
}

#[test]
fn presence_alone_conflicts_even_with_empty_values() {
    let set = set_of(&[("fps", "")]);
    assert!(check(&set).is_err());
}
