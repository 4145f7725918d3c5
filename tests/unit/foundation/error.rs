use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StargazeError::config_validation("x")
            .to_string()
            .contains("config validation error:")
    );
    assert!(
        StargazeError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        StargazeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StargazeError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
}

#[test]
fn errors_convert_into_anyhow_with_message() {
    let err: anyhow::Error = StargazeError::evaluation("entity 3 out of range").into();
    assert_eq!(err.to_string(), "evaluation error: entity 3 out of range");
}
