use super::*;

const MINIMAL: &str = r#"{
    "repo_org": "octo",
    "repo_name": "widgets",
    "stars_final": 143,
    "stargazers": ["a.png", "b.png"]
}"#;

#[test]
fn defaults_fill_layout_fields() {
    let cfg = StarsConfig::from_json_str(MINIMAL).unwrap();
    let def = cfg.def();
    assert_eq!(def.fps, 60);
    assert_eq!(def.duration_in_seconds, 3.0);
    assert_eq!((def.width, def.height), (1280, 720));

    let anim = cfg.validate().unwrap();
    let meta = anim.metadata();
    assert_eq!(meta.duration_frames, 180);
    assert_eq!(meta.canvas.width, 1280);
    assert_eq!(anim.frame_range().len_frames(), 180);
}

#[test]
fn missing_field_is_a_config_validation_error() {
    let err = StarsConfig::from_json_str(r#"{"repo_org": "octo"}"#).unwrap_err();
    assert!(matches!(err, StargazeError::ConfigValidation(_)), "{err}");
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn wrong_type_is_a_config_validation_error() {
    let json = MINIMAL.replace("143", "\"many\"");
    let err = StarsConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, StargazeError::ConfigValidation(_)), "{err}");
}

#[test]
fn unknown_field_is_rejected() {
    let json = MINIMAL.replace("\"stars_final\"", "\"colour\": 1, \"stars_final\"");
    assert!(StarsConfig::from_json_str(&json).is_err());
}

#[test]
fn schema_violation_is_a_config_validation_error() {
    let json = MINIMAL.replace("143", "-5");
    let err = StarsConfig::from_json_str(&json)
        .unwrap()
        .validate()
        .unwrap_err();
    assert!(matches!(err, StargazeError::ConfigValidation(_)));
    assert!(err.to_string().contains("$.stars_final"));
}

#[test]
fn from_path_reports_missing_file() {
    let err = StarsConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, StargazeError::ConfigValidation(_)));
}
