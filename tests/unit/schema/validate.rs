use super::*;

fn def() -> StarsConfigDef {
    StarsConfigDef {
        repo_org: "octo".to_owned(),
        repo_name: "widgets".to_owned(),
        stars_final: 143,
        stargazers: (0..20).map(|i| format!("avatars/{i}.png")).collect(),
        duration_in_seconds: 3.0,
        fps: 60,
        width: 1280,
        height: 720,
        avatar_size: 80.0,
        avatar_gap: 10.0,
        star_size: 120.0,
    }
}

#[test]
fn valid_def_builds_config() {
    let cfg = validate_config(&def()).unwrap();
    assert_eq!(cfg.duration_frames, 180);
    assert_eq!(cfg.fps, Fps::new(60, 1).unwrap());
    assert_eq!(cfg.stargazers.len(), 20);
    assert_eq!(cfg.repo.name, "widgets");
}

#[test]
fn stars_below_entity_count_are_allowed() {
    let mut d = def();
    d.stars_final = 3;
    let cfg = validate_config(&d).unwrap();
    assert_eq!(cfg.stars_final, 3);
}

#[test]
fn every_violation_is_reported_with_its_path() {
    let mut d = def();
    d.repo_org = " ".to_owned();
    d.stars_final = -1;
    d.stargazers[2] = String::new();
    d.fps = 0;
    d.width = 0;
    d.avatar_gap = f64::NAN;
    d.star_size = 0.0;

    let errs = validate_config(&d).unwrap_err();
    let msg = errs.to_string();
    for path in [
        "$.repo_org",
        "$.stars_final",
        "$.stargazers[2]",
        "$.fps",
        "$.width",
        "$.avatar_gap",
        "$.star_size",
    ] {
        assert!(msg.contains(path), "missing {path} in:\n{msg}");
    }
    assert_eq!(errs.errors.len(), 7);
}

#[test]
fn duration_must_cover_a_frame() {
    let mut d = def();
    d.duration_in_seconds = 0.001;
    let errs = validate_config(&d).unwrap_err();
    assert!(errs.to_string().contains("at least one frame"));

    d.duration_in_seconds = -2.0;
    assert!(validate_config(&d).is_err());
}

#[test]
fn duration_beyond_exact_frame_counts_is_rejected() {
    let mut d = def();
    d.duration_in_seconds = 1e300;
    let msg = validate_config(&d).unwrap_err().to_string();
    assert!(msg.contains("$.duration_in_seconds"), "{msg}");
}

#[test]
fn stars_final_must_stay_exact_in_f64() {
    let mut d = def();
    d.stars_final = MAX_EXACT_INT;
    assert_eq!(validate_config(&d).unwrap().stars_final(), MAX_EXACT_INT);

    d.stars_final = MAX_EXACT_INT + 1;
    let msg = validate_config(&d).unwrap_err().to_string();
    assert!(msg.contains("$.stars_final"), "{msg}");
}

#[test]
fn empty_stargazer_list_is_valid() {
    let mut d = def();
    d.stargazers.clear();
    assert_eq!(validate_config(&d).unwrap().stargazers.len(), 0);
}
