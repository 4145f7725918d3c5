use super::*;
use crate::scene::config::{StarsConfig, StarsConfigDef};

fn config() -> AnimationConfig {
    StarsConfig::from_def(StarsConfigDef {
        repo_org: "octo".to_owned(),
        repo_name: "widgets".to_owned(),
        stars_final: 1_000,
        stargazers: (0..12).map(|i| format!("{i}.png")).collect(),
        duration_in_seconds: 2.5,
        fps: 30,
        width: 640,
        height: 360,
        avatar_size: 48.0,
        avatar_gap: 6.0,
        star_size: 64.0,
    })
    .validate()
    .unwrap()
}

#[test]
fn sequential_range_is_in_frame_order() {
    let cfg = config();
    let states = resolve_range(&cfg, cfg.frame_range(), &ResolveThreading::default()).unwrap();
    assert_eq!(states.len(), 75);
    assert!(states.iter().enumerate().all(|(i, s)| s.frame == FrameIndex(i as u64)));
}

#[test]
fn parallel_matches_sequential() {
    let cfg = config();
    let seq = resolve_range(&cfg, cfg.frame_range(), &ResolveThreading::default()).unwrap();
    let par = resolve_range(
        &cfg,
        cfg.frame_range(),
        &ResolveThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let cfg = config();
    let err = resolve_range(
        &cfg,
        cfg.frame_range(),
        &ResolveThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, StargazeError::Evaluation(_)));
}

#[test]
fn empty_range_resolves_nothing() {
    let cfg = config();
    let range = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    assert!(resolve_range(&cfg, range, &ResolveThreading::default()).unwrap().is_empty());
}
