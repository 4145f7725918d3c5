use super::*;
use crate::scene::config::{StarsConfig, StarsConfigDef};

fn config(entities: usize) -> AnimationConfig {
    StarsConfig::from_def(StarsConfigDef {
        repo_org: "octo".to_owned(),
        repo_name: "widgets".to_owned(),
        stars_final: 143,
        stargazers: (0..entities).map(|i| format!("{i}.png")).collect(),
        duration_in_seconds: 3.0,
        fps: 60,
        width: 1280,
        height: 720,
        avatar_size: 80.0,
        avatar_gap: 10.0,
        star_size: 120.0,
    })
    .validate()
    .unwrap()
}

#[test]
fn layers_are_flat_and_ordered() {
    let layers = build_layers(&config(3)).unwrap();
    let kinds: Vec<_> = layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LayerKind::Counter,
            LayerKind::Scroll,
            LayerKind::Avatar(0),
            LayerKind::Avatar(1),
            LayerKind::Avatar(2),
            LayerKind::Star,
        ]
    );
    assert_eq!(layers[2].start, -30.0);
    assert_eq!(layers[4].start, 60.0);
}

#[test]
fn avatar_layers_activate_at_their_start() {
    let layers = build_layers(&config(3)).unwrap();
    let last = layers[4];
    assert!(!last.is_active(FrameIndex(59)));
    assert!(last.is_active(FrameIndex(60)));
    assert!(last.is_active(FrameIndex(10_000)));
    assert_eq!(last.local_frame(FrameIndex(75)), 15.0);
}

#[test]
fn no_entities_still_has_counter_scroll_and_star() {
    let layers = build_layers(&config(0)).unwrap();
    assert_eq!(layers.len(), 3);
}
