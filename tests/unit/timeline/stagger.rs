use super::*;

fn fps60() -> Fps {
    Fps::new(60, 1).unwrap()
}

#[test]
fn single_entity_starts_at_pre_roll() {
    let w = entity_window(0, 1, 180, fps60()).unwrap();
    assert_eq!(w.sequence_start, -30.0);
}

#[test]
fn first_and_last_entities_span_the_window() {
    let windows = entity_windows(20, 180, fps60()).unwrap();
    assert_eq!(windows.len(), 20);
    assert_eq!(windows[0].sequence_start, -30.0);
    assert_eq!(windows[19].sequence_start, 60.0);
}

#[test]
fn starts_are_non_decreasing() {
    for count in [2, 3, 7, 20, 101] {
        let windows = entity_windows(count, 600, Fps::new(30, 1).unwrap()).unwrap();
        assert!(
            windows
                .windows(2)
                .all(|w| w[0].sequence_start <= w[1].sequence_start)
        );
    }
}

#[test]
fn short_video_collapses_starts_instead_of_reversing() {
    // 1 second at 60 fps leaves no room for the 2 second tail.
    let windows = entity_windows(5, 60, fps60()).unwrap();
    assert!(windows.iter().all(|w| w.sequence_start == -30.0));
}

#[test]
fn out_of_range_index_is_an_error() {
    assert!(entity_window(3, 3, 180, fps60()).is_err());
    assert!(entity_window(0, 0, 180, fps60()).is_err());
}

#[test]
fn local_frame_is_relative_to_start() {
    let w = entity_window(0, 4, 180, fps60()).unwrap();
    assert_eq!(w.local_frame(FrameIndex(0)), 30.0);
    assert!(w.has_started(FrameIndex(0)));

    let last = entity_window(3, 4, 180, fps60()).unwrap();
    assert_eq!(last.local_frame(FrameIndex(0)), -60.0);
    assert!(!last.has_started(FrameIndex(59)));
    assert!(last.has_started(FrameIndex(60)));
}
