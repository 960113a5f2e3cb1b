use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(-2), FrameIndex(3)).unwrap();
    assert!(!r.contains(FrameIndex(-3)));
    assert!(r.contains(FrameIndex(-2)));
    assert!(r.contains(FrameIndex(2)));
    assert!(!r.contains(FrameIndex(3)));
    assert_eq!(r.len_frames(), 5);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    assert!(FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap().is_empty());
}

#[test]
fn frame_range_iterates_in_order() {
    let r = FrameRange::new(FrameIndex(-1), FrameIndex(2)).unwrap();
    let frames: Vec<i64> = r.frames().map(|f| f.0).collect();
    assert_eq!(frames, vec![-1, 0, 1]);
}

#[test]
fn frame_offset_saturates() {
    assert_eq!(FrameIndex(10).offset(-15), FrameIndex(-5));
    assert_eq!(FrameIndex(i64::MAX).offset(1), FrameIndex(i64::MAX));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(FrameIndex(123));
    assert_eq!(fps.secs_to_frame_floor(secs), FrameIndex(123));
}

#[test]
fn fps_negative_frames_map_to_negative_seconds() {
    let fps = Fps::new(25, 1).unwrap();
    assert_eq!(fps.frames_to_secs(FrameIndex(-50)), -2.0);
}
