use super::*;
use crate::foundation::core::FrameIndex;

fn fade_in() -> Anim {
    Anim::keyframes(vec![0.0, 10.0], vec![0.0, 1.0]).unwrap()
}

#[test]
fn then_switches_at_boundary() {
    let s = then(Anim::constant(1.0), 5, Anim::constant(10.0));
    assert_eq!(s.sample(FrameIndex(4)).unwrap(), 1.0);
    assert_eq!(s.sample(FrameIndex(5)).unwrap(), 10.0);
}

#[test]
fn sequence_sorts_segments_by_start() {
    let s = sequence([(20, Anim::constant(3.0)), (0, fade_in()), (10, Anim::constant(2.0))]);
    assert!(s.validate().is_ok());
    assert_eq!(s.sample(FrameIndex(5)).unwrap(), 0.5);
    assert_eq!(s.sample(FrameIndex(12)).unwrap(), 2.0);
    assert_eq!(s.sample(FrameIndex(40)).unwrap(), 3.0);
}

#[test]
fn stagger_offsets_each_item() {
    let items = stagger(&fade_in(), 3, 4);
    assert_eq!(items.len(), 3);
    let at_frame_8: Vec<f64> = items
        .iter()
        .map(|a| a.sample(FrameIndex(8)).unwrap())
        .collect();
    assert_eq!(at_frame_8, vec![0.8, 0.4, 0.0]);
}

#[test]
fn stagger_offset_saturates() {
    assert_eq!(stagger_offset(3, 5), 15);
    assert_eq!(stagger_offset(usize::MAX, 2), i64::MAX);
}

#[test]
fn builders_wrap_expressions() {
    let r = reverse(fade_in(), 11);
    assert_eq!(r.sample(FrameIndex(0)).unwrap(), 1.0);

    let l = loop_(fade_in(), 10, LoopMode::Repeat);
    assert_eq!(l.sample(FrameIndex(15)).unwrap(), 0.5);

    let fast = speed(fade_in(), 2.0);
    assert_eq!(fast.sample(FrameIndex(5)).unwrap(), 1.0);

    let m = mix(Anim::constant(0.0), Anim::constant(8.0), Anim::constant(0.25));
    assert_eq!(m.sample(FrameIndex(0)).unwrap(), 2.0);
}
