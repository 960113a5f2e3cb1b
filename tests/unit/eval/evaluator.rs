use super::*;
use crate::{
    animation::anim::Anim,
    animation::ops::{delay, speed},
    foundation::core::Fps,
};

fn title_sheet() -> PropertySheet {
    PropertySheet::new(Fps::new(20, 1).unwrap(), 40)
        .with_property("title.blur", 0.0)
        .with_property(
            "title.opacity",
            Anim::keyframes(vec![0.0, 20.0], vec![0.0, 1.0]).unwrap(),
        )
        .with_property(
            "subtitle.opacity",
            delay(
                Anim::keyframes(vec![0.0, 20.0], vec![0.0, 1.0]).unwrap(),
                10,
            ),
        )
}

fn range(start: i64, end: i64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn eval_frame_resolves_every_property() {
    let sheet = title_sheet();
    let r = Evaluator::eval_frame(&sheet, FrameIndex(5)).unwrap();
    assert_eq!(r.frame, FrameIndex(5));
    assert!((r.seconds - 0.25).abs() < 1e-12);
    assert_eq!(r.value("title.blur"), Some(0.0));
    assert_eq!(r.value("title.opacity"), Some(0.25));
    assert_eq!(r.value("subtitle.opacity"), Some(0.0));
    assert_eq!(r.value("missing"), None);
    assert_eq!(r.values.len(), 3);
}

#[test]
fn frames_outside_timeline_clamp() {
    let sheet = title_sheet();
    let before = Evaluator::eval_frame(&sheet, FrameIndex(-10)).unwrap();
    assert_eq!(before.value("title.opacity"), Some(0.0));
    assert!(before.seconds < 0.0);

    let after = Evaluator::eval_frame(&sheet, FrameIndex(500)).unwrap();
    assert_eq!(after.value("title.opacity"), Some(1.0));
    assert_eq!(after.value("subtitle.opacity"), Some(1.0));
}

#[test]
fn eval_frames_serial_and_parallel_agree() {
    let sheet = title_sheet();
    let serial = Evaluator::eval_frames(&sheet, range(0, 40), &EvalThreading::default()).unwrap();
    let parallel = Evaluator::eval_frames(
        &sheet,
        range(0, 40),
        &EvalThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(serial.len(), 40);
    assert_eq!(serial, parallel);
    for (i, r) in serial.iter().enumerate() {
        assert_eq!(r.frame, FrameIndex(i as i64));
    }
}

#[test]
fn seeking_matches_sequential_playback() {
    let sheet = title_sheet();
    let played = Evaluator::eval_frames(&sheet, range(0, 40), &EvalThreading::default()).unwrap();
    for f in [37, 3, 19, 3, 0, 25] {
        let seeked = Evaluator::eval_frame(&sheet, FrameIndex(f)).unwrap();
        assert_eq!(seeked, played[f as usize]);
    }
}

#[test]
fn eval_frames_rejects_empty_range_and_zero_threads() {
    let sheet = title_sheet();
    assert!(Evaluator::eval_frames(&sheet, range(3, 3), &EvalThreading::default()).is_err());
    let err = Evaluator::eval_frames(
        &sheet,
        range(0, 4),
        &EvalThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, FramecurveError::Validation(_)));
}

#[test]
fn invalid_sheet_is_rejected_before_sampling() {
    let sheet = title_sheet().with_property("spin", speed(Anim::constant(1.0), 0.0));
    assert!(Evaluator::eval_frame(&sheet, FrameIndex(0)).is_err());
}

#[test]
fn unchecked_sampling_error_names_the_property() {
    let sheet = title_sheet().with_property("spin", speed(Anim::constant(1.0), 0.0));
    let err = Evaluator::eval_frame_unchecked(&sheet, FrameIndex(2)).unwrap_err();
    assert!(matches!(err, FramecurveError::Evaluation(_)));
    assert!(err.to_string().contains("property 'spin' at frame 2"), "{err}");
}

#[test]
fn eval_frames_rejects_oversized_ranges() {
    let sheet = title_sheet();
    let huge = range(i64::MIN, i64::MAX);
    let just_over = range(0, MAX_EVAL_FRAMES as i64 + 1);
    for r in [huge, just_over] {
        for parallel in [false, true] {
            let threading = EvalThreading {
                parallel,
                threads: Some(2),
            };
            let err = Evaluator::eval_frames(&sheet, r, &threading).unwrap_err();
            assert!(matches!(err, FramecurveError::Validation(_)), "{err}");
        }
    }
}
