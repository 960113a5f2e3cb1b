use crate::animation::anim::{Anim, Expr, LoopMode, Segment};

/// Start `inner` `by_frames` later.
pub fn delay(inner: Anim, by_frames: i64) -> Anim {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by: by_frames,
    })
}

/// Play `inner` at `factor` times its speed.
pub fn speed(inner: Anim, factor: f64) -> Anim {
    Anim::Expr(Expr::Speed {
        inner: Box::new(inner),
        factor,
    })
}

/// Play the first `duration_frames` of `inner` backwards.
pub fn reverse(inner: Anim, duration_frames: u64) -> Anim {
    Anim::Expr(Expr::Reverse {
        inner: Box::new(inner),
        duration: duration_frames,
    })
}

/// Repeat the first `period_frames` of `inner`.
pub fn loop_(inner: Anim, period_frames: u64, mode: LoopMode) -> Anim {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period: period_frames,
        mode,
    })
}

/// Blend `a` toward `b` by `t`.
pub fn mix(a: Anim, b: Anim, t: Anim) -> Anim {
    Anim::Expr(Expr::Mix {
        a: Box::new(a),
        b: Box::new(b),
        t: Box::new(t),
    })
}

/// Chain `(start, anim)` segments back to back. Segments are sorted by start (stable).
pub fn sequence(segments: impl IntoIterator<Item = (i64, Anim)>) -> Anim {
    let mut segments: Vec<Segment> = segments
        .into_iter()
        .map(|(start, anim)| Segment { start, anim })
        .collect();
    segments.sort_by_key(|s| s.start);
    Anim::Expr(Expr::Sequence { segments })
}

/// Play `a` from frame 0, then switch to `b` (restarted at its own frame 0) at `a_len`.
pub fn then(a: Anim, a_len: i64, b: Anim) -> Anim {
    sequence([(0, a), (a_len, b)])
}

/// Frame offset of item `index` in a stagger with `step_frames` between items.
pub fn stagger_offset(index: usize, step_frames: i64) -> i64 {
    i64::try_from(index)
        .unwrap_or(i64::MAX)
        .saturating_mul(step_frames)
}

/// One copy of `base` per item, item `i` delayed by `stagger_offset(i, step_frames)`.
pub fn stagger(base: &Anim, count: usize, step_frames: i64) -> Vec<Anim> {
    (0..count)
        .map(|i| delay(base.clone(), stagger_offset(i, step_frames)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
