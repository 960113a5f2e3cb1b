use serde::{Deserialize, Serialize};

use crate::{
    animation::spec::{KeyframePair, KeyframePairDef, ValueSpec, lerp},
    foundation::core::FrameIndex,
    foundation::error::{FramecurveError, FramecurveResult},
};

/// Animated scalar property: a plain value spec, or a timing expression over other animations.
///
/// Every expression reduces to one or more [`ValueSpec`] resolutions at a remapped frame, so
/// sampling stays a pure function of `(anim, frame)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Anim {
    /// Constant or keyframed value.
    Spec(ValueSpec),
    /// Frame remapping or combination of inner animations.
    Expr(Expr),
}

impl Anim {
    /// Build a constant animation that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::Spec(ValueSpec::Constant(value))
    }

    /// Build a linear keyframed animation.
    pub fn keyframes(domain: Vec<f64>, range: Vec<f64>) -> FramecurveResult<Self> {
        ValueSpec::keyframes(domain, range).map(Self::Spec)
    }

    /// Sample the animation at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> FramecurveResult<f64> {
        match self {
            Self::Spec(spec) => Ok(spec.resolve(frame)),
            Self::Expr(expr) => expr.sample(frame),
        }
    }

    /// Validate static invariants for this animation tree.
    pub fn validate(&self) -> FramecurveResult<()> {
        match self {
            Self::Spec(spec) => spec.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

impl From<ValueSpec> for Anim {
    fn from(spec: ValueSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<f64> for Anim {
    fn from(v: f64) -> Self {
        Self::constant(v)
    }
}

impl<'de> Deserialize<'de> for Anim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Pair(KeyframePairDef),
            Expr(Expr),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Self::constant(v)),
            Repr::Pair(def) => KeyframePair::try_from(def)
                .map(|kf| Self::Spec(ValueSpec::Keyframes(kf)))
                .map_err(serde::de::Error::custom),
            Repr::Expr(expr) => Ok(Self::Expr(expr)),
        }
    }
}

/// Timing expression over inner animations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Start `inner` `by` frames later (negative values start it earlier).
    Delay {
        /// Animation being shifted.
        inner: Box<Anim>,
        /// Frame offset.
        by: i64,
    },
    /// Play `inner` at `factor` times its speed.
    Speed {
        /// Animation being retimed.
        inner: Box<Anim>,
        /// Playback rate, finite and > 0.
        factor: f64,
    },
    /// Play the first `duration` frames of `inner` backwards.
    Reverse {
        /// Animation being reversed.
        inner: Box<Anim>,
        /// Length of the reversed window in frames, > 0.
        duration: u64,
    },
    /// Repeat the first `period` frames of `inner`.
    Loop {
        /// Animation being looped.
        inner: Box<Anim>,
        /// Loop length in frames, > 0.
        period: u64,
        /// Repeat or bounce.
        #[serde(default)]
        mode: LoopMode,
    },
    /// Blend `a` toward `b` by `t` (clamped to `[0, 1]`).
    Mix {
        /// Value at `t = 0`.
        a: Box<Anim>,
        /// Value at `t = 1`.
        b: Box<Anim>,
        /// Blend factor.
        t: Box<Anim>,
    },
    /// Chain animations back to back; each segment sees frames relative to its own start.
    Sequence {
        /// Segments ordered by `start`.
        segments: Vec<Segment>,
    },
}

/// How [`Expr::Loop`] wraps frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// `0, 1, .., period-1, 0, 1, ..`
    #[default]
    Repeat,
    /// `0, 1, .., period-1, period-2, .., 1, 0, 1, ..`
    PingPong,
}

/// One link of an [`Expr::Sequence`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Frame at which this segment takes over.
    pub start: i64,
    /// Animation sampled at `frame - start`.
    pub anim: Anim,
}

impl Expr {
    /// Validate parameters of this node and every inner animation.
    pub fn validate(&self) -> FramecurveResult<()> {
        match self {
            Self::Delay { inner, by: _ } => inner.validate(),
            Self::Speed { inner, factor } => {
                check_speed(*factor)?;
                inner.validate()
            }
            Self::Reverse { inner, duration } => {
                frames_param("Reverse duration", *duration)?;
                inner.validate()
            }
            Self::Loop {
                inner,
                period,
                mode: _,
            } => {
                frames_param("Loop period", *period)?;
                inner.validate()
            }
            Self::Mix { a, b, t } => {
                a.validate()?;
                b.validate()?;
                t.validate()
            }
            Self::Sequence { segments } => {
                if segments.is_empty() {
                    return Err(FramecurveError::animation(
                        "Sequence must have at least one segment",
                    ));
                }
                if !segments.windows(2).all(|w| w[0].start <= w[1].start) {
                    return Err(FramecurveError::animation(
                        "Sequence segments must be sorted by start",
                    ));
                }
                segments.iter().try_for_each(|s| s.anim.validate())
            }
        }
    }

    /// Sample the expression at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> FramecurveResult<f64> {
        let f = frame.0;
        match self {
            Self::Delay { inner, by } => inner.sample(FrameIndex(f.saturating_sub(*by))),
            Self::Speed { inner, factor } => {
                check_speed(*factor)?;
                // `as` saturates on overflow.
                let mapped = ((f as f64) * factor).floor() as i64;
                inner.sample(FrameIndex(mapped))
            }
            Self::Reverse { inner, duration } => {
                let max = frames_param("Reverse duration", *duration)? - 1;
                inner.sample(FrameIndex(max - f.clamp(0, max)))
            }
            Self::Loop {
                inner,
                period,
                mode,
            } => {
                let period = frames_param("Loop period", *period)?;
                let mapped = match mode {
                    LoopMode::Repeat => f.rem_euclid(period),
                    LoopMode::PingPong => ping_pong(f, period)?,
                };
                inner.sample(FrameIndex(mapped))
            }
            Self::Mix { a, b, t } => {
                let tt = t.sample(frame)?.clamp(0.0, 1.0);
                let av = a.sample(frame)?;
                let bv = b.sample(frame)?;
                Ok(lerp(av, bv, tt))
            }
            Self::Sequence { segments } => {
                let idx = segments.partition_point(|s| s.start <= f);
                let seg = segments
                    .get(idx.saturating_sub(1))
                    .ok_or_else(|| FramecurveError::animation("Sequence has no segments"))?;
                seg.anim.sample(FrameIndex(f.saturating_sub(seg.start)))
            }
        }
    }
}

fn check_speed(factor: f64) -> FramecurveResult<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(FramecurveError::animation(
            "Speed factor must be finite and > 0",
        ));
    }
    Ok(())
}

fn frames_param(name: &str, v: u64) -> FramecurveResult<i64> {
    match i64::try_from(v) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FramecurveError::animation(format!(
            "{name} must be in 1..={}",
            i64::MAX
        ))),
    }
}

fn ping_pong(f: i64, period: i64) -> FramecurveResult<i64> {
    if period == 1 {
        return Ok(0);
    }
    let cycle = (period - 1)
        .checked_mul(2)
        .ok_or_else(|| FramecurveError::animation("Loop period too large for ping-pong"))?;
    let pos = f.rem_euclid(cycle);
    Ok(if pos < period { pos } else { cycle - pos })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
