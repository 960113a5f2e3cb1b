//! Declarative value specifications and the piecewise-linear resolver behind them.
//!
//! A [`ValueSpec`] is either a constant or a [`KeyframePair`]: an ordered `domain` of frame
//! positions and an index-aligned `range` of output values. Resolving a spec at a frame is a
//! pure function of `(spec, frame)`; nothing is cached between calls, so frames may be queried
//! in any order and any number of times.

use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    foundation::core::FrameIndex,
    foundation::error::{FramecurveError, FramecurveResult},
};

/// Time-invariant value or keyframed curve.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValueSpec {
    /// Same value for every frame.
    Constant(f64),
    /// Piecewise curve through explicit control points.
    Keyframes(KeyframePair),
}

impl ValueSpec {
    /// Build a constant spec.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Build a keyframed spec with linear segments, validating the control points.
    pub fn keyframes(domain: Vec<f64>, range: Vec<f64>) -> FramecurveResult<Self> {
        KeyframePair::new(domain, range).map(Self::Keyframes)
    }

    /// Resolve the spec at `frame`.
    pub fn resolve(&self, frame: FrameIndex) -> f64 {
        self.resolve_at(frame.as_f64())
    }

    /// Resolve the spec at a continuous position on the frame axis.
    pub fn resolve_at(&self, position: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Keyframes(kf) => kf.resolve_at(position),
        }
    }

    /// Check the spec's shape invariants. Constants always pass.
    pub fn validate(&self) -> FramecurveResult<()> {
        match self {
            Self::Constant(_) => Ok(()),
            Self::Keyframes(kf) => kf.validate(),
        }
    }
}

impl From<f64> for ValueSpec {
    fn from(v: f64) -> Self {
        Self::Constant(v)
    }
}

impl From<KeyframePair> for ValueSpec {
    fn from(kf: KeyframePair) -> Self {
        Self::Keyframes(kf)
    }
}

impl<'de> Deserialize<'de> for ValueSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Pair(KeyframePairDef),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Self::Constant(v)),
            Repr::Pair(def) => KeyframePair::try_from(def)
                .map(Self::Keyframes)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Index-aligned control points: `domain[i]` maps to `range[i]`.
///
/// Invariants, checked on construction and on deserialization:
/// - `domain` and `range` have the same length, at least two;
/// - `domain` is non-decreasing (a repeated position is an instantaneous step);
/// - every value is finite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframePair {
    domain: Vec<f64>,
    range: Vec<f64>,
    ease: Ease,
}

impl KeyframePair {
    /// Build a pair with linear segments.
    pub fn new(domain: Vec<f64>, range: Vec<f64>) -> FramecurveResult<Self> {
        validate_control_points(&domain, &range)?;
        Ok(Self {
            domain,
            range,
            ease: Ease::Linear,
        })
    }

    /// Replace the easing applied inside every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Control point positions on the frame axis.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// Control point values.
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    /// Per-segment easing.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Re-check the shape invariants.
    pub fn validate(&self) -> FramecurveResult<()> {
        validate_control_points(&self.domain, &self.range)
    }

    /// Resolve at `frame` with edge clamping.
    pub fn resolve(&self, frame: FrameIndex) -> f64 {
        self.resolve_at(frame.as_f64())
    }

    /// Resolve at a continuous position with edge clamping.
    pub fn resolve_at(&self, position: f64) -> f64 {
        sample_control_points(&self.domain, &self.range, self.ease, position)
    }
}

/// Wire form of a [`KeyframePair`]; unknown keys are rejected.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct KeyframePairDef {
    domain: Vec<f64>,
    range: Vec<f64>,
    #[serde(default)]
    ease: Ease,
}

impl TryFrom<KeyframePairDef> for KeyframePair {
    type Error = FramecurveError;

    fn try_from(def: KeyframePairDef) -> FramecurveResult<Self> {
        Ok(Self::new(def.domain, def.range)?.with_ease(def.ease))
    }
}

pub(crate) fn validate_control_points(domain: &[f64], range: &[f64]) -> FramecurveResult<()> {
    if domain.len() != range.len() {
        return Err(FramecurveError::validation(format!(
            "keyframe domain and range must have the same length (got {} and {})",
            domain.len(),
            range.len()
        )));
    }
    if domain.len() < 2 {
        return Err(FramecurveError::validation(format!(
            "keyframes need at least two control points (got {})",
            domain.len()
        )));
    }
    if let Some(i) = domain.iter().position(|d| !d.is_finite()) {
        return Err(FramecurveError::validation(format!(
            "keyframe domain[{i}] must be finite"
        )));
    }
    if let Some(i) = range.iter().position(|r| !r.is_finite()) {
        return Err(FramecurveError::validation(format!(
            "keyframe range[{i}] must be finite"
        )));
    }
    if let Some(i) = domain.windows(2).position(|w| w[1] < w[0]) {
        return Err(FramecurveError::validation(format!(
            "keyframe domain must be non-decreasing (domain[{}] = {} follows domain[{}] = {})",
            i + 1,
            domain[i + 1],
            i,
            domain[i]
        )));
    }
    Ok(())
}

/// Caller guarantees the slices passed [`validate_control_points`].
pub(crate) fn sample_control_points(domain: &[f64], range: &[f64], ease: Ease, x: f64) -> f64 {
    // Index of the first control point strictly after `x`. Repeated positions at or before
    // `x` are all skipped, so a step is already applied on its own frame.
    let idx = domain.partition_point(|&d| d <= x);

    if idx == 0 {
        return range[0];
    }
    if idx >= domain.len() {
        return range[range.len() - 1];
    }

    // domain[idx - 1] <= x < domain[idx], so the segment has non-zero width.
    let (d0, d1) = (domain[idx - 1], domain[idx]);
    let (r0, r1) = (range[idx - 1], range[idx]);
    let t = ease.apply(segment_progress(d0, d1, x));
    lerp(r0, r1, t)
}

/// Position of `x` in `[d0, d1)` as a fraction. Finite inputs always give a finite result.
fn segment_progress(d0: f64, d1: f64, x: f64) -> f64 {
    let span = d1 - d0;
    if span.is_finite() {
        (x - d0) / span
    } else {
        // Span beyond f64::MAX; halving both terms keeps them finite.
        (0.5 * x - 0.5 * d0) / (0.5 * d1 - 0.5 * d0)
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let delta = b - a;
    if delta.is_finite() {
        a + delta * t
    } else {
        a * (1.0 - t) + b * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
