use crate::foundation::error::{FramecurveError, FramecurveResult};

/// Discrete render instant. Negative frames are valid (pre-roll, seeking before a clip start).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

impl FrameIndex {
    /// Shift by `delta` frames, saturating at the `i64` bounds.
    pub fn offset(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Frame position on the continuous axis used by keyframe domains.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<i64> for FrameIndex {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> FramecurveResult<Self> {
        if start.0 > end.0 {
            return Err(FramecurveError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.abs_diff(self.start.0)
    }

    /// True when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// True when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Frames of the range in ascending order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> FramecurveResult<Self> {
        if den == 0 {
            return Err(FramecurveError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FramecurveError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of `frame` in seconds (negative for negative frames).
    pub fn frames_to_secs(self, frame: FrameIndex) -> f64 {
        frame.as_f64() * self.frame_duration_secs()
    }

    /// Frame containing the instant `secs`.
    pub fn secs_to_frame_floor(self, secs: f64) -> FrameIndex {
        FrameIndex((secs * self.as_f64()).floor() as i64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
