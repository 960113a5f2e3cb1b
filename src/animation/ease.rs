use std::f64::consts::FRAC_PI_2;

/// Easing curve applied to the fractional position inside one keyframe segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity curve; plain piecewise-linear interpolation.
    #[default]
    Linear,
    /// Quadratic acceleration.
    InQuad,
    /// Quadratic deceleration.
    OutQuad,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration.
    InCubic,
    /// Cubic deceleration.
    OutCubic,
    /// Cubic acceleration then deceleration.
    InOutCubic,
    /// Quarter-cosine acceleration.
    InSine,
    /// Quarter-sine deceleration.
    OutSine,
    /// Half-cosine acceleration then deceleration.
    InOutSine,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
    ];

    /// Map `t` through the curve.
    ///
    /// `t` is clamped to `[0, 1]` and the endpoints map exactly onto themselves, so an eased
    /// segment still lands on its control values.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => quad(t),
            Self::OutQuad => ease_out(t, quad),
            Self::InOutQuad => ease_in_out(t, quad),
            Self::InCubic => cubic(t),
            Self::OutCubic => ease_out(t, cubic),
            Self::InOutCubic => ease_in_out(t, cubic),
            Self::InSine => sine(t),
            Self::OutSine => ease_out(t, sine),
            Self::InOutSine => ease_in_out(t, sine),
        }
    }
}

fn quad(t: f64) -> f64 {
    t * t
}

fn cubic(t: f64) -> f64 {
    t * t * t
}

fn sine(t: f64) -> f64 {
    1.0 - (t * FRAC_PI_2).cos()
}

fn ease_out(t: f64, ease_in: fn(f64) -> f64) -> f64 {
    1.0 - ease_in(1.0 - t)
}

fn ease_in_out(t: f64, ease_in: fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
