use crate::{
    animation::ease::Ease,
    animation::spec::{ValueSpec, sample_control_points, validate_control_points},
    foundation::core::FrameIndex,
    foundation::error::FramecurveResult,
};

/// Validate `spec`, then resolve it at `frame`.
///
/// [`ValueSpec::resolve`] is the unchecked form; a [`crate::KeyframePair`] can only be built
/// through validating constructors, so both agree on every spec that exists.
pub fn resolve(spec: &ValueSpec, frame: FrameIndex) -> FramecurveResult<f64> {
    spec.validate()?;
    Ok(spec.resolve(frame))
}

/// One-shot linear interpolation over raw control point slices.
///
/// Fails on a malformed shape (length mismatch, fewer than two points, decreasing or
/// non-finite domain). Frames outside the domain clamp to the first/last range value.
///
/// ```
/// use framecurve::{FrameIndex, interpolate};
///
/// let opacity = interpolate(FrameIndex(5), &[0.0, 20.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(opacity, 0.25);
/// ```
pub fn interpolate(frame: FrameIndex, domain: &[f64], range: &[f64]) -> FramecurveResult<f64> {
    validate_control_points(domain, range)?;
    Ok(sample_control_points(
        domain,
        range,
        Ease::Linear,
        frame.as_f64(),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/resolve.rs"]
mod tests;
