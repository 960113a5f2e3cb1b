//! framecurve resolves declarative, frame-addressable animation values for programmatic video.
//!
//! Every animated property (opacity, offset, blur radius, color-mix progress) is declared once
//! as a function of the frame counter. Resolution is a pure function of `(spec, frame)`, so a
//! renderer can seek, scrub, re-render or evaluate frames in parallel without carrying
//! animation state between calls.
//!
//! # Layers
//!
//! 1. **Resolve**: [`ValueSpec`] + [`FrameIndex`] -> `f64`. A spec is a constant or a
//!    [`KeyframePair`] (piecewise-linear with edge clamping, optional per-segment [`Ease`]).
//! 2. **Compose**: [`Anim`] wraps specs in timing expressions ([`delay`], [`speed`],
//!    [`reverse`], [`loop_`], [`mix`], [`sequence`], [`stagger`]).
//! 3. **Evaluate**: a [`PropertySheet`] of named animations resolved per frame by
//!    [`Evaluator`] into a [`ResolvedFrame`].
//!
//! ```
//! use framecurve::{FrameIndex, ValueSpec};
//!
//! let opacity = ValueSpec::keyframes(vec![0.0, 20.0], vec![0.0, 1.0]).unwrap();
//! assert_eq!(opacity.resolve(FrameIndex(0)), 0.0);
//! assert_eq!(opacity.resolve(FrameIndex(10)), 0.5);
//! assert_eq!(opacity.resolve(FrameIndex(40)), 1.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod sheet;

pub use animation::anim::{Anim, Expr, LoopMode, Segment};
pub use animation::ease::Ease;
pub use animation::ops::{
    delay, loop_, mix, reverse, sequence, speed, stagger, stagger_offset, then,
};
pub use animation::resolve::{interpolate, resolve};
pub use animation::spec::{KeyframePair, ValueSpec};
pub use eval::evaluator::{EvalThreading, Evaluator, MAX_EVAL_FRAMES, ResolvedFrame};
pub use foundation::core::{Fps, FrameIndex, FrameRange};
pub use foundation::error::{FramecurveError, FramecurveResult};
pub use sheet::model::PropertySheet;
