use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramecurveError, FramecurveResult},
    sheet::model::PropertySheet,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Every property of a sheet resolved at one frame.
pub struct ResolvedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Timestamp of `frame` at the sheet's frame rate.
    pub seconds: f64,
    /// Resolved values keyed by property name.
    pub values: BTreeMap<String, f64>,
}

impl ResolvedFrame {
    /// Resolved value of one property.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// Largest frame range [`Evaluator::eval_frames`] resolves in one call.
///
/// Every resolved frame is held in memory; longer tables are split by the caller.
pub const MAX_EVAL_FRAMES: u64 = 1 << 20;

/// How [`Evaluator::eval_frames`] spreads work.
#[derive(Clone, Debug, Default)]
pub struct EvalThreading {
    /// Resolve frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Stateless evaluator from property sheet to resolved values.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(sheet))]
    /// Validate `sheet` and resolve every property at `frame`.
    ///
    /// Frames outside the sheet's nominal timeline are still resolved; keyframe clamping
    /// defines their values.
    pub fn eval_frame(sheet: &PropertySheet, frame: FrameIndex) -> FramecurveResult<ResolvedFrame> {
        sheet.validate()?;
        Self::eval_frame_unchecked(sheet, frame)
    }

    #[tracing::instrument(skip(sheet, threading))]
    /// Validate `sheet` once and resolve every frame of `range`, in frame order.
    ///
    /// Ranges longer than [`MAX_EVAL_FRAMES`] are rejected before any work starts.
    ///
    /// Serial and parallel evaluation return identical output.
    pub fn eval_frames(
        sheet: &PropertySheet,
        range: FrameRange,
        threading: &EvalThreading,
    ) -> FramecurveResult<Vec<ResolvedFrame>> {
        if range.is_empty() {
            return Err(FramecurveError::validation("eval range must be non-empty"));
        }
        if range.len_frames() > MAX_EVAL_FRAMES {
            return Err(FramecurveError::validation(format!(
                "eval range covers {} frames; at most {MAX_EVAL_FRAMES} per call",
                range.len_frames()
            )));
        }
        sheet.validate()?;

        if !threading.parallel {
            return range
                .frames()
                .map(|f| Self::eval_frame_unchecked(sheet, f))
                .collect();
        }

        let pool = build_thread_pool(threading.threads)?;
        tracing::debug!(
            threads = pool.current_num_threads(),
            frames = range.len_frames(),
            "parallel sheet evaluation"
        );
        pool.install(|| {
            (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| Self::eval_frame_unchecked(sheet, FrameIndex(f)))
                .collect()
        })
    }

    pub(crate) fn eval_frame_unchecked(
        sheet: &PropertySheet,
        frame: FrameIndex,
    ) -> FramecurveResult<ResolvedFrame> {
        if frame.0 < 0 || frame.0.unsigned_abs() >= sheet.duration {
            tracing::debug!(frame = frame.0, "frame outside sheet timeline; clamping applies");
        }

        let mut values = BTreeMap::new();
        for (name, anim) in &sheet.properties {
            let v = anim.sample(frame).map_err(|e| {
                FramecurveError::evaluation(format!("property '{name}' at frame {}: {e}", frame.0))
            })?;
            tracing::trace!(property = name.as_str(), value = v);
            values.insert(name.clone(), v);
        }

        Ok(ResolvedFrame {
            frame,
            seconds: sheet.fps.frames_to_secs(frame),
            values,
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> FramecurveResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramecurveError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        FramecurveError::from(anyhow::Error::new(e).context("build rayon thread pool"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
