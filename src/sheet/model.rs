use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    animation::anim::Anim,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{FramecurveError, FramecurveResult},
};

/// Named animated properties sharing one frame rate and duration.
///
/// This is the JSON-facing configuration document:
///
/// ```json
/// {
///   "fps": { "num": 30, "den": 1 },
///   "duration": 60,
///   "properties": {
///     "title.opacity": { "domain": [0, 20], "range": [0, 1] },
///     "title.blur": 0
///   }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertySheet {
    /// Frame rate used to report timestamps.
    pub fps: Fps,
    /// Number of frames in the nominal timeline `[0, duration)`.
    pub duration: u64,
    /// Animated properties keyed by name; iteration order is stable.
    #[serde(default)]
    pub properties: BTreeMap<String, Anim>,
}

impl PropertySheet {
    /// Empty sheet.
    pub fn new(fps: Fps, duration: u64) -> Self {
        Self {
            fps,
            duration,
            properties: BTreeMap::new(),
        }
    }

    /// Add or replace a property.
    pub fn with_property(mut self, name: impl Into<String>, anim: impl Into<Anim>) -> Self {
        self.properties.insert(name.into(), anim.into());
        self
    }

    /// Parse and validate a sheet from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramecurveResult<Self> {
        let sheet: Self = serde_json::from_reader(r)
            .map_err(|e| FramecurveError::serde(format!("parse property sheet JSON: {e}")))?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Parse and validate a sheet from a JSON string.
    pub fn from_json_str(s: &str) -> FramecurveResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a sheet from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramecurveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| FramecurveError::io("open property sheet JSON", path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> FramecurveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check frame rate, duration, property names and every animation.
    pub fn validate(&self) -> FramecurveResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.duration == 0 {
            return Err(FramecurveError::validation("duration must be > 0 frames"));
        }
        if i64::try_from(self.duration).is_err() {
            return Err(FramecurveError::validation(format!(
                "duration must be <= {} frames",
                i64::MAX
            )));
        }
        for (name, anim) in &self.properties {
            if name.trim().is_empty() {
                return Err(FramecurveError::validation(
                    "property names must be non-empty",
                ));
            }
            anim.validate().map_err(|e| {
                FramecurveError::validation(format!("property '{name}': {e}"))
            })?;
        }
        Ok(())
    }

    /// Nominal timeline `[0, duration)`.
    pub fn timeline(&self) -> FramecurveResult<FrameRange> {
        let end = i64::try_from(self.duration)
            .map_err(|_| FramecurveError::validation("duration does not fit in a frame index"))?;
        FrameRange::new(FrameIndex(0), FrameIndex(end))
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Anim> {
        self.properties.get(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/model.rs"]
mod tests;
