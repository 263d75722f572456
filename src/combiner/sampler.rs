use rustc_hash::FxHashSet;

use crate::animation::{AnimationClip, CurveKey, SampledCurveKey};
use crate::errors::{CombinerError, Result};
use crate::settings::CombinerSettings;
use crate::utils::interner;

/// Extracts the participating curves of a clip, each with a representative
/// sample value.
#[derive(Debug, Clone, Default)]
pub struct CurveSampler {
    settings: CombinerSettings,
}

impl CurveSampler {
    #[must_use]
    pub fn new(settings: CombinerSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &CombinerSettings {
        &self.settings
    }

    /// Whether a curve takes part in combination at all.
    #[must_use]
    pub fn accepts(&self, key: &CurveKey) -> bool {
        if self.settings.exclude_muscle_curves && key.is_muscle_curve() {
            return false;
        }
        // A path nobody interned yet cannot belong to any key
        interner::get(&self.settings.ignored_path) != Some(key.path_symbol())
    }

    /// Samples every retained curve of `clip`.
    ///
    /// The result holds one entry per [`CurveKey`], in track order. The sample
    /// is the value of the curve's first keyframe; a retained curve with no
    /// keyframes is rejected with [`CombinerError::EmptyCurve`]. Later duplicates
    /// of a key are dropped before that check.
    pub fn sample(&self, clip: &AnimationClip) -> Result<Vec<SampledCurveKey>> {
        let mut seen = FxHashSet::default();
        let mut samples = Vec::with_capacity(clip.len());

        for track in clip.tracks() {
            let key = CurveKey::from_binding(&track.binding);
            if !self.accepts(&key) {
                continue;
            }

            if !seen.insert(key) {
                log::debug!("Clip '{}': duplicate curve {key}, keeping first", clip.name);
                continue;
            }

            let value = track
                .curve
                .first_value()
                .ok_or(CombinerError::EmptyCurve { key })?;
            samples.push(SampledCurveKey::new(key, value));
        }

        log::debug!(
            "Clip '{}': sampled {} of {} curves",
            clip.name,
            samples.len(),
            clip.len()
        );
        Ok(samples)
    }
}
