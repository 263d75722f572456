use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::animation::{AnimationClip, CurveKey};
use crate::combiner::decider::{DecisionSet, IntersectionChoice, Side};
use crate::combiner::naming;
use crate::combiner::sampler::CurveSampler;
use crate::combiner::synthesizer::synthesize;
use crate::errors::Result;
use crate::settings::CombinerSettings;

/// Combination of one pair of source clips.
///
/// The session owns the [`DecisionSet`] and the current merged clip. Every
/// override mutates one decider in place and rebuilds the merged clip; the
/// source clips are never sampled again until [`set_sources`](Self::set_sources)
/// swaps them.
///
/// The merged clip is handed out as an `Arc` and never mutated afterwards:
/// each resynthesis produces a new clip.
pub struct ComboSession {
    sampler: CurveSampler,
    left: Arc<AnimationClip>,
    right: Arc<AnimationClip>,
    decisions: DecisionSet,
    merged: Arc<AnimationClip>,
    on_synthesized: Option<Box<dyn FnMut()>>,
}

impl ComboSession {
    /// Samples both clips, builds the default decisions and the initial
    /// merged clip.
    pub fn new(left: Arc<AnimationClip>, right: Arc<AnimationClip>, settings: CombinerSettings) -> Result<Self> {
        let sampler = CurveSampler::new(settings);
        let decisions = Self::prepare(&sampler, &left, &right)?;
        let merged = Arc::new(synthesize(&left, &right, &decisions));

        Ok(Self {
            sampler,
            left,
            right,
            decisions,
            merged,
            on_synthesized: None,
        })
    }

    fn prepare(sampler: &CurveSampler, left: &AnimationClip, right: &AnimationClip) -> Result<DecisionSet> {
        let left_samples = sampler.sample(left)?;
        let right_samples = sampler.sample(right)?;
        let decisions = DecisionSet::decide(&left_samples, &right_samples);

        log::info!(
            "Combining '{}' with '{}': {} left-only, {} right-only, {} shared curves",
            left.name,
            right.name,
            decisions.left().len(),
            decisions.right().len(),
            decisions.intersection().len()
        );
        Ok(decisions)
    }

    /// Registers the hook invoked after every resynthesis.
    pub fn set_on_synthesized(&mut self, hook: impl FnMut() + 'static) {
        self.on_synthesized = Some(Box::new(hook));
    }

    pub fn clear_on_synthesized(&mut self) {
        self.on_synthesized = None;
    }

    /// Replaces the source pair, discarding all decisions.
    ///
    /// On error the session keeps its previous sources and decisions.
    pub fn set_sources(&mut self, left: Arc<AnimationClip>, right: Arc<AnimationClip>) -> Result<()> {
        self.decisions = Self::prepare(&self.sampler, &left, &right)?;
        self.left = left;
        self.right = right;
        self.resynthesize();
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &CombinerSettings {
        self.sampler.settings()
    }

    #[inline]
    #[must_use]
    pub fn left_clip(&self) -> &Arc<AnimationClip> {
        &self.left
    }

    #[inline]
    #[must_use]
    pub fn right_clip(&self) -> &Arc<AnimationClip> {
        &self.right
    }

    #[inline]
    #[must_use]
    pub fn decisions(&self) -> &DecisionSet {
        &self.decisions
    }

    #[inline]
    #[must_use]
    pub fn merged_clip(&self) -> &Arc<AnimationClip> {
        &self.merged
    }

    /// Sets whether a left-only or right-only curve is included, echoing its
    /// sample value, then resynthesizes.
    pub fn update_side(
        &mut self,
        side: Side,
        key: &CurveKey,
        sample_value: f32,
        included: bool,
    ) -> Result<Arc<AnimationClip>> {
        self.decisions.update_side(side, key, sample_value, included)?;
        log::debug!("{side} curve {key} included: {included}");
        Ok(self.resynthesize())
    }

    /// Sets the source of an intersecting curve, then resynthesizes.
    pub fn update_intersection(&mut self, key: &CurveKey, choice: IntersectionChoice) -> Result<Arc<AnimationClip>> {
        self.decisions.update_intersection(key, choice)?;
        log::debug!("Intersecting curve {key} set to {choice:?}");
        Ok(self.resynthesize())
    }

    /// Rebuilds the merged clip from the current decisions and notifies the
    /// registered hook.
    pub fn resynthesize(&mut self) -> Arc<AnimationClip> {
        self.merged = Arc::new(synthesize(&self.left, &self.right, &self.decisions));
        if let Some(hook) = self.on_synthesized.as_mut() {
            hook();
        }
        Arc::clone(&self.merged)
    }

    /// Where the persistence collaborator should save the merged clip, given
    /// the left source's asset path.
    pub fn asset_path(&self, source_asset: &Path, candidate: &str) -> Result<PathBuf> {
        let path = naming::combined_asset_path_now(source_asset, candidate, self.settings())?;
        log::info!("Merged clip '{}' will be saved to {}", self.merged.name, path.display());
        Ok(path)
    }
}

impl fmt::Debug for ComboSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboSession")
            .field("left", &self.left.name)
            .field("right", &self.right.name)
            .field("decisions", &self.decisions)
            .field("merged", &self.merged.name)
            .field("has_hook", &self.on_synthesized.is_some())
            .finish_non_exhaustive()
    }
}
