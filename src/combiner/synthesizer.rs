use rustc_hash::FxHashSet;

use crate::animation::{AnimationClip, CurveKey};
use crate::combiner::decider::DecisionSet;

/// Rebuilds the merged clip from scratch for the given decisions.
///
/// The merged clip inherits the left clip's settings. Curves pulled from the
/// left clip (included left-only curves and intersections set to `UseLeft`)
/// and from the right clip (included right-only curves and intersections set
/// to `UseRight`) are copied with their full keyframe data. Everything else is
/// left out. Neither source clip is modified.
#[must_use]
pub fn synthesize(left: &AnimationClip, right: &AnimationClip, decisions: &DecisionSet) -> AnimationClip {
    let name = format!("{} + {}", left.name, right.name);
    let mut merged = AnimationClip::with_settings(name, left.settings.clone());

    copy_curves(left, &mut merged, &decisions.left_pull());
    copy_curves(right, &mut merged, &decisions.right_pull());

    log::debug!(
        "Synthesized '{}' with {} of {} decided curves",
        merged.name,
        merged.len(),
        decisions.len()
    );
    merged
}

fn copy_curves(source: &AnimationClip, destination: &mut AnimationClip, keep: &FxHashSet<CurveKey>) {
    for track in source.tracks() {
        if keep.contains(&CurveKey::from_binding(&track.binding)) {
            destination.set_curve(track.binding.clone(), track.curve.clone());
        }
    }
}
