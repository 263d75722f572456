pub mod binding;
pub mod clip;
pub mod curve_key;
pub mod tracks;

pub use binding::{CurveBinding, TargetType};
pub use clip::{AnimationClip, ClipSettings, LoopMode, Track};
pub use curve_key::{CurveKey, CurveKind, SampledCurveKey};
pub use tracks::{InterpolationMode, Keyframe, KeyframeTrack};
