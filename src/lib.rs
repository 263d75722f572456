#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Per-curve combination of two animation clips.
//!
//! Given a left and a right clip, every animated curve is classified as
//! left-only, right-only or shared, a default decision is taken for each one,
//! and a merged clip is synthesized from the winning curves. Decisions can be
//! overridden one at a time; the merged clip is rebuilt after each override.
//!
//! See [`combiner`] for the pipeline and [`ComboSession`] for the interactive
//! entry point.

pub mod animation;
pub mod combiner;
pub mod errors;
pub mod settings;
pub mod utils;

pub use animation::{AnimationClip, ClipSettings, CurveBinding, CurveKey, CurveKind, KeyframeTrack, TargetType};
pub use combiner::{ComboSession, DecisionSet, IntersectionChoice, Side};
pub use errors::{CombinerError, Result};
pub use settings::CombinerSettings;
pub use utils::interner;
