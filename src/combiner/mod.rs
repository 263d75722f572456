//! Clip Combination
//!
//! Combines two animation clips curve by curve:
//!
//! 1. [`CurveSampler`] lists the participating curves of each clip with a
//!    representative value.
//! 2. [`DecisionSet::decide`] partitions them into left-only, right-only and
//!    intersecting curves with default decisions.
//! 3. [`synthesize`] copies the winning curves into a new clip.
//!
//! [`ComboSession`] ties the steps together and lets a UI override single
//! decisions; each override loops back through step 3 only.
//!
//! ```rust,ignore
//! use clip_combiner::combiner::{ComboSession, IntersectionChoice};
//!
//! let mut session = ComboSession::new(left, right, CombinerSettings::default())?;
//! session.set_on_synthesized(|| preview.refresh());
//!
//! let key = *session.decisions().intersection().keys().next().unwrap();
//! let merged = session.update_intersection(&key, IntersectionChoice::UseNone)?;
//! ```

pub mod decider;
pub mod naming;
pub mod sampler;
pub mod session;
pub mod synthesizer;

pub use decider::{DecisionSet, IntersectionChoice, IntersectionDecider, Side, SideDecider};
pub use naming::combined_asset_path;
pub use sampler::CurveSampler;
pub use session::ComboSession;
pub use synthesizer::synthesize;
