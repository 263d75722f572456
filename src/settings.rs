//! Combiner Settings
//!
//! [`CombinerSettings`] controls which curves take part in a combination and
//! how the merged clip is named when it is handed to persistence.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use clip_combiner::CombinerSettings;
//!
//! // Defaults: skip muscle curves and the "_ignored" path, write ".anim" files
//! let settings = CombinerSettings::default();
//!
//! // Keep muscle curves, e.g. when combining full-body poses
//! let settings = CombinerSettings::default().with_muscle_curves(true);
//!
//! // Or load from JSON; missing fields fall back to defaults
//! let settings = CombinerSettings::from_json(r#"{ "ignored_path": "_skip" }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Reserved object path meaning "intentionally excluded from combination".
pub const DEFAULT_IGNORED_PATH: &str = "_ignored";

/// Extension of saved clip assets.
pub const DEFAULT_ASSET_EXTENSION: &str = "anim";

/// `chrono` format of the timestamp embedded in saved asset names.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinerSettings {
    /// Curves whose object path equals this value are never sampled.
    pub ignored_path: String,

    /// Drop humanoid muscle, root motion and IK goal curves while sampling.
    pub exclude_muscle_curves: bool,

    /// Extension used by [`combined_asset_path`](crate::combiner::naming::combined_asset_path).
    pub asset_extension: String,

    /// Timestamp format used by [`combined_asset_path`](crate::combiner::naming::combined_asset_path).
    pub timestamp_format: String,
}

impl Default for CombinerSettings {
    fn default() -> Self {
        Self {
            ignored_path: DEFAULT_IGNORED_PATH.to_owned(),
            exclude_muscle_curves: true,
            asset_extension: DEFAULT_ASSET_EXTENSION.to_owned(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }
}

impl CombinerSettings {
    /// Parses settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_ignored_path(mut self, path: impl Into<String>) -> Self {
        self.ignored_path = path.into();
        self
    }

    /// `true` keeps muscle curves in the combination.
    #[must_use]
    pub fn with_muscle_curves(mut self, keep: bool) -> Self {
        self.exclude_muscle_curves = !keep;
        self
    }

    #[must_use]
    pub fn with_asset_extension(mut self, extension: impl Into<String>) -> Self {
        self.asset_extension = extension.into();
        self
    }
}
