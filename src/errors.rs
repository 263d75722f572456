//! Error Types
//!
//! This module defines the error types used throughout the combiner.
//!
//! # Overview
//!
//! The main error type [`CombinerError`] covers:
//! - Override requests that reference a curve missing from the decision set
//! - Out-of-range side or choice values coming from a UI
//! - Source clips that violate sampling preconditions
//! - Settings and clip (de)serialization failures
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, CombinerError>`.
//!
//! ```rust,ignore
//! use clip_combiner::errors::{CombinerError, Result};
//!
//! fn toggle(session: &mut ComboSession, key: CurveKey) -> Result<()> {
//!     session.update_intersection(&key, IntersectionChoice::UseNone)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::animation::CurveKey;

/// The main error type for the clip combiner.
#[derive(Error, Debug)]
pub enum CombinerError {
    // ========================================================================
    // Override Errors
    // ========================================================================
    /// An override referenced a curve that is not part of the addressed
    /// decision collection. The caller holds a stale key and must refresh.
    #[error("Curve {key} not found in {collection} deciders")]
    CurveNotFound {
        /// `"left"`, `"right"` or `"intersection"`
        collection: &'static str,
        /// The key that was looked up
        key: CurveKey,
    },

    /// An out-of-range side or choice value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ========================================================================
    // Source Clip Errors
    // ========================================================================
    /// A curve without keyframes has no representative sample.
    #[error("Curve {key} has no keyframes")]
    EmptyCurve {
        /// The offending curve
        key: CurveKey,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, CombinerError>`.
pub type Result<T> = std::result::Result<T, CombinerError>;
