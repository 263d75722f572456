//! Utility Module
//!
//! - [`interner`]: String interning backing [`CurveKey`](crate::animation::CurveKey)
//!
//! # String Interning
//!
//! Interned strings (Symbols) compare and hash in O(1) time.
//!
//! ```rust,ignore
//! use clip_combiner::utils::interner;
//!
//! let sym1 = interner::intern("blendShape.vrc.v_oh");
//! let sym2 = interner::intern("blendShape.vrc.v_oh");
//! assert_eq!(sym1, sym2); // O(1) comparison
//! ```

pub mod interner;

pub use interner::Symbol;
