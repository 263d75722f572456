//! Global String Interner
//!
//! Curve paths and property names repeat across every clip that animates the
//! same avatar, so they are stored once and compared as integer [`Symbol`]s.
//! This is what makes [`CurveKey`](crate::animation::CurveKey) `Copy` and
//! cheap to hash.

use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;

static INTERNER: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::new);

/// Compact integer identifier of an interned string.
pub type Symbol = Spur;

/// Interns a string, returning the existing [`Symbol`] if it was seen before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up the [`Symbol`] of an already interned string without allocating.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a [`Symbol`] back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}
