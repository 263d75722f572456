//! Decision Engine
//!
//! Partitions the curves of two sampled clips into left-only, right-only and
//! intersecting curves, and records for each one whether (and from which
//! side) it goes into the merged clip.
//!
//! # Default decisions
//!
//! - Left-only and right-only curves are included.
//! - An intersecting curve takes the side with the larger sample value. Ties
//!   go to the left.
//!
//! # Presentation order
//!
//! Each collection is an insertion-ordered map, grouped for display:
//!
//! | Collection     | Order                                                            |
//! |----------------|------------------------------------------------------------------|
//! | left / right   | non-zero samples, then zero samples                              |
//! | intersection   | differ & both non-zero, differ & one zero, equal non-zero, equal zero |
//!
//! Within a group, curves keep the order in which the sampler produced them.
//! The grouping never influences which side is chosen.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::animation::{CurveKey, SampledCurveKey};
use crate::errors::{CombinerError, Result};

/// One of the two clips being combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Side {
    type Error = CombinerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(CombinerError::InvalidArgument(format!("side index {other} out of range"))),
        }
    }
}

impl FromStr for Side {
    type Err = CombinerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(CombinerError::InvalidArgument(format!("unknown side '{s}'"))),
        }
    }
}

/// Which source populates an intersecting curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionChoice {
    UseLeft,
    UseRight,
    UseNone,
}

impl TryFrom<u8> for IntersectionChoice {
    type Error = CombinerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::UseLeft),
            1 => Ok(Self::UseRight),
            2 => Ok(Self::UseNone),
            other => Err(CombinerError::InvalidArgument(format!(
                "intersection choice index {other} out of range"
            ))),
        }
    }
}

impl FromStr for IntersectionChoice {
    type Err = CombinerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "useleft" => Ok(Self::UseLeft),
            "right" | "useright" => Ok(Self::UseRight),
            "none" | "usenone" => Ok(Self::UseNone),
            _ => Err(CombinerError::InvalidArgument(format!("unknown intersection choice '{s}'"))),
        }
    }
}

/// A curve present on exactly one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideDecider {
    pub key: CurveKey,
    pub sample_value: f32,
    pub included: bool,
}

/// A curve present on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionDecider {
    pub key: CurveKey,
    pub left_value: f32,
    pub right_value: f32,
    pub choice: IntersectionChoice,
}

impl IntersectionDecider {
    /// Picks the side with the larger sample; the left side wins ties.
    #[must_use]
    pub fn automatic(key: CurveKey, left_value: f32, right_value: f32) -> Self {
        let choice = if left_value >= right_value {
            IntersectionChoice::UseLeft
        } else {
            IntersectionChoice::UseRight
        };
        Self {
            key,
            left_value,
            right_value,
            choice,
        }
    }

    fn presentation_group(&self) -> u8 {
        let (l, r) = (self.left_value, self.right_value);
        match (l != r, l != 0.0 && r != 0.0, l != 0.0) {
            (true, true, _) => 0,
            (true, false, _) => 1,
            (false, _, true) => 2,
            (false, _, false) => 3,
        }
    }
}

pub type DeciderMap<T> = IndexMap<CurveKey, T, FxBuildHasher>;

/// All decisions for one pair of source clips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionSet {
    left: DeciderMap<SideDecider>,
    right: DeciderMap<SideDecider>,
    intersection: DeciderMap<IntersectionDecider>,
}

impl DecisionSet {
    /// Builds the default decisions for two sampled clips.
    ///
    /// Total over any input; empty inputs give empty collections.
    #[must_use]
    pub fn decide(left: &[SampledCurveKey], right: &[SampledCurveKey]) -> Self {
        let left_values = first_values(left);
        let right_values = first_values(right);

        let left_only = only_in(left, &left_values, &right_values);
        let right_only = only_in(right, &right_values, &left_values);

        let mut seen = FxHashSet::default();
        let mut intersection: Vec<IntersectionDecider> = left
            .iter()
            .filter(|s| seen.insert(s.key))
            .filter_map(|s| {
                let right_value = *right_values.get(&s.key)?;
                let left_value = left_values[&s.key];
                Some(IntersectionDecider::automatic(s.key, left_value, right_value))
            })
            .collect();
        intersection.sort_by_key(IntersectionDecider::presentation_group);

        log::debug!(
            "Decided {} left-only, {} right-only, {} intersecting curves",
            left_only.len(),
            right_only.len(),
            intersection.len()
        );

        Self {
            left: left_only,
            right: right_only,
            intersection: intersection.into_iter().map(|d| (d.key, d)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> &DeciderMap<SideDecider> {
        &self.left
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> &DeciderMap<SideDecider> {
        &self.right
    }

    #[inline]
    #[must_use]
    pub fn intersection(&self) -> &DeciderMap<IntersectionDecider> {
        &self.intersection
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &DeciderMap<SideDecider> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut DeciderMap<SideDecider> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Total number of deciders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.intersection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys to copy from the left clip.
    #[must_use]
    pub fn left_pull(&self) -> FxHashSet<CurveKey> {
        self.pull(Side::Left, IntersectionChoice::UseLeft)
    }

    /// Keys to copy from the right clip.
    #[must_use]
    pub fn right_pull(&self) -> FxHashSet<CurveKey> {
        self.pull(Side::Right, IntersectionChoice::UseRight)
    }

    fn pull(&self, side: Side, choice: IntersectionChoice) -> FxHashSet<CurveKey> {
        let included = self.side(side).values().filter(|d| d.included).map(|d| d.key);
        let chosen = self
            .intersection
            .values()
            .filter(|d| d.choice == choice)
            .map(|d| d.key);
        included.chain(chosen).collect()
    }

    /// Replaces the mutable fields of one side decider in place.
    pub fn update_side(&mut self, side: Side, key: &CurveKey, sample_value: f32, included: bool) -> Result<()> {
        let decider = self
            .side_mut(side)
            .get_mut(key)
            .ok_or(CombinerError::CurveNotFound {
                collection: side.as_str(),
                key: *key,
            })?;
        decider.sample_value = sample_value;
        decider.included = included;
        Ok(())
    }

    /// Replaces the choice of one intersection decider in place.
    pub fn update_intersection(&mut self, key: &CurveKey, choice: IntersectionChoice) -> Result<()> {
        let decider = self
            .intersection
            .get_mut(key)
            .ok_or(CombinerError::CurveNotFound {
                collection: "intersection",
                key: *key,
            })?;
        decider.choice = choice;
        Ok(())
    }
}

/// Sample value per key; the first sample of a repeated key wins.
fn first_values(samples: &[SampledCurveKey]) -> FxHashMap<CurveKey, f32> {
    let mut values = FxHashMap::default();
    for s in samples {
        values.entry(s.key).or_insert(s.sample_value);
    }
    values
}

/// Side deciders for the samples of `own` missing from `other`, non-zero
/// samples first.
fn only_in(
    own: &[SampledCurveKey],
    own_values: &FxHashMap<CurveKey, f32>,
    other_values: &FxHashMap<CurveKey, f32>,
) -> DeciderMap<SideDecider> {
    let mut seen = FxHashSet::default();
    let (non_zero, zero): (Vec<SideDecider>, Vec<SideDecider>) = own
        .iter()
        .filter(|s| !other_values.contains_key(&s.key) && seen.insert(s.key))
        .map(|s| SideDecider {
            key: s.key,
            sample_value: own_values[&s.key],
            included: true,
        })
        .partition(|d| d.sample_value != 0.0);

    non_zero.into_iter().chain(zero).map(|d| (d.key, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::CurveKind;

    fn sampled(name: &str, value: f32) -> SampledCurveKey {
        SampledCurveKey::new(CurveKey::new("Body", name, CurveKind::BlendShape), value)
    }

    #[test]
    fn side_deciders_list_non_zero_first() {
        let left = [sampled("a", 0.0), sampled("b", 0.4), sampled("c", 0.0), sampled("d", 1.0)];
        let decisions = DecisionSet::decide(&left, &[]);

        let order: Vec<&str> = decisions.left().keys().map(CurveKey::property).collect();
        assert_eq!(order, ["b", "d", "a", "c"]);
        assert!(decisions.left().values().all(|d| d.included));
    }

    #[test]
    fn intersection_groups_in_display_order() {
        let left = [
            sampled("equal_zero", 0.0),
            sampled("equal", 0.5),
            sampled("one_zero", 0.0),
            sampled("differ", 0.2),
        ];
        let right = [
            sampled("equal_zero", 0.0),
            sampled("equal", 0.5),
            sampled("one_zero", 0.7),
            sampled("differ", 0.9),
        ];
        let decisions = DecisionSet::decide(&left, &right);

        let order: Vec<&str> = decisions.intersection().keys().map(CurveKey::property).collect();
        assert_eq!(order, ["differ", "one_zero", "equal", "equal_zero"]);
    }

    #[test]
    fn parses_raw_ui_values() {
        assert_eq!(Side::try_from(1_u8).unwrap(), Side::Right);
        assert!(matches!(Side::try_from(2_u8), Err(CombinerError::InvalidArgument(_))));
        assert_eq!("None".parse::<IntersectionChoice>().unwrap(), IntersectionChoice::UseNone);
        assert!(matches!(
            IntersectionChoice::try_from(3_u8),
            Err(CombinerError::InvalidArgument(_))
        ));
        assert!("middle".parse::<Side>().is_err());
    }
}
