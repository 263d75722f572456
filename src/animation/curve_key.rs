//! Curve Identity
//!
//! [`CurveKey`] is the canonical identity of an animated property: which
//! object, which property, and what kind of curve it is. Two bindings that
//! address the same object and property normalize to the same key no matter
//! which clip they come from, so keys can be compared across clips.
//!
//! Humanoid muscle curves (body and finger muscles, root motion and IK goals)
//! are classified as [`CurveKind::Muscle`] so that callers can keep skeletal
//! motion out of facial/gesture combinations.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::animation::binding::{CurveBinding, TargetType};
use crate::utils::interner::{self, Symbol};

const BLEND_SHAPE_PREFIX: &str = "blendShape.";

/// Classification of a curve, part of its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Transform,
    BlendShape,
    /// Non blend shape property of a `SkinnedMeshRenderer`.
    Renderer,
    AnimatorParameter,
    /// Humanoid muscle, root motion or IK goal curve.
    Muscle,
    GameObject,
    Component(Symbol),
}

impl CurveKind {
    #[inline]
    #[must_use]
    pub fn is_muscle(self) -> bool {
        matches!(self, Self::Muscle)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform => f.write_str("Transform"),
            Self::BlendShape => f.write_str("BlendShape"),
            Self::Renderer => f.write_str("Renderer"),
            Self::AnimatorParameter => f.write_str("AnimatorParameter"),
            Self::Muscle => f.write_str("Muscle"),
            Self::GameObject => f.write_str("GameObject"),
            Self::Component(name) => f.write_str(interner::resolve(*name)),
        }
    }
}

/// Canonical, hashable identity of an animatable curve.
///
/// Equality and hashing use the interned path, the interned property name and
/// the [`CurveKind`]. Keys are immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveKey {
    path: Symbol,
    property: Symbol,
    kind: CurveKind,
}

impl CurveKey {
    #[must_use]
    pub fn new(path: &str, property: &str, kind: CurveKind) -> Self {
        Self {
            path: interner::intern(path),
            property: interner::intern(property),
            kind,
        }
    }

    /// Canonicalizes a binding into its key.
    #[must_use]
    pub fn from_binding(binding: &CurveBinding) -> Self {
        let kind = classify(binding);
        Self::new(&binding.path, &binding.property_name, kind)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &'static str {
        interner::resolve(self.path)
    }

    /// Interned path, for comparisons that should not resolve the string.
    #[inline]
    #[must_use]
    pub fn path_symbol(&self) -> Symbol {
        self.path
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> &'static str {
        interner::resolve(self.property)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_muscle_curve(&self) -> bool {
        self.kind.is_muscle()
    }
}

impl fmt::Debug for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveKey")
            .field("path", &self.path())
            .field("property", &self.property())
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.path(), self.kind, self.property())
    }
}

/// A [`CurveKey`] paired with the value of its curve's first keyframe.
///
/// Only used while classifying curves; the sample plays no part in identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledCurveKey {
    pub key: CurveKey,
    pub sample_value: f32,
}

impl SampledCurveKey {
    #[must_use]
    pub fn new(key: CurveKey, sample_value: f32) -> Self {
        Self { key, sample_value }
    }
}

fn classify(binding: &CurveBinding) -> CurveKind {
    match &binding.target {
        TargetType::Transform => CurveKind::Transform,
        TargetType::SkinnedMeshRenderer if binding.property_name.starts_with(BLEND_SHAPE_PREFIX) => {
            CurveKind::BlendShape
        }
        TargetType::SkinnedMeshRenderer => CurveKind::Renderer,
        TargetType::Animator if binding.path.is_empty() && is_muscle_property(&binding.property_name) => {
            CurveKind::Muscle
        }
        TargetType::Animator => CurveKind::AnimatorParameter,
        TargetType::GameObject => CurveKind::GameObject,
        TargetType::Component(name) => CurveKind::Component(interner::intern(name)),
    }
}

// Root motion and IK goal curves are stored as "<Goal>T.x", "<Goal>Q.w", ...
const MOTION_PREFIXES: &[&str] = &[
    "RootT", "RootQ", "MotionT", "MotionQ",
    "LeftFootT", "LeftFootQ", "RightFootT", "RightFootQ",
    "LeftHandT", "LeftHandQ", "RightHandT", "RightHandQ",
];

const CENTER_MUSCLES: &[&str] = &[
    "Spine Front-Back", "Spine Left-Right", "Spine Twist Left-Right",
    "Chest Front-Back", "Chest Left-Right", "Chest Twist Left-Right",
    "UpperChest Front-Back", "UpperChest Left-Right", "UpperChest Twist Left-Right",
    "Neck Nod Down-Up", "Neck Tilt Left-Right", "Neck Turn Left-Right",
    "Head Nod Down-Up", "Head Tilt Left-Right", "Head Turn Left-Right",
    "Jaw Close", "Jaw Left-Right",
];

// Prefixed with "Left " / "Right ".
const SIDED_MUSCLES: &[&str] = &[
    "Eye Down-Up", "Eye In-Out",
    "Upper Leg Front-Back", "Upper Leg In-Out", "Upper Leg Twist In-Out",
    "Lower Leg Stretch", "Lower Leg Twist In-Out",
    "Foot Up-Down", "Foot Twist In-Out", "Toes Up-Down",
    "Shoulder Down-Up", "Shoulder Front-Back",
    "Arm Down-Up", "Arm Front-Back", "Arm Twist In-Out",
    "Forearm Stretch", "Forearm Twist In-Out",
    "Hand Down-Up", "Hand In-Out",
];

const FINGERS: &[&str] = &["Thumb", "Index", "Middle", "Ring", "Little"];
const FINGER_MOTIONS: &[&str] = &["1 Stretched", "Spread", "2 Stretched", "3 Stretched"];

static MUSCLE_NAMES: Lazy<FxHashSet<String>> = Lazy::new(|| {
    let mut names: FxHashSet<String> = CENTER_MUSCLES.iter().map(|&n| n.to_owned()).collect();
    for side in ["Left", "Right"] {
        for muscle in SIDED_MUSCLES {
            names.insert(format!("{side} {muscle}"));
        }
        for finger in FINGERS {
            for motion in FINGER_MOTIONS {
                // Muscle name form and the form used by clip bindings
                names.insert(format!("{side} {finger} {motion}"));
                names.insert(format!("{side}Hand.{finger}.{motion}"));
            }
        }
    }
    names
});

/// Whether `property` names a humanoid muscle, root motion or IK goal curve.
#[must_use]
pub fn is_muscle_property(property: &str) -> bool {
    if let Some((prefix, _)) = property.split_once('.')
        && MOTION_PREFIXES.contains(&prefix)
    {
        return true;
    }
    MUSCLE_NAMES.contains(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bindings_normalize_to_equal_keys() {
        let a = CurveBinding::blend_shape("Body", "vrc.v_aa");
        let b = CurveBinding::blend_shape("Body", "vrc.v_aa");
        assert_eq!(CurveKey::from_binding(&a), CurveKey::from_binding(&b));
    }

    #[test]
    fn kind_is_part_of_identity() {
        let renderer = CurveKey::new("Body", "m_Enabled", CurveKind::Renderer);
        let object = CurveKey::new("Body", "m_Enabled", CurveKind::GameObject);
        assert_ne!(renderer, object);
    }

    #[test]
    fn classifies_muscles() {
        for property in [
            "Jaw Close",
            "Left Arm Down-Up",
            "RightHand.Index.2 Stretched",
            "Left Thumb Spread",
            "RootT.y",
            "LeftFootQ.w",
        ] {
            let key = CurveKey::from_binding(&CurveBinding::animator(property));
            assert!(key.is_muscle_curve(), "{property} should be a muscle curve");
        }
    }

    #[test]
    fn animator_parameters_are_not_muscles() {
        let key = CurveKey::from_binding(&CurveBinding::animator("GestureLeftWeight"));
        assert_eq!(key.kind(), CurveKind::AnimatorParameter);

        // Muscle names only count on the animated root
        let nested = CurveBinding::new("Armature", "Jaw Close", TargetType::Animator);
        assert_eq!(CurveKey::from_binding(&nested).kind(), CurveKind::AnimatorParameter);
    }

    #[test]
    fn classifies_renderer_properties() {
        let shape = CurveKey::from_binding(&CurveBinding::blend_shape("Body", "eyes_closed"));
        assert_eq!(shape.kind(), CurveKind::BlendShape);
        assert_eq!(shape.path(), "Body");
        assert_eq!(shape.property(), "blendShape.eyes_closed");

        let material = CurveBinding::new("Body", "material._Color.r", TargetType::SkinnedMeshRenderer);
        assert_eq!(CurveKey::from_binding(&material).kind(), CurveKind::Renderer);
    }

    #[test]
    fn classifies_other_targets() {
        let transform = CurveBinding::new("Head", "m_LocalPosition.y", TargetType::Transform);
        assert_eq!(CurveKey::from_binding(&transform).kind(), CurveKind::Transform);

        let object = CurveBinding::new("Hat", "m_IsActive", TargetType::GameObject);
        assert_eq!(CurveKey::from_binding(&object).kind(), CurveKind::GameObject);

        let light = CurveBinding::new("Lamp", "m_Intensity", TargetType::Component("Light".to_owned()));
        let key = CurveKey::from_binding(&light);
        assert_eq!(key.kind(), CurveKind::Component(interner::intern("Light")));
        assert_eq!(key.kind().to_string(), "Light");
    }
}
