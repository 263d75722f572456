use std::fmt;

use serde::{Deserialize, Serialize};

/// Component type that owns an animated property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Transform,           // localPosition / localRotation / localScale
    SkinnedMeshRenderer, // blendShape.* and material properties
    Animator,            // animator parameters and humanoid muscles
    GameObject,          // m_IsActive
    Component(String),   // any other component, by type name
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform => f.write_str("Transform"),
            Self::SkinnedMeshRenderer => f.write_str("SkinnedMeshRenderer"),
            Self::Animator => f.write_str("Animator"),
            Self::GameObject => f.write_str("GameObject"),
            Self::Component(name) => f.write_str(name),
        }
    }
}

/// Binding of a keyframe curve to one property of one object in the avatar
/// hierarchy.
///
/// `path` is relative to the animated root; the root itself is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveBinding {
    pub path: String,
    pub property_name: String,
    pub target: TargetType,
}

impl CurveBinding {
    #[must_use]
    pub fn new(path: impl Into<String>, property_name: impl Into<String>, target: TargetType) -> Self {
        Self {
            path: path.into(),
            property_name: property_name.into(),
            target,
        }
    }

    /// Shorthand for a `SkinnedMeshRenderer` blend shape binding.
    #[must_use]
    pub fn blend_shape(path: impl Into<String>, shape: &str) -> Self {
        Self::new(path, format!("blendShape.{shape}"), TargetType::SkinnedMeshRenderer)
    }

    /// Shorthand for an `Animator` binding on the root object.
    #[must_use]
    pub fn animator(property_name: impl Into<String>) -> Self {
        Self::new("", property_name, TargetType::Animator)
    }
}

impl fmt::Display for CurveBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.path, self.target, self.property_name)
    }
}
