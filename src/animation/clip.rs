use serde::{Deserialize, Serialize};

use crate::animation::binding::CurveBinding;
use crate::animation::tracks::KeyframeTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopMode {
    #[default]
    Once,
    Loop,
    PingPong,
}

/// Clip-level playback settings, carried over as a whole when a clip is
/// derived from another one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSettings {
    pub loop_mode: LoopMode,
    pub loop_blend: bool,
    pub cycle_offset: f32,
    pub mirror: bool,
    pub start_time: f32,
    pub stop_time: f32,
    pub frame_rate: f32,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self {
            loop_mode: LoopMode::Once,
            loop_blend: false,
            cycle_offset: 0.0,
            mirror: false,
            start_time: 0.0,
            stop_time: 1.0,
            frame_rate: 60.0,
        }
    }
}

/// Binding plus its keyframe data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub binding: CurveBinding,
    pub curve: KeyframeTrack,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub settings: ClipSettings,
    tracks: Vec<Track>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let mut clip = Self {
            name: name.into(),
            settings: ClipSettings::default(),
            tracks: Vec::with_capacity(tracks.len()),
        };
        for track in tracks {
            clip.set_curve(track.binding, track.curve);
        }
        clip
    }

    /// An empty clip that inherits `settings`.
    #[must_use]
    pub fn with_settings(name: impl Into<String>, settings: ClipSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            tracks: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterates the clip's curve bindings in track order.
    pub fn bindings(&self) -> impl Iterator<Item = &CurveBinding> {
        self.tracks.iter().map(|t| &t.binding)
    }

    #[must_use]
    pub fn curve(&self, binding: &CurveBinding) -> Option<&KeyframeTrack> {
        self.tracks
            .iter()
            .find(|t| &t.binding == binding)
            .map(|t| &t.curve)
    }

    /// Sets the curve for `binding`, replacing any existing curve bound to it.
    pub fn set_curve(&mut self, binding: CurveBinding, curve: KeyframeTrack) {
        match self.tracks.iter_mut().find(|t| t.binding == binding) {
            Some(track) => track.curve = curve,
            None => self.tracks.push(Track { binding, curve }),
        }
    }

    /// Removes the curve bound to `binding`, returning it if present.
    pub fn remove_curve(&mut self, binding: &CurveBinding) -> Option<KeyframeTrack> {
        let index = self.tracks.iter().position(|t| &t.binding == binding)?;
        Some(self.tracks.remove(index).curve)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Time of the last keyframe over all curves.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.tracks
            .iter()
            .map(|t| t.curve.end_time())
            .fold(0.0_f32, f32::max)
    }
}
