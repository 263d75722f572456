use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMode {
    Linear,
    Step,
    /// Hermite segments driven by the keyframes' in/out tangents.
    #[default]
    Tangent,
}

/// A single scalar keyframe.
///
/// Tangents are slopes (value per second) and only matter for
/// [`InterpolationMode::Tangent`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    #[must_use]
    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }
}

/// Scalar keyframe curve. Keys are kept sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyframeTrack {
    pub keys: Vec<Keyframe>,
    pub interpolation: InterpolationMode,
}

impl KeyframeTrack {
    #[must_use]
    pub fn new(mut keys: Vec<Keyframe>, interpolation: InterpolationMode) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys, interpolation }
    }

    /// A curve holding `value` from time zero.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)], InterpolationMode::Step)
    }

    /// Linear curve through `(time, value)` pairs.
    #[must_use]
    pub fn linear(points: &[(f32, f32)]) -> Self {
        let keys = points.iter().map(|&(t, v)| Keyframe::new(t, v)).collect();
        Self::new(keys, InterpolationMode::Linear)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value of the first keyframe, the curve's representative sample.
    #[inline]
    #[must_use]
    pub fn first_value(&self) -> Option<f32> {
        self.keys.first().map(|k| k.value)
    }

    /// Time of the last keyframe, or `0.0` for an empty curve.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Evaluates the curve at `time`, clamping outside the keyed range.
    ///
    /// Returns `None` for an empty curve or a NaN `time`.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<f32> {
        if time.is_nan() {
            return None;
        }
        let first = self.keys.first()?;
        if self.keys.len() == 1 || time <= first.time {
            return Some(first.value);
        }

        // partition_point finds the first key with t > time, i.e. the next key
        let next_idx = self.keys.partition_point(|k| k.time <= time);
        if next_idx >= self.keys.len() {
            return self.keys.last().map(|k| k.value);
        }

        let k0 = &self.keys[next_idx - 1];
        let k1 = &self.keys[next_idx];
        let dt = k1.time - k0.time;

        let t = if dt > 1e-6 { (time - k0.time) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        let value = match self.interpolation {
            InterpolationMode::Step => k0.value,
            InterpolationMode::Linear => k0.value + (k1.value - k0.value) * t,
            InterpolationMode::Tangent => {
                let t2 = t * t;
                let t3 = t2 * t;

                let s2 = -2.0 * t3 + 3.0 * t2;
                let s3 = t3 - t2;
                let s0 = 1.0 - s2;
                let s1 = s3 - t2 + t;

                let m0 = k0.out_tangent * dt;
                let m1 = k1.in_tangent * dt;

                s0 * k0.value + s1 * m0 + s2 * k1.value + s3 * m1
            }
        };
        Some(value)
    }
}
