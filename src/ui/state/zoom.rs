// SPDX-License-Identifier: MPL-2.0
//! Wheel zoom state.
//!
//! The viewer zooms multiplicatively: every wheel notch multiplies the view
//! scale by a fixed factor (zoom in) or by its reciprocal (zoom out). The
//! resulting scale is deliberately left unbounded; only the per-notch factor
//! is validated.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};

/// Per-notch zoom multiplier, guaranteed to be within
/// `MIN_ZOOM_FACTOR..=MAX_ZOOM_FACTOR`.
///
/// ```
/// use tree_lens::ui::state::ZoomFactor;
///
/// let factor = ZoomFactor::new(1.25);
/// assert_eq!(factor.value(), 1.25);
/// assert_eq!(ZoomFactor::new(0.5).value(), tree_lens::ui::state::zoom::MIN_ZOOM_FACTOR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale multiplier for a wheel delta, or `None` when the
    /// delta carries no direction.
    ///
    /// Positive deltas (wheel up) zoom in, negative deltas zoom out.
    #[must_use]
    pub fn multiplier_for(self, delta: f32) -> Option<f32> {
        if delta > 0.0 {
            Some(self.0)
        } else if delta < 0.0 {
            Some(1.0 / self.0)
        } else {
            None
        }
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
