// SPDX-License-Identifier: MPL-2.0
//! Rotation angle of the displayed image.
//!
//! Angles move in 90° steps and are kept as signed, un-normalized degrees:
//! rotating right four times yields 360°, not 0°. Trigonometry is computed on
//! the wrapped value so the footprint never drifts.

use iced::{Point, Rectangle, Size};

/// Direction of a 90° rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Counter-clockwise on screen (−90°).
    Left,
    /// Clockwise on screen (+90°).
    Right,
}

/// Rotation angle in degrees, always a multiple of 90.
///
/// # Example
///
/// ```
/// use tree_lens::ui::state::{RotationAngle, RotationDirection};
///
/// let angle = RotationAngle::default();
/// assert_eq!(angle.degrees(), 0);
///
/// let rotated = angle.rotate(RotationDirection::Right);
/// assert_eq!(rotated.degrees(), 90);
///
/// // Angles are not wrapped
/// let full = rotated
///     .rotate(RotationDirection::Right)
///     .rotate(RotationDirection::Right)
///     .rotate(RotationDirection::Right);
/// assert_eq!(full.degrees(), 360);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(i32);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, rounding toward zero to a 90° multiple.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        Self((degrees / 90) * 90)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Returns the angle in radians.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn radians(self) -> f32 {
        self.0.rem_euclid(360) as f32 * std::f32::consts::PI / 180.0
    }

    /// Returns the angle after one 90° step in `direction`.
    #[must_use]
    pub fn rotate(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Left => Self(self.0 - 90),
            RotationDirection::Right => Self(self.0 + 90),
        }
    }

    /// Returns true if width and height should be swapped when rendering.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0.rem_euclid(180) == 90
    }

    /// Rotates a point about the world origin.
    ///
    /// Positive angles turn clockwise on a y-down screen.
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        match self.0.rem_euclid(360) {
            90 => Point::new(-point.y, point.x),
            180 => Point::new(-point.x, -point.y),
            270 => Point::new(point.y, -point.x),
            _ => point,
        }
    }

    /// Inverse of [`RotationAngle::apply`].
    #[must_use]
    pub fn unapply(self, point: Point) -> Point {
        Self(-self.0).apply(point)
    }

    /// World footprint of a `size` image anchored at the origin and rotated
    /// about it.
    #[must_use]
    pub fn footprint(self, size: Size) -> Rectangle {
        let corners = [
            Point::ORIGIN,
            Point::new(size.width, 0.0),
            Point::new(0.0, size.height),
            Point::new(size.width, size.height),
        ]
        .map(|corner| self.apply(corner));

        let min_x = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let min_y = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let max_y = corners.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        Rectangle::new(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }
}
