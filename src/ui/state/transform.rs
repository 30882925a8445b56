// SPDX-License-Identifier: MPL-2.0
//! World-to-screen mapping of the viewer canvas.
//!
//! The transform is a uniform scale followed by a translation:
//! `screen = world * scale + translation`. Rotation is not part of it; the
//! displayed image carries its own angle.

use iced::{Point, Rectangle, Size, Vector};

/// Pan/zoom transform applied to the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translation: Vector,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vector::new(0.0, 0.0),
    };

    /// Maps a world point to canvas-local screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.translation.x,
            world.y * self.scale + self.translation.y,
        )
    }

    /// Maps a canvas-local screen point back to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translation.x) / self.scale,
            (screen.y - self.translation.y) / self.scale,
        )
    }

    /// Maps a world rectangle to screen coordinates.
    #[must_use]
    pub fn map_rect(&self, world: Rectangle) -> Rectangle {
        Rectangle::new(
            self.to_screen(world.position()),
            Size::new(world.width * self.scale, world.height * self.scale),
        )
    }

    /// Returns the transform that shows `rect` as large as possible inside a
    /// `viewport`, preserving aspect ratio and centered on both axes.
    ///
    /// Returns `None` when either the rectangle or the viewport has no area.
    #[must_use]
    pub fn fit(rect: Rectangle, viewport: Size) -> Option<Self> {
        if !has_area(rect.size()) || !has_area(viewport) {
            return None;
        }

        let scale = (viewport.width / rect.width).min(viewport.height / rect.height);
        let center = rect.center();

        Some(Self {
            scale,
            translation: Vector::new(
                viewport.width / 2.0 - center.x * scale,
                viewport.height / 2.0 - center.y * scale,
            ),
        })
    }

    /// Multiplies the scale by `multiplier`, keeping the world point under
    /// `anchor` (screen coordinates) in place.
    #[must_use]
    pub fn zoom_about(&self, anchor: Point, multiplier: f32) -> Self {
        let world = self.to_world(anchor);
        let scale = self.scale * multiplier;

        Self {
            scale,
            translation: Vector::new(anchor.x - world.x * scale, anchor.y - world.y * scale),
        }
    }
}

/// Returns true when both sides are strictly positive.
#[must_use]
pub fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
