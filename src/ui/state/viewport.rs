// SPDX-License-Identifier: MPL-2.0
//! Viewport extent tracking.
//!
//! The canvas reports its size on every event; the viewer needs to know when
//! the size changes and, in particular, when it becomes usable for the first
//! time so an image loaded before the first layout can still be fitted.

use iced::{Point, Size};

use super::transform::has_area;

/// Current and previous canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    /// Current viewport size
    pub size: Size,

    /// Previous viewport size (for layout change detection)
    pub previous_size: Size,
}

impl ViewportState {
    /// Records a new size.
    ///
    /// Returns true if the viewport had no area before and has one now.
    pub fn update(&mut self, size: Size) -> bool {
        self.previous_size = self.size;
        self.size = size;
        !has_area(self.previous_size) && has_area(size)
    }

    /// Center of the viewport in canvas-local coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}
