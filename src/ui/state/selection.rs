// SPDX-License-Identifier: MPL-2.0
//! Rubber-band selection state.
//!
//! A selection lives for exactly one press/move/release gesture. It keeps the
//! anchor captured on press and the normalized rectangle spanned by the
//! anchor and the latest pointer position, both in world coordinates.

use iced::{Point, Rectangle, Size};

/// Active selection gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// World position where the gesture started.
    pub anchor: Point,

    /// Normalized rectangle from the anchor to the last move.
    pub rect: Rectangle,
}

impl Selection {
    /// Starts a selection with a zero-size rectangle at `anchor`.
    #[must_use]
    pub fn start(anchor: Point) -> Self {
        Self {
            anchor,
            rect: Rectangle::new(anchor, Size::ZERO),
        }
    }

    /// Stretches the rectangle to `current`, replacing the previous one.
    pub fn update(&mut self, current: Point) -> Rectangle {
        self.rect = normalized_rect(self.anchor, current);
        self.rect
    }

    /// Returns true when the rectangle has no area on at least one axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rect.width <= 0.0 || self.rect.height <= 0.0
    }
}

/// Bounding box of two corner points, with min ≤ max on both axes.
#[must_use]
pub fn normalized_rect(a: Point, b: Point) -> Rectangle {
    let top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
    Rectangle::new(
        top_left,
        Size::new((a.x - b.x).abs(), (a.y - b.y).abs()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_creates_zero_size_rect_at_anchor() {
        let selection = Selection::start(Point::new(4.0, 9.0));
        assert_eq!(selection.rect.position(), Point::new(4.0, 9.0));
        assert_eq!(selection.rect.size(), Size::ZERO);
        assert!(selection.is_degenerate());
    }

    #[test]
    fn update_normalizes_reversed_drag() {
        let mut selection = Selection::start(Point::new(10.0, 10.0));
        let rect = selection.update(Point::new(5.0, 50.0));

        assert_eq!(rect.position(), Point::new(5.0, 10.0));
        assert_eq!(rect.size(), Size::new(5.0, 40.0));
        assert!(!selection.is_degenerate());
    }

    #[test]
    fn update_keeps_only_latest_rect() {
        let mut selection = Selection::start(Point::ORIGIN);
        selection.update(Point::new(100.0, 100.0));
        selection.update(Point::new(-20.0, 30.0));

        assert_eq!(
            selection.rect,
            Rectangle::new(Point::new(-20.0, 0.0), Size::new(20.0, 30.0))
        );
    }

    #[test]
    fn flat_drag_is_degenerate() {
        let mut selection = Selection::start(Point::new(1.0, 1.0));
        selection.update(Point::new(80.0, 1.0));
        assert!(selection.is_degenerate());
    }
}
