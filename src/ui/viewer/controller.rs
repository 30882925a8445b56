// SPDX-License-Identifier: MPL-2.0
//! Interactive viewport controller.
//!
//! Owns the displayed image, the pan/zoom transform and the selection gesture.
//! Input arrives as [`ViewportEvent`]s in canvas-local screen coordinates and
//! is routed through a two-state machine:
//!
//! ```text
//! Idle --pointer-down--> Selecting --pointer-move--> Selecting
//!   ^                        |
//!   +-------pointer-up-------+   (fit view to the selection)
//! ```
//!
//! Requests that cannot apply (nothing displayed, empty selection, malformed
//! buffer) leave every piece of state untouched and are reported as
//! [`ViewportError`]s.

use crate::error::ViewportError;
use crate::media::ImageData;
use crate::ui::state::{
    RotationAngle, RotationDirection, Selection, ViewTransform, ViewportState, ZoomFactor,
};
use iced::{Point, Rectangle, Size};

/// Input routed into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    Wheel { delta: f32, modifier_held: bool },
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Selecting(Selection),
}

/// What a wheel event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The view scale changed.
    Zoomed,
    /// The event was not meant for the viewport (no modifier or no direction).
    PassedThrough,
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    /// Pointer position in world coordinates, for the status display.
    pub world: Point,
    /// Updated selection rectangle while a gesture is in progress.
    pub selection: Option<Rectangle>,
}

/// Successful outcome of [`Controller::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportResponse {
    SelectionStarted,
    PointerMoved(PointerMove),
    /// The view was fitted to this world rectangle, or nothing was in
    /// progress when the pointer was released.
    SelectionFinished(Option<Rectangle>),
    Wheel(WheelOutcome),
}

/// Image currently shown on the canvas.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pub data: ImageData,
    pub rotation: RotationAngle,
}

impl DisplayedImage {
    /// World-space bounding box of the rotated image.
    #[must_use]
    pub fn footprint(&self) -> Rectangle {
        self.rotation.footprint(self.data.size())
    }
}

/// Everything an external renderer needs to reproduce the visible view.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub transform: ViewTransform,
    pub image: ImageData,
    pub rotation: RotationAngle,
    pub viewport: Size,
}

/// Viewer state machine.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    transform: ViewTransform,
    image: Option<DisplayedImage>,
    gesture: GestureState,
    viewport: ViewportState,
    zoom_factor: ZoomFactor,
}

impl Controller {
    /// Creates an empty controller zooming by `zoom_factor` per wheel notch.
    #[must_use]
    pub fn new(zoom_factor: ZoomFactor) -> Self {
        Self {
            zoom_factor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn image(&self) -> Option<&DisplayedImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Selection rectangle of the gesture in progress, in world coordinates.
    #[must_use]
    pub fn selection(&self) -> Option<Rectangle> {
        match self.gesture {
            GestureState::Selecting(selection) => Some(selection.rect),
            GestureState::Idle => None,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> Option<RotationAngle> {
        self.image.as_ref().map(|image| image.rotation)
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport.size
    }

    #[must_use]
    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom_factor
    }

    /// Maps a canvas-local point to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        self.transform.to_world(screen)
    }

    /// Routes an event through the state machine.
    ///
    /// # Errors
    ///
    /// Forwards the error of the handler the event maps to.
    pub fn dispatch(&mut self, event: ViewportEvent) -> Result<ViewportResponse, ViewportError> {
        match event {
            ViewportEvent::PointerDown { position } => self
                .handle_pointer_down(position)
                .map(|()| ViewportResponse::SelectionStarted),
            ViewportEvent::PointerMove { position } => Ok(ViewportResponse::PointerMoved(
                self.handle_pointer_move(position),
            )),
            ViewportEvent::PointerUp { position } => self
                .handle_pointer_up(position)
                .map(ViewportResponse::SelectionFinished),
            ViewportEvent::Wheel {
                delta,
                modifier_held,
            } => self
                .handle_wheel(delta, modifier_held)
                .map(ViewportResponse::Wheel),
        }
    }

    /// Zooms around the viewport center while the modifier is held.
    ///
    /// # Errors
    ///
    /// [`ViewportError::NoImageLoaded`] if the modifier is held with nothing
    /// displayed.
    ///
    /// Zoom has no bounds of its own; a notch is only refused when the scale
    /// would leave the normal `f32` range and the transform could no longer
    /// be inverted.
    pub fn handle_wheel(
        &mut self,
        delta: f32,
        modifier_held: bool,
    ) -> Result<WheelOutcome, ViewportError> {
        if !modifier_held {
            return Ok(WheelOutcome::PassedThrough);
        }
        if self.image.is_none() {
            return Err(ViewportError::NoImageLoaded);
        }
        let Some(multiplier) = self.zoom_factor.multiplier_for(delta) else {
            return Ok(WheelOutcome::PassedThrough);
        };

        let zoomed = self
            .transform
            .zoom_about(self.viewport.center(), multiplier);
        let far_corner = Point::new(self.viewport.size.width, self.viewport.size.height);
        let invertible = [Point::ORIGIN, far_corner]
            .into_iter()
            .map(|corner| zoomed.to_world(corner))
            .all(|world| world.x.is_finite() && world.y.is_finite());
        if !zoomed.scale.is_normal()
            || !zoomed.translation.x.is_finite()
            || !zoomed.translation.y.is_finite()
            || !invertible
        {
            log::debug!("Zoom notch ignored, scale {} out of range", zoomed.scale);
            return Ok(WheelOutcome::PassedThrough);
        }

        self.transform = zoomed;
        Ok(WheelOutcome::Zoomed)
    }

    /// Starts a selection at `position`.
    ///
    /// # Errors
    ///
    /// [`ViewportError::NoImageLoaded`] if nothing is displayed.
    pub fn handle_pointer_down(&mut self, position: Point) -> Result<(), ViewportError> {
        if self.image.is_none() {
            return Err(ViewportError::NoImageLoaded);
        }
        let anchor = self.transform.to_world(position);
        self.gesture = GestureState::Selecting(Selection::start(anchor));
        Ok(())
    }

    /// Reports the world position and stretches the selection, if any.
    pub fn handle_pointer_move(&mut self, position: Point) -> PointerMove {
        let world = self.transform.to_world(position);
        let selection = match &mut self.gesture {
            GestureState::Selecting(selection) => Some(selection.update(world)),
            GestureState::Idle => None,
        };
        PointerMove { world, selection }
    }

    /// Ends the selection and fits the view to the last rectangle.
    ///
    /// The release position is not folded into the rectangle.
    ///
    /// # Errors
    ///
    /// - [`ViewportError::NoImageLoaded`] if nothing is displayed.
    /// - [`ViewportError::DegenerateSelection`] if the rectangle has no area;
    ///   the gesture still ends and the view is left as it was.
    pub fn handle_pointer_up(
        &mut self,
        _position: Point,
    ) -> Result<Option<Rectangle>, ViewportError> {
        if self.image.is_none() {
            return Err(ViewportError::NoImageLoaded);
        }
        let GestureState::Selecting(selection) = std::mem::take(&mut self.gesture) else {
            return Ok(None);
        };
        if selection.is_degenerate() {
            return Err(ViewportError::DegenerateSelection);
        }

        if let Some(fitted) = ViewTransform::fit(selection.rect, self.viewport.size) {
            self.transform = fitted;
        }
        Ok(Some(selection.rect))
    }

    /// Turns the image by 90° and fits it back into the viewport.
    ///
    /// # Errors
    ///
    /// [`ViewportError::NoImageLoaded`] if nothing is displayed.
    pub fn rotate(&mut self, direction: RotationDirection) -> Result<(), ViewportError> {
        let image = self.image.as_mut().ok_or(ViewportError::NoImageLoaded)?;
        image.rotation = image.rotation.rotate(direction);
        self.fit_image();
        Ok(())
    }

    /// Replaces the displayed image, resetting rotation and gesture state.
    ///
    /// # Errors
    ///
    /// [`ViewportError::InvalidImage`] if the buffer is empty or does not
    /// match its dimensions; the current image stays displayed.
    pub fn load_image(&mut self, data: ImageData) -> Result<(), ViewportError> {
        if !data.is_valid() {
            return Err(ViewportError::InvalidImage);
        }

        self.image = Some(DisplayedImage {
            data,
            rotation: RotationAngle::ZERO,
        });
        self.gesture = GestureState::Idle;
        self.transform = ViewTransform::IDENTITY;
        self.fit_image();
        Ok(())
    }

    /// Records the canvas size.
    ///
    /// An image loaded while the viewport had no area is fitted as soon as
    /// the viewport gets one; later resizes keep the current transform.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport.size == size {
            return;
        }
        if self.viewport.update(size) {
            self.fit_image();
        }
    }

    /// Captures the visible view for rasterization.
    ///
    /// # Errors
    ///
    /// [`ViewportError::NoImageLoaded`] if nothing is displayed.
    pub fn export_view(&self) -> Result<ViewSnapshot, ViewportError> {
        let image = self.image.as_ref().ok_or(ViewportError::NoImageLoaded)?;
        Ok(ViewSnapshot {
            transform: self.transform,
            image: image.data.clone(),
            rotation: image.rotation,
            viewport: self.viewport.size,
        })
    }

    fn fit_image(&mut self) {
        let Some(image) = &self.image else {
            return;
        };
        if let Some(fitted) = ViewTransform::fit(image.footprint(), self.viewport.size) {
            self.transform = fitted;
        }
    }
}
