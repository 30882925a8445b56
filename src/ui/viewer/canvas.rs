// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the displayed image and the selection outline.
//!
//! Raw iced events are translated into [`ViewportEvent`]s in canvas-local
//! coordinates. Once a selection starts, moves and the release are tracked
//! even when the pointer leaves the canvas so the gesture always ends.

use super::controller::{Controller, ViewportEvent};
use super::Message;
use crate::ui::design_tokens::{border, palette};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::image::FilterMethod;
use iced::widget::Action;
use iced::{keyboard, mouse, window, Point, Radians, Rectangle, Size};

/// Interaction state kept by iced between events.
#[derive(Debug, Default)]
pub struct State {
    modifiers: keyboard::Modifiers,
    pressed: bool,
    last_size: Size,
}

/// Canvas program borrowing the controller for one frame.
pub struct ViewerCanvas<'a> {
    pub controller: &'a Controller,
}

impl<'a> ViewerCanvas<'a> {
    #[must_use]
    pub fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }
}

impl canvas::Program<Message> for ViewerCanvas<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                state.modifiers = *modifiers;
                None
            }
            // Layout changes are always followed by a redraw.
            iced::Event::Window(window::Event::RedrawRequested(_)) => {
                if bounds.size() == state.last_size {
                    return None;
                }
                state.last_size = bounds.size();
                Some(Action::publish(Message::Resized(bounds.size())))
            }
            iced::Event::Mouse(mouse_event) => {
                self.update_mouse(state, mouse_event, bounds, cursor)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let Some(displayed) = self.controller.image() else {
            return vec![frame.into_geometry()];
        };

        let transform = self.controller.transform();
        let clip = Rectangle::new(Point::ORIGIN, bounds.size());

        frame.with_clip(clip, |frame| {
            // iced rotates an image about the center of its draw bounds, so
            // the un-rotated rectangle is centered on the rotated footprint.
            let footprint = transform.map_rect(displayed.footprint());
            let center = footprint.center();
            let size = displayed.data.size();
            let drawn = Size::new(size.width * transform.scale, size.height * transform.scale);
            let target = Rectangle::new(
                Point::new(center.x - drawn.width / 2.0, center.y - drawn.height / 2.0),
                drawn,
            );

            let filter = if transform.scale > 1.0 {
                FilterMethod::Nearest
            } else {
                FilterMethod::Linear
            };
            frame.draw_image(
                target,
                canvas::Image::new(displayed.data.handle.clone())
                    .filter_method(filter)
                    .rotation(Radians(displayed.rotation.radians())),
            );

            if let Some(selection) = self.controller.selection() {
                let outline = transform.map_rect(selection);
                frame.stroke(
                    &Path::rectangle(outline.position(), outline.size()),
                    Stroke::default()
                        .with_width(border::WIDTH_MD)
                        .with_color(palette::SELECTION),
                );
            }
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed || (self.controller.has_image() && cursor.is_over(bounds)) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl ViewerCanvas<'_> {
    fn update_mouse(
        &self,
        state: &mut State,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                state.pressed = true;
                Some(viewport(ViewportEvent::PointerDown { position }).and_capture())
            }
            mouse::Event::CursorMoved { .. } => {
                if state.pressed {
                    let position = local_position(cursor, bounds)?;
                    Some(viewport(ViewportEvent::PointerMove { position }).and_capture())
                } else {
                    let position = cursor.position_in(bounds)?;
                    Some(viewport(ViewportEvent::PointerMove { position }))
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if state.pressed => {
                state.pressed = false;
                let position = local_position(cursor, bounds).unwrap_or(Point::ORIGIN);
                Some(viewport(ViewportEvent::PointerUp { position }).and_capture())
            }
            mouse::Event::WheelScrolled { delta } => {
                cursor.position_in(bounds)?;
                let modifier_held = state.modifiers.shift();
                let action = viewport(ViewportEvent::Wheel {
                    delta: scroll_steps(delta),
                    modifier_held,
                });
                Some(if modifier_held {
                    action.and_capture()
                } else {
                    action
                })
            }
            _ => None,
        }
    }
}

fn viewport(event: ViewportEvent) -> Action<Message> {
    Action::publish(Message::Viewport(event))
}

/// Cursor position relative to the canvas origin, even outside its bounds.
fn local_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    cursor
        .position()
        .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y))
}

/// Wheel notches along the scroll axis.
///
/// Some platforms report Shift+wheel as a horizontal scroll, so `x` stands in
/// when `y` is zero.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    let dominant = |x: f32, y: f32| if y != 0.0 { y } else { x };
    match *delta {
        mouse::ScrollDelta::Lines { x, y } => dominant(x, y),
        mouse::ScrollDelta::Pixels { x, y } => dominant(x, y) / 120.0,
    }
}
