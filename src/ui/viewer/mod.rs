// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: the interactive canvas and its controller.

pub mod canvas;
pub mod controller;

pub use canvas::ViewerCanvas;
pub use controller::{
    Controller, DisplayedImage, GestureState, PointerMove, ViewSnapshot, ViewportEvent,
    ViewportResponse, WheelOutcome,
};

use crate::error::ViewportError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::{center, image, stack, Canvas, Text};
use iced::{ContentFit, Element, Length, Point, Size};

/// Messages emitted by the viewer canvas.
#[derive(Debug, Clone)]
pub enum Message {
    Viewport(ViewportEvent),
    Resized(Size),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// World position under the pointer.
    PointerMoved(Point),
}

/// Routes a canvas message into the controller.
///
/// Rejected requests are expected during normal use (clicking an empty
/// viewer, releasing a zero-area selection) and are only logged.
pub fn update(controller: &mut Controller, message: Message) -> Event {
    match message {
        Message::Resized(size) => {
            controller.set_viewport_size(size);
            Event::None
        }
        Message::Viewport(event) => match controller.dispatch(event) {
            Ok(ViewportResponse::PointerMoved(moved)) => Event::PointerMoved(moved.world),
            Ok(_) => Event::None,
            Err(error) => {
                log_rejected(event, error);
                Event::None
            }
        },
    }
}

fn log_rejected(event: ViewportEvent, error: ViewportError) {
    log::debug!("Viewport ignored {event:?}: {error}");
}

/// Renders the canvas, with a hint on top while nothing is displayed.
pub fn view<'a>(controller: &'a Controller, i18n: &I18n) -> Element<'a, Message> {
    let canvas = Canvas::new(ViewerCanvas::new(controller))
        .width(Length::Fill)
        .height(Length::Fill);

    if controller.has_image() {
        canvas.into()
    } else {
        let hint = Text::new(i18n.tr("viewer-empty-hint")).size(typography::BODY);
        stack![canvas, center(hint)].into()
    }
}

/// The displayed image, un-rotated and scaled to fit, for full-screen mode.
pub fn full_screen<'a, M: 'a>(controller: &'a Controller) -> Option<Element<'a, M>> {
    let displayed = controller.image()?;
    Some(
        image(displayed.data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::ZoomFactor;

    fn loaded_controller() -> Controller {
        let mut controller = Controller::new(ZoomFactor::default());
        controller.set_viewport_size(Size::new(100.0, 100.0));
        let image = ImageData::from_rgba(10, 10, vec![255; 10 * 10 * 4]).unwrap();
        controller.load_image(image).unwrap();
        controller
    }

    #[test]
    fn resize_updates_viewport() {
        let mut controller = Controller::default();
        let event = update(&mut controller, Message::Resized(Size::new(320.0, 200.0)));
        assert_eq!(event, Event::None);
        assert_eq!(controller.viewport_size(), Size::new(320.0, 200.0));
    }

    #[test]
    fn pointer_move_reports_world_position() {
        let mut controller = loaded_controller();
        let event = update(
            &mut controller,
            Message::Viewport(ViewportEvent::PointerMove {
                position: Point::new(50.0, 50.0),
            }),
        );
        assert_eq!(event, Event::PointerMoved(Point::new(5.0, 5.0)));
    }

    #[test]
    fn rejected_requests_are_absorbed() {
        let mut controller = Controller::default();
        let event = update(
            &mut controller,
            Message::Viewport(ViewportEvent::PointerDown {
                position: Point::ORIGIN,
            }),
        );
        assert_eq!(event, Event::None);
        assert_eq!(controller.gesture(), GestureState::Idle);
    }

    #[test]
    fn shift_wheel_zooms_about_center() {
        let mut controller = loaded_controller();
        let before = controller.transform().scale;
        let event = update(
            &mut controller,
            Message::Viewport(ViewportEvent::Wheel {
                delta: 1.0,
                modifier_held: true,
            }),
        );
        assert_eq!(event, Event::None);
        assert!(controller.transform().scale > before);
        let center = controller.to_world(Point::new(50.0, 50.0));
        assert_abs_diff_eq!(center.x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(center.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn full_screen_requires_image() {
        assert!(full_screen::<()>(&Controller::default()).is_none());
        assert!(full_screen::<()>(&loaded_controller()).is_some());
    }
}
