// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The viewer canvas handles its own pointer input. What remains here is
//! window-level: remembering which window to switch to full screen, and the
//! ways back out of it.

use super::{Message, Screen};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, Event, Subscription};

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Browser => event::listen_with(|event, status, window_id| match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) => {
                Some(Message::WindowActivated(window_id))
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) if status == event::Status::Ignored => Some(Message::EscapePressed),
            _ => None,
        }),
        Screen::FullScreen => event::listen_with(|event, _status, _window_id| match event {
            Event::Mouse(mouse::Event::ButtonPressed(_))
            | Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::ExitFullScreen),
            _ => None,
        }),
    }
}
