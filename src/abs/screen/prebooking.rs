// SPDX-License-Identifier: GPL-3.0-only

use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{button, column, container, focus_next, focus_previous, row, text, text_input};
use iced::{Alignment, Length, Subscription, Task, event};

use abs_core::{auth, mock, routes::Route};
use abs_utils::styling::*;
use abs_utils::text::truncate_graphemes;

use crate::fl;

const CODE_INPUT_LIMIT: usize = 12;

/// Reservation code form, the landing page of the application
#[derive(Debug, Default)]
pub struct PreBooking {
    code: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Hotkey (Subscription) pressed
    Hotkey(Hotkey),
    /// Callback when typing on the reservation code input
    CodeInput(String),
    /// Validates the code and opens its booking
    Submit,
    /// Fills the form with one of the demo reservations and opens it
    TryDemo(&'static str),
    /// Opens the order review page
    OpenOrders,
}

pub enum Action {
    None,
    Run(Task<Message>),
    Navigate(Route),
}

impl PreBooking {
    pub fn new(code: Option<String>) -> Self {
        Self {
            code: code.unwrap_or_default(),
            error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Hotkey(hotkey) => match hotkey {
                Hotkey::Tab(modifiers) => {
                    if modifiers.shift() {
                        Action::Run(focus_previous())
                    } else {
                        Action::Run(focus_next())
                    }
                }
                Hotkey::Enter => self.update(Message::Submit),
            },
            Message::CodeInput(value) => {
                self.code = truncate_graphemes(&value, CODE_INPUT_LIMIT);
                self.error = None;
                Action::None
            }
            Message::Submit => match auth::validate_reservation_code(&self.code) {
                Ok(code) => {
                    self.code = code.clone();
                    Action::Navigate(Route::Booking(code))
                }
                Err(_) => {
                    self.error = Some(fl!("invalid-reservation-code"));
                    Action::None
                }
            },
            Message::TryDemo(code) => {
                self.code = code.to_string();
                self.update(Message::Submit)
            }
            Message::OpenOrders => Action::Navigate(Route::Orders),
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let code_input = text_input(&fl!("reservation-code-placeholder"), &self.code)
            .on_input(Message::CodeInput)
            .on_submit(Message::Submit)
            .size(TEXT_SIZE)
            .padding(10)
            .width(Length::Fixed(320.));

        let error = self
            .error
            .as_deref()
            .map(|error| text(error).size(SMALL_TEXT_SIZE).style(text::danger));

        let submit = button(
            text(fl!("continue"))
                .size(TEXT_SIZE)
                .align_x(Alignment::Center)
                .width(Length::Fill),
        )
        .on_press(Message::Submit)
        .height(GLOBAL_BUTTON_HEIGHT)
        .width(Length::Fixed(320.));

        let demos = row![
            button(text(fl!("demo-single")).size(SMALL_TEXT_SIZE))
                .style(button::secondary)
                .on_press(Message::TryDemo(mock::DEMO_RESERVATION_CODE)),
            button(text(fl!("demo-multi")).size(SMALL_TEXT_SIZE))
                .style(button::secondary)
                .on_press(Message::TryDemo(mock::DEMO_MULTI_RESERVATION_CODE)),
            button(text(fl!("my-orders")).size(SMALL_TEXT_SIZE))
                .style(button::text)
                .on_press(Message::OpenOrders),
        ]
        .spacing(GLOBAL_SPACING);

        let form = column![
            text(fl!("welcome-title")).size(TITLE_TEXT_SIZE),
            text(fl!("welcome-subtitle")).size(TEXT_SIZE),
            text(fl!("reservation-code")).size(SMALL_TEXT_SIZE),
            code_input,
        ]
        .push_maybe(error)
        .push(submit)
        .push(demos)
        .spacing(GLOBAL_SPACING * 2.)
        .align_x(Alignment::Center);

        container(form).center(Length::Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }
}

//
// SUBSCRIPTION HANDLING
//

#[derive(Debug, Clone)]
pub enum Hotkey {
    Tab(Modifiers),
    Enter,
}

fn handle_event(
    event: event::Event,
    status: event::Status,
    _: iced::window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match key {
            Key::Named(Named::Tab) => Some(Message::Hotkey(Hotkey::Tab(modifiers))),
            // text inputs already submit on enter
            Key::Named(Named::Enter) if status == event::Status::Ignored => {
                Some(Message::Hotkey(Hotkey::Enter))
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn valid_codes_open_their_booking() {
        let mut screen = PreBooking::default();
        screen.update(Message::CodeInput(" abs123 ".to_string()));

        let Action::Navigate(route) = screen.update(Message::Submit) else {
            panic!("expected navigation");
        };
        assert_eq!(route, Route::Booking("ABS123".to_string()));
        assert_eq!(screen.error, None);
    }

    #[test]
    fn invalid_codes_show_an_inline_message() {
        let mut screen = PreBooking::default();
        screen.update(Message::CodeInput("AB-1".to_string()));

        assert!(matches!(screen.update(Message::Submit), Action::None));
        assert!(screen.error.is_some());

        // typing again clears it
        screen.update(Message::CodeInput("AB-12".to_string()));
        assert_eq!(screen.error, None);
    }

    #[test]
    fn code_input_is_capped() {
        let mut screen = PreBooking::default();
        screen.update(Message::CodeInput("ABCDEFGHIJKLMNOP".to_string()));
        assert_eq!(screen.code, "ABCDEFGHIJKL");
    }
}
