// SPDX-License-Identifier: GPL-3.0-only

use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{Column, button, column, container, focus_next, focus_previous, text, text_input};
use iced::{Alignment, Length, Subscription, Task, event};

use abs_core::{auth, routes::Route};
use abs_utils::styling::*;

use crate::fl;

/// Shown instead of the order pages until the guest logs in
pub struct Login {
    /// Page to open once logged in
    route: Route,
    email: String,
    reservation_code: String,
    email_error: Option<String>,
    code_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LoginTextInputFields {
    Email,
    ReservationCode,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Asks the parent to go back
    Back,
    /// Hotkey (Subscription) pressed
    Hotkey(Hotkey),
    /// Callback when using the text inputs
    TextInputUpdate(String, LoginTextInputFields),
    /// Validates the form and asks the parent to log in
    Submit,
}

pub enum Action {
    None,
    Back,
    Run(Task<Message>),
    Login {
        email: String,
        reservation_code: String,
        route: Route,
    },
}

impl Login {
    pub fn new(route: Route, reservation_code: Option<String>) -> Self {
        Self {
            route,
            email: String::new(),
            reservation_code: reservation_code.unwrap_or_default(),
            email_error: None,
            code_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Back => Action::Back,
            Message::Hotkey(hotkey) => match hotkey {
                Hotkey::Tab(modifiers) => {
                    if modifiers.shift() {
                        Action::Run(focus_previous())
                    } else {
                        Action::Run(focus_next())
                    }
                }
            },
            Message::TextInputUpdate(value, field) => {
                match field {
                    LoginTextInputFields::Email => {
                        self.email = value;
                        self.email_error = None;
                    }
                    LoginTextInputFields::ReservationCode => {
                        self.reservation_code = value;
                        self.code_error = None;
                    }
                }
                Action::None
            }
            Message::Submit => {
                let email = auth::validate_email(&self.email);
                let code = auth::validate_reservation_code(&self.reservation_code);
                self.email_error = email.is_err().then(|| fl!("invalid-email"));
                self.code_error = code.is_err().then(|| fl!("invalid-reservation-code"));

                match (email, code) {
                    (Ok(email), Ok(reservation_code)) => Action::Login {
                        email,
                        reservation_code,
                        route: self.route.clone(),
                    },
                    _ => Action::None,
                }
            }
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let email_input = text_input(&fl!("email-placeholder"), &self.email)
            .on_input(|value| Message::TextInputUpdate(value, LoginTextInputFields::Email))
            .on_submit(Message::Submit)
            .size(TEXT_SIZE)
            .padding(10);

        let code_input = text_input(&fl!("reservation-code-placeholder"), &self.reservation_code)
            .on_input(|value| {
                Message::TextInputUpdate(value, LoginTextInputFields::ReservationCode)
            })
            .on_submit(Message::Submit)
            .size(TEXT_SIZE)
            .padding(10);

        let error = |error: &Option<String>| {
            error
                .clone()
                .map(|error| text(error).size(SMALL_TEXT_SIZE).style(text::danger))
        };

        let form = Column::new()
            .push(text(fl!("login-title")).size(TITLE_TEXT_SIZE))
            .push(text(fl!("login-subtitle")).size(SMALL_TEXT_SIZE))
            .push(column![text(fl!("email")).size(SMALL_TEXT_SIZE), email_input].spacing(2))
            .push_maybe(error(&self.email_error))
            .push(
                column![text(fl!("reservation-code")).size(SMALL_TEXT_SIZE), code_input]
                    .spacing(2),
            )
            .push_maybe(error(&self.code_error))
            .push(
                button(text(fl!("login")).width(Length::Fill).align_x(Alignment::Center))
                    .on_press(Message::Submit)
                    .height(GLOBAL_BUTTON_HEIGHT)
                    .width(Length::Fill),
            )
            .push(
                button(text(fl!("back")))
                    .style(button::text)
                    .on_press(Message::Back),
            )
            .spacing(GLOBAL_SPACING * 2.)
            .width(Length::Fixed(360.));

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
}

fn handle_event(event: event::Event, _: event::Status, _: iced::window::Id) -> Option<Message> {
    match event {
        #[allow(clippy::collapsible_match)]
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match key {
            Key::Named(Named::Tab) => Some(Message::Hotkey(Hotkey::Tab(modifiers))),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(login: &mut Login, email: &str, code: &str) {
        login.update(Message::TextInputUpdate(
            email.to_string(),
            LoginTextInputFields::Email,
        ));
        login.update(Message::TextInputUpdate(
            code.to_string(),
            LoginTextInputFields::ReservationCode,
        ));
    }

    #[test]
    fn valid_credentials_ask_to_log_in() {
        let route = Route::Order("ORD-DEMO01".to_string());
        let mut login = Login::new(route.clone(), None);
        typed(&mut login, "Guest@Example.com", "abs123");

        let Action::Login {
            email,
            reservation_code,
            route: next,
        } = login.update(Message::Submit)
        else {
            panic!("expected a login");
        };
        assert_eq!(email, "guest@example.com");
        assert_eq!(reservation_code, "ABS123");
        assert_eq!(next, route);
    }

    #[test]
    fn each_invalid_field_gets_its_message() {
        let mut login = Login::new(Route::Orders, None);
        typed(&mut login, "not-an-email", "ABS123");

        assert!(matches!(login.update(Message::Submit), Action::None));
        assert!(login.email_error.is_some());
        assert_eq!(login.code_error, None);

        typed(&mut login, "guest@example.com", "X");
        assert!(matches!(login.update(Message::Submit), Action::None));
        assert_eq!(login.email_error, None);
        assert!(login.code_error.is_some());
    }
}
