// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use iced::widget::{Column, Row, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length, Task};
use sqlx::PgPool;

use abs_core::{
    content::{self, Catalog},
    error::SelectionError,
    flow::{self, BookingStep},
    models::{booking::BookingInfo, section::SectionConfig},
    order::Order,
    pricing::{ItemRef, PricingUnit},
    selection::OfferChange,
    session::BookingSession,
};
use abs_utils::{
    currency::PriceFormatter,
    date::format_date,
    pagination::{PaginationAction, PaginationConfig},
    styling::*,
};

use crate::abs::widgets::toast::Toast;
use crate::fl;

mod carousel;
mod customization;
mod offers;
mod pricing_panel;

pub struct Booking {
    reservation_code: String,
    steps: Vec<BookingStep>,
    state: State,
}

enum State {
    Loading,
    Failed(String),
    Ready(Box<Ready>),
}

struct Ready {
    session: BookingSession,
    step: BookingStep,
    carousel: PaginationConfig,
    /// Inline message about the last rejected selection
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Asks the parent to go back
    Back,
    /// Asks the parent to add a toast
    AddToast(Toast),

    /// Callback after loading the reservation
    Loaded(Box<BookingInfo>),
    /// Callback when the reservation could not be found
    LoadFailed(String),

    /// Makes another booked room the one being customized
    SwitchRoom(String),
    GoToStep(BookingStep),
    NextStep,
    PreviousStep,

    /// Pages the room carousel
    Carousel(PaginationAction),
    SelectRoom(String),
    ClearRoom,

    ToggleCustomization(String),

    /// A control of an offer card changed
    OfferChanged(String, OfferChange),
    /// "Book Now" pressed on an offer card
    BookOffer(String),
    /// "Remove" pressed on an offer card
    CancelOffer(String),

    /// Remove button of a pricing panel line
    RemoveItem(ItemRef),

    /// Turns the selections into an order
    Confirm,
    DismissNotice,
}

pub enum Action {
    None,
    Back,
    Run(Task<Message>),
    AddToast(Toast),
    /// The reservation is ready, tells whether it spans several rooms
    Loaded { multi_room: bool },
    OrderPlaced(Order),
}

impl Booking {
    pub fn new(
        database: Option<Arc<PgPool>>,
        reservation_code: String,
        sections: &[SectionConfig],
    ) -> (Self, Task<Message>) {
        (
            Self {
                reservation_code: reservation_code.clone(),
                steps: flow::steps(sections),
                state: State::Loading,
            },
            Task::perform(
                content::load_booking(database, reservation_code),
                |res| match res {
                    Ok(booking) => Message::Loaded(Box::new(booking)),
                    Err(err) => {
                        tracing::warn!("{err}");
                        Message::LoadFailed(err.to_string())
                    }
                },
            ),
        )
    }

    pub fn reservation_code(&self) -> &str {
        &self.reservation_code
    }

    pub fn update(&mut self, message: Message, catalog: &Catalog) -> Action {
        match message {
            Message::Back => Action::Back,
            Message::AddToast(toast) => Action::AddToast(toast),
            Message::Loaded(booking) => match BookingSession::new(*booking) {
                Ok(session) => {
                    let multi_room = session.is_multi_room();
                    tracing::info!(
                        "booking {} loaded ({} rooms)",
                        session.booking().reservation_code,
                        session.booking().rooms.len()
                    );
                    self.reservation_code = session.booking().reservation_code.clone();
                    self.state = State::Ready(Box::new(Ready {
                        session,
                        step: self.steps.first().copied().unwrap_or(BookingStep::Summary),
                        carousel: PaginationConfig::default(),
                        notice: None,
                    }));
                    Action::Loaded { multi_room }
                }
                Err(err) => {
                    self.state = State::Failed(err.to_string());
                    Action::None
                }
            },
            Message::LoadFailed(err) => {
                self.state = State::Failed(err);
                Action::None
            }
            message => {
                let State::Ready(ready) = &mut self.state else {
                    return Action::None;
                };
                ready.update(message, catalog, &self.steps)
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        catalog: &'a Catalog,
        formatter: &'a PriceFormatter,
    ) -> Element<'a, Message> {
        match &self.state {
            State::Loading => container(text(fl!("loading-booking")))
                .center(Length::Fill)
                .into(),
            State::Failed(err) => {
                let content = column![
                    text(fl!("booking-not-found", code = self.reservation_code.as_str()))
                        .size(SUBTITLE_TEXT_SIZE),
                    text(err.as_str()).size(SMALL_TEXT_SIZE).style(text::danger),
                    button(text(fl!("back"))).on_press(Message::Back),
                ]
                .spacing(GLOBAL_SPACING * 2.)
                .align_x(Alignment::Center);
                container(content).center(Length::Fill).into()
            }
            State::Ready(ready) => ready.view(catalog, formatter, &self.steps),
        }
    }
}

impl Ready {
    /// Pages the carousel to the room picked for the active booking room
    fn reveal_selected_room(&mut self, catalog: &Catalog) {
        let selected = self.session.selection().and_then(|s| s.selected_room());
        if let Some(index) = selected.and_then(|id| catalog.rooms.iter().position(|r| r.id == id)) {
            self.carousel.reveal(index);
        }
    }

    fn update(&mut self, message: Message, catalog: &Catalog, steps: &[BookingStep]) -> Action {
        let result: Result<(), SelectionError> = match message {
            Message::SwitchRoom(room_id) => self
                .session
                .switch_room(&room_id)
                .map(|()| self.reveal_selected_room(catalog)),
            Message::GoToStep(step) => {
                self.step = step;
                Ok(())
            }
            Message::NextStep => {
                if let Some(step) = flow::next(self.step, steps) {
                    self.step = step;
                }
                Ok(())
            }
            Message::PreviousStep => {
                if let Some(step) = flow::previous(self.step, steps) {
                    self.step = step;
                }
                Ok(())
            }
            Message::Carousel(action) => {
                self.carousel.apply(action, catalog.rooms.len());
                Ok(())
            }
            Message::SelectRoom(id) => match (catalog.room(&id), self.session.selection_mut()) {
                (Some(room), Some(selection)) => {
                    selection.select_room(room);
                    Ok(())
                }
                _ => Err(SelectionError::UnknownItem(id)),
            },
            Message::ClearRoom => {
                if let Some(selection) = self.session.selection_mut() {
                    selection.clear_room();
                }
                Ok(())
            }
            Message::ToggleCustomization(id) => {
                match (catalog.customization(&id), self.session.selection_mut()) {
                    (Some(option), Some(selection)) => selection
                        .toggle_customization(option, &catalog.customizations, &catalog.rules)
                        .map(|dropped| {
                            if !dropped.is_empty() {
                                tracing::debug!("{id} replaced {dropped:?}");
                            }
                        }),
                    _ => Err(SelectionError::UnknownItem(id)),
                }
            }
            Message::OfferChanged(id, change) => {
                match (catalog.offer(&id), self.session.selection_mut()) {
                    (Some(offer), Some(selection)) => selection.update_offer(offer, change),
                    _ => Err(SelectionError::UnknownItem(id)),
                }
            }
            Message::BookOffer(id) => match (catalog.offer(&id), self.session.selection_mut()) {
                (Some(offer), Some(selection)) => selection.book_offer(offer),
                _ => Err(SelectionError::UnknownItem(id)),
            },
            Message::CancelOffer(id) => {
                if let Some(selection) = self.session.selection_mut() {
                    selection.cancel_offer(&id);
                }
                Ok(())
            }
            Message::RemoveItem(item) => match self.session.selection_mut() {
                Some(selection) => selection.remove_item(&item, &catalog.rules),
                None => Err(SelectionError::UnknownItem(item.id().to_string())),
            },
            Message::Confirm => {
                let now = chrono::Local::now().naive_local();
                return match Order::from_session(&self.session, catalog, now) {
                    Ok(order) => Action::OrderPlaced(order),
                    Err(err) => Action::AddToast(Toast::error_toast(err)),
                };
            }
            Message::DismissNotice => Ok(()),
            Message::Back | Message::AddToast(_) | Message::Loaded(_) | Message::LoadFailed(_) => {
                Ok(())
            }
        };

        self.notice = result.err().map(|err| selection_notice(&err, catalog));
        Action::None
    }

    fn view<'a>(
        &'a self,
        catalog: &'a Catalog,
        formatter: &'a PriceFormatter,
        steps: &'a [BookingStep],
    ) -> Element<'a, Message> {
        let booking = self.session.booking();

        let header = row![
            button(text(fl!("back")))
                .style(button::secondary)
                .on_press(Message::Back),
            column![
                text(fl!("booking-title", code = booking.reservation_code.as_str()))
                    .size(TITLE_TEXT_SIZE),
                text(fl!(
                    "booking-stay",
                    guest = booking.guest_name.as_str(),
                    checkin = format_date(booking.check_in),
                    checkout = format_date(booking.check_out),
                    nights = booking.nights()
                ))
                .size(SMALL_TEXT_SIZE),
            ]
            .spacing(2)
        ]
        .spacing(GLOBAL_SPACING * 2.)
        .align_y(Alignment::Center);

        let room_tabs = self.session.is_multi_room().then(|| {
            Row::with_children(booking.rooms.iter().map(|room| {
                let active = room.id == self.session.active_room_id();
                button(
                    text(fl!(
                        "room-tab",
                        name = room.room_name.as_str(),
                        guests = room.guests()
                    ))
                    .size(TEXT_SIZE),
                )
                .style(if active {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::SwitchRoom(room.id.clone()))
                .into()
            }))
            .spacing(GLOBAL_SPACING)
        });

        let step_bar = Row::with_children(steps.iter().enumerate().map(|(index, step)| {
            let label = format!("{}. {}", index + 1, step_title(*step, catalog));
            button(text(label).size(SMALL_TEXT_SIZE))
                .style(if *step == self.step {
                    button::primary
                } else {
                    button::text
                })
                .on_press(Message::GoToStep(*step))
                .into()
        }))
        .spacing(GLOBAL_SPACING);

        let notice = self.notice.as_deref().map(|notice| {
            row![
                text(notice).style(text::danger).width(Length::Fill),
                button(text("×"))
                    .style(button::text)
                    .on_press(Message::DismissNotice),
            ]
            .align_y(Alignment::Center)
        });

        let step_content: Element<'a, Message> = match self.session.selection() {
            None => text(fl!("no-room-selected")).into(),
            Some(selection) => match self.step {
                BookingStep::RoomSelection => {
                    carousel::view(&catalog.rooms, selection, &self.carousel, formatter)
                }
                BookingStep::Customization => {
                    customization::view(catalog, selection, formatter)
                }
                BookingStep::SpecialOffers => offers::view(&catalog.offers, selection, formatter),
                BookingStep::Summary => self.summary_view(catalog, formatter),
            },
        };

        let panel = pricing_panel::view(&self.session, catalog, formatter);

        let body = row![
            scrollable(
                column![
                    text(step_title(self.step, catalog)).size(SUBTITLE_TEXT_SIZE),
                    step_content
                ]
                .spacing(GLOBAL_SPACING * 2.)
                .padding([0, 15])
            )
            .width(Length::Fill)
            .height(Length::Fill),
            panel,
        ]
        .spacing(GLOBAL_SPACING * 2.)
        .height(Length::Fill);

        let previous = flow::previous(self.step, steps);
        let next = flow::next(self.step, steps);
        let navigation = row![
            button(text(fl!("previous")))
                .style(button::secondary)
                .height(GLOBAL_BUTTON_HEIGHT)
                .on_press_maybe(previous.map(|_| Message::PreviousStep)),
            horizontal_space(),
        ]
        .push_maybe(next.map(|_| {
            button(text(fl!("next")))
                .height(GLOBAL_BUTTON_HEIGHT)
                .on_press(Message::NextStep)
        }))
        .push_maybe(next.is_none().then(|| self.confirm_button(catalog)))
        .align_y(Alignment::Center);

        Column::new()
            .push(header)
            .push_maybe(room_tabs)
            .push(step_bar)
            .push_maybe(notice)
            .push(body)
            .push(navigation)
            .spacing(GLOBAL_SPACING * 2.)
            .padding(15)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn confirm_button<'a>(&self, catalog: &Catalog) -> iced::widget::Button<'a, Message> {
        button(text(fl!("confirm-order")))
            .style(button::success)
            .height(GLOBAL_BUTTON_HEIGHT)
            .on_press_maybe(self.session.has_items(catalog).then_some(Message::Confirm))
    }

    /// Every room of the reservation with its lines, used as the last step
    fn summary_view<'a>(
        &'a self,
        catalog: &'a Catalog,
        formatter: &'a PriceFormatter,
    ) -> Element<'a, Message> {
        let mut content = Column::new().spacing(GLOBAL_SPACING * 2.);

        for (room, summary) in self.session.summaries(catalog) {
            let mut lines = Column::new()
                .push(text(room.room_name.clone()).size(SUBTITLE_TEXT_SIZE))
                .spacing(GLOBAL_SPACING);

            if summary.is_empty() {
                lines = lines.push(text(fl!("nothing-selected")).size(SMALL_TEXT_SIZE));
            }
            for item in &summary.items {
                lines = lines.push(
                    row![
                        text(item.title.clone()).width(Length::Fill),
                        text(formatter.format(item.total)),
                    ]
                    .spacing(GLOBAL_SPACING),
                );
            }
            lines = lines.push(
                row![
                    text(fl!("room-subtotal")).width(Length::Fill),
                    text(formatter.format(summary.total())),
                ]
                .spacing(GLOBAL_SPACING),
            );

            content = content.push(container(lines).padding(10).style(container::rounded_box));
        }

        content
            .push(
                row![
                    text(fl!("total")).size(SUBTITLE_TEXT_SIZE).width(Length::Fill),
                    text(formatter.format(self.session.total(catalog))).size(SUBTITLE_TEXT_SIZE),
                ]
                .spacing(GLOBAL_SPACING),
            )
            .into()
    }
}

/// Section titles can be overridden by the content backend
fn step_title(step: BookingStep, catalog: &Catalog) -> String {
    match step {
        BookingStep::RoomSelection => {
            catalog.translations.resolve("rooms.title", fl!("step-rooms"))
        }
        BookingStep::Customization => catalog
            .translations
            .resolve("customizations.title", fl!("step-customizations")),
        BookingStep::SpecialOffers => {
            catalog.translations.resolve("offers.title", fl!("step-offers"))
        }
        BookingStep::Summary => fl!("step-summary"),
    }
}

fn unit_label(unit: PricingUnit) -> String {
    match unit {
        PricingUnit::PerStay => fl!("per-stay"),
        PricingUnit::PerPerson => fl!("per-person"),
        PricingUnit::PerNight => fl!("per-night"),
    }
}

fn selection_notice(err: &SelectionError, catalog: &Catalog) -> String {
    let title = |id: &str| {
        catalog
            .customization(id)
            .map(|c| c.title.clone())
            .or_else(|| catalog.offer(id).map(|o| o.title.clone()))
            .unwrap_or_else(|| id.to_string())
    };

    match err {
        SelectionError::Requires { option, missing } => fl!(
            "customization-requires",
            option = title(option),
            missing = title(missing)
        ),
        SelectionError::MissingDate(offer) => fl!("offer-needs-date", offer = title(offer)),
        SelectionError::DateOutsideStay(date) => {
            fl!("date-outside-stay", date = format_date(*date))
        }
        err => err.to_string(),
    }
}
