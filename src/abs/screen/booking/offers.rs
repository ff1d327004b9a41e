// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use chrono::NaiveDate;
use iced::widget::{Column, Row, button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

use abs_core::{
    models::offer::{OfferSelection, OfferType},
    pricing::{PricingUnit, line_total},
    selection::{OfferChange, RoomSelection},
};
use abs_utils::{
    currency::PriceFormatter,
    date::{format_date, stay_dates},
    styling::*,
    text::ellipsize,
};

use super::{Message, unit_label};
use crate::fl;

const DESCRIPTION_LENGTH: usize = 140;

/// A night of the stay, shown the way guests write dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StayDate(NaiveDate);

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}

/// Special offer cards, each with its own controls and "Book Now" button
pub fn view<'a>(
    offers: &'a [OfferType],
    selection: &'a RoomSelection,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    if offers.is_empty() {
        return text(fl!("no-offers")).size(SUBTITLE_TEXT_SIZE).into();
    }

    Column::with_children(
        offers
            .iter()
            .map(|offer| offer_card(offer, selection, formatter)),
    )
    .spacing(GLOBAL_SPACING * 2.)
    .into()
}

fn offer_card<'a>(
    offer: &'a OfferType,
    selection: &'a RoomSelection,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    let current = selection.offer_selection(&offer.id);
    let stay = selection.stay();
    let booked = current.is_booked();

    let header = row![
        text(&offer.title).size(SUBTITLE_TEXT_SIZE).width(Length::Fill),
        text(format!(
            "{} {}",
            formatter.format(offer.price),
            unit_label(offer.unit)
        ))
        .size(TEXT_SIZE),
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center);

    let change = |change: OfferChange| Message::OfferChanged(offer.id.clone(), change);

    let quantity = stepper(
        fl!("quantity"),
        current.quantity,
        Some(change(OfferChange::Quantity(current.quantity.saturating_sub(1)))),
        offer
            .max_quantity
            .is_none_or(|max| current.quantity < max)
            .then(|| change(OfferChange::Quantity(current.quantity + 1))),
    );

    let persons = (offer.unit == PricingUnit::PerPerson).then(|| {
        stepper(
            fl!("persons"),
            current.persons,
            (current.persons > 1).then(|| change(OfferChange::Persons(current.persons - 1))),
            (current.persons < stay.guests)
                .then(|| change(OfferChange::Persons(current.persons + 1))),
        )
    });

    // per night offers with dates count their nights from the picked dates
    let nights = (offer.unit == PricingUnit::PerNight && !offer.requires_date).then(|| {
        stepper(
            fl!("nights"),
            current.nights,
            (current.nights > 1).then(|| change(OfferChange::Nights(current.nights - 1))),
            (current.nights < stay.nights())
                .then(|| change(OfferChange::Nights(current.nights + 1))),
        )
    });

    let dates = offer
        .requires_date
        .then(|| date_controls(offer, &current, stay_dates(stay.check_in, stay.check_out)));

    let total = line_total(
        offer.price,
        offer.unit,
        current.quantity,
        current.persons,
        current.nights,
    );

    let action = if booked {
        button(text(fl!("remove")))
            .style(button::danger)
            .on_press(Message::CancelOffer(offer.id.clone()))
    } else {
        button(text(fl!("book-now"))).on_press(Message::BookOffer(offer.id.clone()))
    };

    let footer = row![
        text(fl!("offer-total", total = formatter.format(total)))
            .size(TEXT_SIZE)
            .width(Length::Fill),
    ]
    .push_maybe(booked.then(|| text(fl!("booked")).size(SMALL_TEXT_SIZE).style(text::success)))
    .push(action.height(GLOBAL_BUTTON_HEIGHT))
    .spacing(GLOBAL_SPACING * 2.)
    .align_y(Alignment::Center);

    let content = column![
        header,
        text(ellipsize(&offer.description, DESCRIPTION_LENGTH)).size(SMALL_TEXT_SIZE),
        row![quantity]
            .push_maybe(persons)
            .push_maybe(nights)
            .spacing(GLOBAL_SPACING * 3.),
    ]
    .push_maybe(dates)
    .push(footer)
    .spacing(GLOBAL_SPACING);

    container(content)
        .width(Length::Fill)
        .padding(10)
        .style(container::rounded_box)
        .into()
}

/// `- value +` with its label, a `None` message disables the button
fn stepper<'a>(
    label: String,
    value: u32,
    on_decrease: Option<Message>,
    on_increase: Option<Message>,
) -> Element<'a, Message> {
    row![
        text(label).size(SMALL_TEXT_SIZE),
        button(text("-"))
            .style(button::secondary)
            .on_press_maybe(on_decrease),
        text(value.to_string()).size(TEXT_SIZE),
        button(text("+"))
            .style(button::secondary)
            .on_press_maybe(on_increase),
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center)
    .into()
}

fn date_controls<'a>(
    offer: &'a OfferType,
    current: &OfferSelection,
    nights: Vec<NaiveDate>,
) -> Element<'a, Message> {
    let id = offer.id.clone();

    if offer.uses_multiple_dates() {
        let toggles = Row::with_children(nights.into_iter().map(|date| {
            let picked = current.dates.contains(&date);
            button(text(format_date(date)).size(SMALL_TEXT_SIZE))
                .style(if picked {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::OfferChanged(id.clone(), OfferChange::ToggleDate(date)))
                .into()
        }))
        .spacing(GLOBAL_SPACING);

        column![text(fl!("pick-dates")).size(SMALL_TEXT_SIZE), toggles]
            .spacing(GLOBAL_SPACING)
            .into()
    } else {
        let options: Vec<StayDate> = nights.into_iter().map(StayDate).collect();
        row![
            text(fl!("pick-date")).size(SMALL_TEXT_SIZE),
            pick_list(options, current.date.map(StayDate), move |date: StayDate| {
                Message::OfferChanged(id.clone(), OfferChange::Date(Some(date.0)))
            }),
        ]
        .spacing(GLOBAL_SPACING)
        .align_y(Alignment::Center)
        .into()
    }
}
