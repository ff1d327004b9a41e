// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{Row, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use abs_core::{models::room_option::RoomOption, selection::RoomSelection};
use abs_utils::{
    currency::PriceFormatter,
    pagination::{PaginationAction, PaginationConfig},
    styling::*,
    text::ellipsize,
};

use super::Message;
use crate::fl;

const DESCRIPTION_LENGTH: usize = 90;

/// Room upgrades, a page of cards at a time
pub fn view<'a>(
    rooms: &'a [RoomOption],
    selection: &'a RoomSelection,
    pagination: &'a PaginationConfig,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    if rooms.is_empty() {
        return container(text(fl!("no-rooms")).size(SUBTITLE_TEXT_SIZE))
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .padding(50.)
            .into();
    }

    let guests = selection.stay().guests;
    let cards = Row::with_children(
        rooms[pagination.range(rooms.len())]
            .iter()
            .map(|room| {
                let selected = selection.selected_room() == Some(room.id.as_str());
                room_card(room, selected, guests, formatter)
            }),
    )
    .spacing(GLOBAL_SPACING * 2.);

    let pages = row![
        button(text("<"))
            .style(button::secondary)
            .on_press_maybe(
                pagination
                    .can_go_back()
                    .then_some(Message::Carousel(PaginationAction::Back)),
            ),
        text(fl!(
            "carousel-page",
            page = (pagination.current_page + 1),
            pages = pagination.page_count(rooms.len())
        ))
        .size(SMALL_TEXT_SIZE),
        button(text(">")).style(button::secondary).on_press_maybe(
            pagination
                .can_go_forward(rooms.len())
                .then_some(Message::Carousel(PaginationAction::Forward))
        ),
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center);

    column![cards, pages]
        .spacing(GLOBAL_SPACING * 2.)
        .align_x(Alignment::Center)
        .into()
}

fn room_card<'a>(
    room: &'a RoomOption,
    selected: bool,
    guests: u32,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    let mut details: Vec<String> = Vec::new();
    if let Some(size) = room.size_m2 {
        details.push(format!("{size} m²"));
    }
    if let Some(max_guests) = room.max_guests {
        details.push(fl!("max-guests", guests = max_guests));
    }

    let fits = room.fits(guests);
    let action = if selected {
        button(text(fl!("selected")).width(Length::Fill).align_x(Alignment::Center))
            .style(button::success)
            .on_press(Message::ClearRoom)
    } else {
        button(text(fl!("select")).width(Length::Fill).align_x(Alignment::Center))
            .on_press_maybe(fits.then(|| Message::SelectRoom(room.id.clone())))
    };

    let content = column![
        text(&room.title).size(SUBTITLE_TEXT_SIZE),
        text(ellipsize(&room.description, DESCRIPTION_LENGTH)).size(SMALL_TEXT_SIZE),
        text(room.amenities.join(" · ")).size(SMALL_TEXT_SIZE),
        text(details.join(" · ")).size(SMALL_TEXT_SIZE),
        text(fl!(
            "upgrade-price",
            price = formatter.format(room.price),
            unit = super::unit_label(abs_core::pricing::PricingUnit::PerNight)
        ))
        .size(TEXT_SIZE),
    ]
    .push_maybe((!fits).then(|| {
        text(fl!("room-too-small"))
            .size(SMALL_TEXT_SIZE)
            .style(text::danger)
    }))
    .push(action.width(Length::Fill).height(GLOBAL_BUTTON_HEIGHT))
    .spacing(GLOBAL_SPACING);

    container(content)
        .width(CARD_WIDTH)
        .padding(10)
        .style(container::rounded_box)
        .into()
}
