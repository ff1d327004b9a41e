// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{Column, button, column, container, horizontal_rule, row, scrollable, text};
use iced::{Alignment, Element, Length};

use abs_core::{
    content::Catalog,
    pricing::{PricingSummaryItem, PricingUnit},
    session::BookingSession,
};
use abs_utils::{currency::PriceFormatter, styling::*};

use super::Message;
use crate::fl;

/// Running totals of the active room. Every line can be removed from here.
pub fn view<'a>(
    session: &'a BookingSession,
    catalog: &'a Catalog,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    let summary = session
        .selection()
        .map(|selection| selection.summary(catalog))
        .unwrap_or_default();

    let title = match session.active_room() {
        Some(room) if session.is_multi_room() => {
            fl!("pricing-title-room", room = room.room_name.as_str())
        }
        _ => fl!("pricing-title"),
    };

    let mut lines = Column::new().spacing(GLOBAL_SPACING);
    if summary.is_empty() {
        lines = lines.push(text(fl!("nothing-selected")).size(SMALL_TEXT_SIZE));
    }
    for item in &summary.items {
        lines = lines.push(line(item, formatter));
    }

    let subtotals = [
        (fl!("subtotal-room"), summary.room_total()),
        (fl!("subtotal-customizations"), summary.customizations_total()),
        (fl!("subtotal-offers"), summary.offers_total()),
    ];
    let mut totals = Column::new().spacing(2);
    for (label, amount) in subtotals.into_iter().filter(|(_, amount)| *amount > 0.) {
        totals = totals.push(amount_row(label, formatter.format(amount), SMALL_TEXT_SIZE));
    }
    totals = totals.push(amount_row(
        fl!("total"),
        formatter.format(summary.total()),
        SUBTITLE_TEXT_SIZE,
    ));
    if session.is_multi_room() {
        totals = totals.push(amount_row(
            fl!("reservation-total"),
            formatter.format(session.total(catalog)),
            TEXT_SIZE,
        ));
    }

    let content = column![
        text(title).size(SUBTITLE_TEXT_SIZE),
        scrollable(lines).height(Length::Fill),
        horizontal_rule(1),
        totals,
    ]
    .spacing(GLOBAL_SPACING * 2.);

    container(content)
        .width(PRICING_PANEL_WIDTH)
        .height(Length::Fill)
        .padding(10)
        .style(container::rounded_box)
        .into()
}

fn line<'a>(item: &PricingSummaryItem, formatter: &PriceFormatter) -> Element<'a, Message> {
    row![
        column![
            text(item.title.clone()).size(TEXT_SIZE),
            text(line_detail(item, formatter)).size(SMALL_TEXT_SIZE),
        ]
        .width(Length::Fill),
        text(formatter.format(item.total)).size(TEXT_SIZE),
        button(text("×"))
            .style(button::text)
            .on_press(Message::RemoveItem(item.item.clone())),
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center)
    .into()
}

fn amount_row<'a>(label: String, amount: String, size: f32) -> Element<'a, Message> {
    row![text(label).size(size).width(Length::Fill), text(amount).size(size)]
        .spacing(GLOBAL_SPACING)
        .into()
}

/// How a line total came to be, e.g. "2 × €18.00 × 3 nights"
fn line_detail(item: &PricingSummaryItem, formatter: &PriceFormatter) -> String {
    let base = format!("{} × {}", item.quantity, formatter.format(item.unit_price));
    match item.unit {
        PricingUnit::PerStay => base,
        PricingUnit::PerPerson => fl!("line-persons", base = base, persons = item.persons),
        PricingUnit::PerNight => fl!("line-nights", base = base, nights = item.nights),
    }
}
