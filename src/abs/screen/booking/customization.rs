// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{Column, checkbox, column, container, row, text};
use iced::{Alignment, Element, Length};

use abs_core::{
    content::Catalog,
    models::customization::{CustomizationOption, group_by_category},
    selection::RoomSelection,
};
use abs_utils::{currency::PriceFormatter, styling::*};

use super::{Message, unit_label};
use crate::fl;

/// Options grouped by category, one checkbox per option
pub fn view<'a>(
    catalog: &'a Catalog,
    selection: &'a RoomSelection,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    if catalog.customizations.is_empty() {
        return text(fl!("no-customizations")).size(SUBTITLE_TEXT_SIZE).into();
    }

    Column::with_children(group_by_category(&catalog.customizations).into_iter().map(
        |(category, options)| {
            let title = catalog
                .translations
                .resolve(&format!("customizations.{category}"), category_fallback(category));

            let mut group = Column::new()
                .push(text(title).size(SUBTITLE_TEXT_SIZE))
                .spacing(GLOBAL_SPACING);
            for option in options {
                group = group.push(option_row(
                    option,
                    selection.is_customization_selected(&option.id),
                    formatter,
                ));
            }

            container(group)
                .width(Length::Fill)
                .padding(10)
                .style(container::rounded_box)
                .into()
        },
    ))
    .spacing(GLOBAL_SPACING * 2.)
    .into()
}

fn option_row<'a>(
    option: &'a CustomizationOption,
    selected: bool,
    formatter: &'a PriceFormatter,
) -> Element<'a, Message> {
    let price = if option.price > 0. {
        format!("{} {}", formatter.format(option.price), unit_label(option.unit))
    } else {
        fl!("included")
    };
    let id = option.id.clone();

    row![
        column![
            checkbox(option.title.as_str(), selected)
                .on_toggle(move |_| Message::ToggleCustomization(id.clone()))
                .size(TEXT_SIZE),
            text(&option.description).size(SMALL_TEXT_SIZE),
        ]
        .spacing(2)
        .width(Length::Fill),
        text(price).size(TEXT_SIZE),
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center)
    .into()
}

/// "floor-level" → "Floor level"
fn category_fallback(category: &str) -> String {
    let words = category.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
