// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::fl;
use abs_utils::styling::{GLOBAL_SPACING, SMALL_TEXT_SIZE, TEXT_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Secondary,
    Success,
    Danger,
}

/// A dismissible alert shown above the current page
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub status: Status,
}

impl Toast {
    pub fn error_toast(err: impl std::fmt::Display) -> Self {
        Self {
            title: fl!("error"),
            body: err.to_string(),
            status: Status::Danger,
        }
    }

    pub fn warning_toast(body: impl Into<String>) -> Self {
        Self {
            title: fl!("warning"),
            body: body.into(),
            status: Status::Secondary,
        }
    }

    pub fn success_toast(body: impl Into<String>) -> Self {
        Self {
            title: fl!("success"),
            body: body.into(),
            status: Status::Success,
        }
    }
}

/// Stacks the given toasts, each one with its own close button
pub fn view<'a, Message: Clone + 'a>(
    toasts: &'a [Toast],
    on_close: fn(usize) -> Message,
) -> Element<'a, Message> {
    column(toasts.iter().enumerate().map(|(index, toast)| {
        let status = toast.status;
        let content = row![
            column![
                text(&toast.title).size(TEXT_SIZE),
                text(&toast.body).size(SMALL_TEXT_SIZE)
            ]
            .width(Length::Fill),
            button(text("×").size(TEXT_SIZE))
                .style(button::text)
                .on_press(on_close(index)),
        ]
        .align_y(Alignment::Center)
        .spacing(GLOBAL_SPACING);

        container(content)
            .width(Length::Fill)
            .padding(10)
            .style(move |theme: &Theme| styled(theme, status))
            .into()
    }))
    .spacing(GLOBAL_SPACING)
    .into()
}

fn styled(theme: &Theme, status: Status) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        Status::Secondary => palette.secondary.weak,
        Status::Success => palette.success.weak,
        Status::Danger => palette.danger.weak,
    };

    container::Style {
        background: Some(pair.color.into()),
        text_color: Some(pair.text),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
