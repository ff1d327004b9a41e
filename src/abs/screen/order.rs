// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{Column, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

use abs_core::{
    order::{Order, OrderItem, OrderStatus},
    routes::Route,
};
use abs_utils::{currency::PriceFormatter, styling::*};

use crate::fl;

/// The order pages: a fresh confirmation, the status of one order and the list of a reservation
pub enum OrderPage {
    Confirmation(Box<Order>),
    Status(Box<Order>),
    List {
        reservation_code: String,
        orders: Vec<Order>,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Asks the parent to go back home
    Back,
    /// Opens the status page of an order
    Open(String),
    /// Opens the list of the reservation orders
    ViewAll,
    Logout,
}

pub enum Action {
    None,
    Navigate(Route),
    Logout,
}

impl OrderPage {
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Back => Action::Navigate(Route::Home),
            Message::Open(order_id) => Action::Navigate(Route::Order(order_id)),
            Message::ViewAll => Action::Navigate(Route::Orders),
            Message::Logout => Action::Logout,
        }
    }

    pub fn view<'a>(&'a self, formatter: &'a PriceFormatter) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self {
            OrderPage::Confirmation(order) => {
                let actions = row![
                    button(text(fl!("back-home")))
                        .style(button::secondary)
                        .on_press(Message::Back),
                    button(text(fl!("review-orders"))).on_press(Message::ViewAll),
                ]
                .spacing(GLOBAL_SPACING);

                column![
                    text(fl!("order-placed")).size(TITLE_TEXT_SIZE),
                    text(fl!("order-placed-subtitle", id = order.id.as_str())).size(TEXT_SIZE),
                    order_details(order, formatter),
                    actions,
                ]
                .spacing(GLOBAL_SPACING * 2.)
                .into()
            }
            OrderPage::Status(order) => {
                let actions = row![
                    button(text(fl!("all-orders")))
                        .style(button::secondary)
                        .on_press(Message::ViewAll),
                    horizontal_space(),
                    button(text(fl!("logout")))
                        .style(button::danger)
                        .on_press(Message::Logout),
                ]
                .spacing(GLOBAL_SPACING);

                column![
                    text(fl!("order-title", id = order.id.as_str())).size(TITLE_TEXT_SIZE),
                    order_details(order, formatter),
                    actions,
                ]
                .spacing(GLOBAL_SPACING * 2.)
                .into()
            }
            OrderPage::List {
                reservation_code,
                orders,
            } => {
                let list: Element<'a, Message> = if orders.is_empty() {
                    text(fl!("no-orders")).size(SUBTITLE_TEXT_SIZE).into()
                } else {
                    Column::with_children(orders.iter().map(|order| {
                        row![
                            text(order.id.as_str()).size(TEXT_SIZE).width(150.),
                            text(order.created_at.format("%d/%m/%Y %H:%M").to_string())
                                .size(SMALL_TEXT_SIZE)
                                .width(140.),
                            text(status_label(order.status))
                                .size(SMALL_TEXT_SIZE)
                                .width(Length::Fill),
                            text(formatter.format(order.total)).size(TEXT_SIZE),
                            button(text(fl!("open"))).on_press(Message::Open(order.id.clone())),
                        ]
                        .spacing(GLOBAL_SPACING)
                        .align_y(Alignment::Center)
                        .into()
                    }))
                    .spacing(GLOBAL_SPACING)
                    .into()
                };

                let actions = row![
                    button(text(fl!("back-home")))
                        .style(button::secondary)
                        .on_press(Message::Back),
                    horizontal_space(),
                    button(text(fl!("logout")))
                        .style(button::danger)
                        .on_press(Message::Logout),
                ]
                .spacing(GLOBAL_SPACING);

                column![
                    text(fl!("orders-title", code = reservation_code.as_str()))
                        .size(TITLE_TEXT_SIZE),
                    list,
                    actions,
                ]
                .spacing(GLOBAL_SPACING * 2.)
                .into()
            }
        };

        container(scrollable(container(content).padding(20).max_width(720.)))
            .center_x(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn order_details<'a>(order: &'a Order, formatter: &'a PriceFormatter) -> Element<'a, Message> {
    let mut details = Column::new()
        .push(
            row![
                text(fl!("status")).width(Length::Fill),
                text(status_label(order.status)).style(status_style(order.status)),
            ]
            .spacing(GLOBAL_SPACING),
        )
        .push(text(fl!(
            "order-created",
            date = order.created_at.format("%d/%m/%Y %H:%M").to_string()
        )).size(SMALL_TEXT_SIZE))
        .spacing(GLOBAL_SPACING * 2.);

    for room in &order.rooms {
        let mut lines = Column::new()
            .push(text(room.room_name.as_str()).size(SUBTITLE_TEXT_SIZE))
            .spacing(GLOBAL_SPACING);
        for item in &room.items {
            lines = lines.push(item_row(item, formatter));
        }
        details = details.push(container(lines).padding(10).style(container::rounded_box));
    }

    details
        .push(
            row![
                text(fl!("total")).size(SUBTITLE_TEXT_SIZE).width(Length::Fill),
                text(formatter.format(order.total)).size(SUBTITLE_TEXT_SIZE),
            ]
            .spacing(GLOBAL_SPACING),
        )
        .into()
}

fn item_row<'a>(item: &'a OrderItem, formatter: &'a PriceFormatter) -> Element<'a, Message> {
    row![
        text(item.item.title.as_str()).width(Length::Fill),
        text(status_label(item.status))
            .size(SMALL_TEXT_SIZE)
            .style(status_style(item.status)),
        text(formatter.format(item.item.total)),
    ]
    .spacing(GLOBAL_SPACING * 2.)
    .align_y(Alignment::Center)
    .into()
}

fn status_label(status: OrderStatus) -> String {
    match status {
        OrderStatus::Pending => fl!("status-pending"),
        OrderStatus::Confirmed => fl!("status-confirmed"),
        OrderStatus::PartiallyConfirmed => fl!("status-partially-confirmed"),
        OrderStatus::Rejected => fl!("status-rejected"),
        OrderStatus::Cancelled => fl!("status-cancelled"),
    }
}

fn status_style(status: OrderStatus) -> fn(&iced::Theme) -> text::Style {
    match status {
        OrderStatus::Confirmed => text::success,
        OrderStatus::Rejected | OrderStatus::Cancelled => text::danger,
        OrderStatus::Pending | OrderStatus::PartiallyConfirmed => text::default,
    }
}
