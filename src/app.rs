// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use iced::widget::{Column, center, container, text};
use iced::{Length, Subscription, Task};
use sqlx::PgPool;

use abs_core::{
    auth::{AuthState, AuthStore},
    config::AppConfig,
    content::{self, Catalog, ContentOrigin, LoadedContent},
    database, mock,
    order::OrderBook,
    routes::{Route, RouteAccess},
};
use abs_utils::currency::PriceFormatter;

use crate::abs::screen::{
    Booking, Login, OrderPage, PreBooking, Screen, booking, login, order, prebooking,
};
use crate::abs::widgets::toast::{self, Toast};
use crate::fl;

pub struct Abs {
    formatter: PriceFormatter,
    auth_store: AuthStore,
    auth: AuthState,
    orders: OrderBook,
    /// Reservation code of the last opened booking, `/multi-booking` reopens it
    last_reservation: Option<String>,
    route: Route,
    toasts: Vec<Toast>,
    state: State,
}

enum State {
    Loading,
    Ready {
        database: Option<Arc<PgPool>>,
        catalog: Arc<Catalog>,
        screen: Screen,
    },
}

/// Result of connecting to the backend and loading the content
#[derive(Debug, Clone)]
pub struct Startup {
    database: Option<Arc<PgPool>>,
    content: LoadedContent,
    database_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Started(Box<Startup>),
    Navigate(Route),

    PreBooking(prebooking::Message),
    Booking(booking::Message),
    Login(login::Message),
    Order(order::Message),

    AddToast(Toast),
    CloseToast(usize),
}

impl Abs {
    pub fn new(config: AppConfig, route: Route, migrate: bool) -> (Self, Task<Message>) {
        let auth_store = AuthStore::in_dir(&config.data_dir);
        let auth = auth_store.load();
        let startup = start(config.database_url.clone(), migrate, config.locale.clone());

        (
            Self {
                formatter: config.price_formatter(),
                auth_store,
                auth,
                orders: OrderBook::with_demo_orders(),
                last_reservation: None,
                route,
                toasts: Vec::new(),
                state: State::Loading,
            },
            Task::perform(startup, |startup| Message::Started(Box::new(startup))),
        )
    }

    pub fn title(&self) -> String {
        format!("ABS · {}", self.route)
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Light
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let content = match &self.state {
            State::Loading => center(text(fl!("loading"))).into(),
            State::Ready {
                screen, catalog, ..
            } => match screen {
                Screen::PreBooking(prebooking) => prebooking.view().map(Message::PreBooking),
                Screen::Booking(booking) => booking
                    .view(catalog, &self.formatter)
                    .map(Message::Booking),
                Screen::Login(login) => login.view().map(Message::Login),
                Screen::Order(order) => order.view(&self.formatter).map(Message::Order),
            },
        };

        let toasts = (!self.toasts.is_empty())
            .then(|| container(toast::view(&self.toasts, Message::CloseToast)).padding(10));

        Column::new()
            .push_maybe(toasts)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Started(startup) => {
                let Startup {
                    database,
                    content,
                    database_error,
                } = *startup;

                if let Some(err) = database_error {
                    self.toasts.push(Toast::error_toast(err));
                }
                match content.origin {
                    ContentOrigin::Backend => tracing::info!("content loaded from the backend"),
                    ContentOrigin::Mock => tracing::info!("running on sample content"),
                }
                // empty collections are expected on a fresh backend, only failures are shown
                for warning in content.warnings.iter().filter(|w| w.is_failure()) {
                    self.toasts.push(Toast::warning_toast(warning.to_string()));
                }

                self.state = State::Ready {
                    database,
                    catalog: Arc::new(content.catalog),
                    screen: Screen::PreBooking(PreBooking::default()),
                };
                return self.open(self.route.clone());
            }
            Message::Navigate(route) => return self.open(route),

            Message::PreBooking(message) => {
                let State::Ready {
                    screen: Screen::PreBooking(prebooking),
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                return match prebooking.update(message) {
                    prebooking::Action::None => Task::none(),
                    prebooking::Action::Run(task) => task.map(Message::PreBooking),
                    prebooking::Action::Navigate(route) => self.open(route),
                };
            }

            Message::Booking(message) => {
                let State::Ready {
                    screen: Screen::Booking(booking),
                    catalog,
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                return match booking.update(message, catalog) {
                    booking::Action::None => Task::none(),
                    booking::Action::Run(task) => task.map(Message::Booking),
                    booking::Action::Back => self.open(Route::PreBooking),
                    booking::Action::AddToast(toast) => self.update(Message::AddToast(toast)),
                    booking::Action::Loaded { multi_room } => {
                        self.last_reservation = Some(booking.reservation_code().to_string());
                        if multi_room && matches!(self.route, Route::Booking(_)) {
                            self.route = Route::MultiBooking;
                        }
                        Task::none()
                    }
                    booking::Action::OrderPlaced(order) => {
                        let order_id = order.id.clone();
                        self.orders.insert(order);
                        self.toasts
                            .push(Toast::success_toast(fl!("order-sent", id = order_id.as_str())));
                        self.open(Route::NewOrder(order_id))
                    }
                };
            }

            Message::Login(message) => {
                let State::Ready {
                    screen: Screen::Login(login),
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                return match login.update(message) {
                    login::Action::None => Task::none(),
                    login::Action::Run(task) => task.map(Message::Login),
                    login::Action::Back => self.open(Route::Home),
                    login::Action::Login {
                        email,
                        reservation_code,
                        route,
                    } => match self.auth_store.login(&email, &reservation_code) {
                        Ok(auth) => {
                            self.auth = auth;
                            self.open(route)
                        }
                        Err(err) => {
                            tracing::error!("login failed: {err}");
                            self.update(Message::AddToast(Toast::error_toast(err)))
                        }
                    },
                };
            }

            Message::Order(message) => {
                let State::Ready {
                    screen: Screen::Order(order),
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                return match order.update(message) {
                    order::Action::None => Task::none(),
                    order::Action::Navigate(route) => self.open(route),
                    order::Action::Logout => {
                        if let Err(err) = self.auth_store.logout() {
                            tracing::error!("logout failed: {err}");
                            self.toasts.push(Toast::error_toast(err));
                        }
                        self.auth = AuthState::default();
                        self.open(Route::Home)
                    }
                };
            }

            Message::AddToast(toast) => {
                self.toasts.push(toast);
            }
            Message::CloseToast(index) => {
                if index < self.toasts.len() {
                    self.toasts.remove(index);
                }
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let State::Ready { screen, .. } = &self.state else {
            return Subscription::none();
        };

        match screen {
            Screen::PreBooking(prebooking) => prebooking.subscription().map(Message::PreBooking),
            Screen::Login(login) => login.subscription().map(Message::Login),
            Screen::Booking(_) | Screen::Order(_) => Subscription::none(),
        }
    }

    /// Shows the page of a route, the login form first when the route needs it
    fn open(&mut self, route: Route) -> Task<Message> {
        let State::Ready {
            database,
            catalog,
            screen,
        } = &mut self.state
        else {
            self.route = route;
            return Task::none();
        };

        tracing::info!("opening {route}");

        if route.access(&self.auth) == RouteAccess::LoginRequired {
            *screen = Screen::Login(Login::new(route.clone(), self.last_reservation.clone()));
            self.route = route;
            return Task::none();
        }

        let task = match &route {
            Route::Home | Route::PreBooking => {
                *screen = Screen::PreBooking(PreBooking::new(self.last_reservation.clone()));
                Task::none()
            }
            Route::Booking(_) | Route::MultiBooking => {
                let reservation_code = match &route {
                    Route::Booking(code) => code.clone(),
                    _ => self
                        .last_reservation
                        .clone()
                        .unwrap_or_else(|| mock::DEMO_MULTI_RESERVATION_CODE.to_string()),
                };
                let (booking, task) =
                    Booking::new(database.clone(), reservation_code, &catalog.sections);
                *screen = Screen::Booking(booking);
                task.map(Message::Booking)
            }
            Route::NewOrder(order_id) => match self.orders.get(order_id) {
                Some(order) => {
                    *screen = Screen::Order(OrderPage::Confirmation(Box::new(order.clone())));
                    Task::none()
                }
                None => {
                    self.toasts.push(Toast::error_toast(
                        abs_core::Error::UnknownOrder(order_id.clone()),
                    ));
                    *screen = Screen::PreBooking(PreBooking::new(self.last_reservation.clone()));
                    Task::none()
                }
            },
            Route::Order(order_id) => {
                match self.orders.get_for(order_id, &self.auth) {
                    Ok(order) => {
                        *screen = Screen::Order(OrderPage::Status(Box::new(order.clone())));
                    }
                    Err(err) => {
                        tracing::warn!("{err}");
                        self.toasts.push(Toast::error_toast(err));
                        *screen = order_list(&self.orders, &self.auth);
                    }
                }
                Task::none()
            }
            Route::Orders => {
                *screen = order_list(&self.orders, &self.auth);
                Task::none()
            }
        };

        self.route = route;
        task
    }
}

/// The orders of the logged in reservation
fn order_list(orders: &OrderBook, auth: &AuthState) -> Screen {
    let reservation_code = auth.reservation_code.clone().unwrap_or_default();
    Screen::Order(OrderPage::List {
        orders: orders
            .for_reservation(&reservation_code)
            .into_iter()
            .cloned()
            .collect(),
        reservation_code,
    })
}

async fn start(database_url: Option<String>, migrate: bool, locale: String) -> Startup {
    let (database, database_error) = match database_url {
        Some(database_url) => match database::init_database(database_url, migrate).await {
            Ok(pool) => (Some(pool), None),
            Err(err) => {
                tracing::error!("database init failed, falling back to sample content: {err}");
                (None, Some(err.to_string()))
            }
        },
        None => (None, None),
    };

    let content = content::load_content(database.clone(), locale).await;

    Startup {
        database,
        content,
        database_error,
    }
}
