// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use crate::auth::AuthState;

/// Every page the application can show
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/booking`, the reservation code form
    PreBooking,
    /// `/booking/:code`
    Booking(String),
    /// `/multi-booking`
    MultiBooking,
    /// `/new-order/:orderId`
    NewOrder(String),
    /// `/order/:orderId`
    Order(String),
    /// `/order`
    Orders,
}

/// Outcome of trying to open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    LoginRequired,
}

impl Route {
    /// Parses a path, ignoring query strings, fragments and trailing slashes.
    /// Unknown paths land on the home page.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["booking"] => Route::PreBooking,
            ["booking", code] => Route::Booking(code.to_string()),
            ["multi-booking"] => Route::MultiBooking,
            ["new-order", order_id] => Route::NewOrder(order_id.to_string()),
            ["order"] => Route::Orders,
            ["order", order_id] => Route::Order(order_id.to_string()),
            _ => {
                tracing::debug!("unknown route {path}, going home");
                Route::Home
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PreBooking => "/booking".to_string(),
            Route::Booking(code) => format!("/booking/{code}"),
            Route::MultiBooking => "/multi-booking".to_string(),
            Route::NewOrder(order_id) => format!("/new-order/{order_id}"),
            Route::Order(order_id) => format!("/order/{order_id}"),
            Route::Orders => "/order".to_string(),
        }
    }

    /// Order review pages are only shown to logged in guests
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Order(_) | Route::Orders)
    }

    pub fn access(&self, auth: &AuthState) -> RouteAccess {
        if self.requires_auth() && !auth.is_authenticated {
            RouteAccess::LoginRequired
        } else {
            RouteAccess::Granted
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_route() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/booking"), Route::PreBooking);
        assert_eq!(Route::parse("/booking/ABS123/"), Route::Booking("ABS123".to_string()));
        assert_eq!(Route::parse("/multi-booking"), Route::MultiBooking);
        assert_eq!(
            Route::parse("/new-order/ORD-1?lang=es"),
            Route::NewOrder("ORD-1".to_string())
        );
        assert_eq!(Route::parse("/order/ORD-1"), Route::Order("ORD-1".to_string()));
        assert_eq!(Route::parse("/order#top"), Route::Orders);
        assert_eq!(Route::parse("/admin/settings"), Route::Home);
    }

    #[test]
    fn paths_parse_back() {
        let routes = [
            Route::Home,
            Route::PreBooking,
            Route::Booking("ABS123".to_string()),
            Route::MultiBooking,
            Route::NewOrder("ORD-1".to_string()),
            Route::Order("ORD-1".to_string()),
            Route::Orders,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn order_pages_need_a_login() {
        let anonymous = AuthState::default();
        let logged_in = AuthState {
            is_authenticated: true,
            ..Default::default()
        };
        let order = Route::Order("ORD-DEMO01".to_string());

        assert_eq!(order.access(&anonymous), RouteAccess::LoginRequired);
        assert_eq!(Route::Orders.access(&anonymous), RouteAccess::LoginRequired);
        assert_eq!(order.access(&logged_in), RouteAccess::Granted);
        assert_eq!(
            Route::NewOrder("ORD-DEMO01".to_string()).access(&anonymous),
            RouteAccess::Granted
        );
        assert_eq!(Route::Home.access(&anonymous), RouteAccess::Granted);
    }
}
