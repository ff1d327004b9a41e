// SPDX-License-Identifier: GPL-3.0-only

use std::{collections::HashMap, fmt};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthState,
    content::Catalog,
    error::{Error, Result},
    mock,
    pricing::PricingSummaryItem,
    session::BookingSession,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    PartiallyConfirmed,
    Rejected,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::PartiallyConfirmed => write!(f, "partially-confirmed"),
            OrderStatus::Rejected => write!(f, "rejected"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl OrderStatus {
    /// Status of an order given the status of its items
    pub fn aggregate(statuses: impl IntoIterator<Item = OrderStatus>) -> OrderStatus {
        let statuses: Vec<OrderStatus> = statuses.into_iter().collect();
        let all = |status: OrderStatus| statuses.iter().all(|s| *s == status);

        if statuses.is_empty() || statuses.contains(&OrderStatus::Pending) {
            OrderStatus::Pending
        } else if all(OrderStatus::Confirmed) {
            OrderStatus::Confirmed
        } else if all(OrderStatus::Cancelled) {
            OrderStatus::Cancelled
        } else if statuses.contains(&OrderStatus::Confirmed)
            || statuses.contains(&OrderStatus::PartiallyConfirmed)
        {
            OrderStatus::PartiallyConfirmed
        } else {
            OrderStatus::Rejected
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item: PricingSummaryItem,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRoom {
    pub booking_room_id: String,
    pub room_name: String,
    pub items: Vec<OrderItem>,
}

/// What the guest asked for, as sent to the hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub reservation_code: String,
    pub guest_email: String,
    pub created_at: NaiveDateTime,
    pub status: OrderStatus,
    pub rooms: Vec<OrderRoom>,
    pub total: f64,
}

impl Order {
    /// Builds an order, deriving its total and status from the items
    pub fn new(
        id: String,
        reservation_code: String,
        guest_email: String,
        created_at: NaiveDateTime,
        rooms: Vec<OrderRoom>,
    ) -> Self {
        let items = rooms.iter().flat_map(|r| r.items.iter());
        let total = items.clone().map(|i| i.item.total).sum::<f64>();
        let status = OrderStatus::aggregate(items.map(|i| i.status));

        Self {
            id,
            reservation_code,
            guest_email,
            created_at,
            status,
            rooms,
            total,
        }
    }

    /// Turns the current selections into a pending order. Rooms without items are left out.
    pub fn from_session(
        session: &BookingSession,
        catalog: &Catalog,
        now: NaiveDateTime,
    ) -> Result<Order> {
        let rooms: Vec<OrderRoom> = session
            .summaries(catalog)
            .into_iter()
            .filter(|(_, summary)| !summary.is_empty())
            .map(|(room, summary)| OrderRoom {
                booking_room_id: room.id.clone(),
                room_name: room.room_name.clone(),
                items: summary
                    .items
                    .into_iter()
                    .map(|item| OrderItem {
                        item,
                        status: OrderStatus::Pending,
                    })
                    .collect(),
            })
            .collect();

        if rooms.is_empty() {
            return Err(Error::EmptyOrder);
        }

        let booking = session.booking();
        Ok(Order::new(
            new_order_id(),
            booking.reservation_code.clone(),
            booking.guest_email.clone(),
            now,
            rooms,
        ))
    }

    pub fn item_count(&self) -> usize {
        self.rooms.iter().map(|r| r.items.len()).sum()
    }
}

fn new_order_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..8].to_ascii_uppercase())
}

/// Orders known to this session, seeded with the demo ones
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: HashMap<String, Order>,
}

impl OrderBook {
    pub fn with_demo_orders() -> Self {
        let mut book = Self::default();
        for order in mock::orders() {
            book.insert(order);
        }
        book
    }

    pub fn insert(&mut self, order: Order) {
        tracing::info!("order {} stored ({} items)", order.id, order.item_count());
        self.orders.insert(order.id.clone(), order);
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Orders of the logged in reservation, newest first
    pub fn for_reservation(&self, reservation_code: &str) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .values()
            .filter(|o| o.reservation_code.eq_ignore_ascii_case(reservation_code))
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// An order as seen by a logged in guest, who can only see their own reservation's orders
    pub fn get_for(&self, order_id: &str, auth: &AuthState) -> Result<&Order> {
        let order = self
            .get(order_id)
            .ok_or_else(|| Error::UnknownOrder(order_id.to_string()))?;

        let owns = auth.is_authenticated
            && auth
                .reservation_code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(&order.reservation_code));
        if owns {
            Ok(order)
        } else {
            Err(Error::OrderNotAccessible(order_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::OfferChange;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn auth(code: &str) -> AuthState {
        AuthState {
            is_authenticated: true,
            user_email: Some(mock::DEMO_EMAIL.to_string()),
            reservation_code: Some(code.to_string()),
        }
    }

    #[test]
    fn status_aggregation() {
        use OrderStatus::*;
        assert_eq!(OrderStatus::aggregate([]), Pending);
        assert_eq!(OrderStatus::aggregate([Confirmed, Pending]), Pending);
        assert_eq!(OrderStatus::aggregate([Confirmed, Confirmed]), Confirmed);
        assert_eq!(OrderStatus::aggregate([Confirmed, Rejected]), PartiallyConfirmed);
        assert_eq!(OrderStatus::aggregate([Rejected, Cancelled]), Rejected);
        assert_eq!(OrderStatus::aggregate([Cancelled]), Cancelled);
    }

    #[test]
    fn orders_are_built_from_the_session() {
        let catalog = Catalog::mock("en");
        let booking = mock::booking(mock::DEMO_MULTI_RESERVATION_CODE).unwrap();
        let mut session = BookingSession::new(booking).unwrap();

        let breakfast = catalog.offer("breakfast").unwrap();
        let selection = session.selection_mut().unwrap();
        selection.update_offer(breakfast, OfferChange::Quantity(2)).unwrap();
        selection.book_offer(breakfast).unwrap();

        let order = Order::from_session(&session, &catalog, now()).unwrap();

        assert!(order.id.starts_with("ORD-"));
        assert_eq!(order.id.len(), 12);
        assert_eq!(order.reservation_code, mock::DEMO_MULTI_RESERVATION_CODE);
        assert_eq!(order.status, OrderStatus::Pending);
        // room-2 has nothing selected
        assert_eq!(order.rooms.len(), 1);
        assert_eq!(order.rooms[0].booking_room_id, "room-1");
        // 18 × 2 × 3 nights
        assert_eq!(order.total, 108.0);
        assert_eq!(order.total, session.total(&catalog));
    }

    #[test]
    fn empty_sessions_cannot_be_ordered() {
        let catalog = Catalog::mock("en");
        let session =
            BookingSession::new(mock::booking(mock::DEMO_RESERVATION_CODE).unwrap()).unwrap();

        assert!(matches!(
            Order::from_session(&session, &catalog, now()),
            Err(Error::EmptyOrder)
        ));
    }

    #[test]
    fn guests_only_see_their_own_orders() {
        let book = OrderBook::with_demo_orders();

        let order = book.get_for("ORD-DEMO01", &auth("abs123")).unwrap();
        assert_eq!(order.reservation_code, mock::DEMO_RESERVATION_CODE);

        assert!(matches!(
            book.get_for("ORD-DEMO01", &auth("MULTI456")),
            Err(Error::OrderNotAccessible(_))
        ));
        assert!(matches!(
            book.get_for("ORD-DEMO01", &AuthState::default()),
            Err(Error::OrderNotAccessible(_))
        ));
        assert!(matches!(
            book.get_for("ORD-NOPE", &auth("ABS123")),
            Err(Error::UnknownOrder(_))
        ));
    }

    #[test]
    fn new_orders_are_listed_first() {
        let catalog = Catalog::mock("en");
        let mut session =
            BookingSession::new(mock::booking(mock::DEMO_RESERVATION_CODE).unwrap()).unwrap();
        let late = catalog.offer("late-checkout").unwrap();
        session.selection_mut().unwrap().book_offer(late).unwrap();

        let mut book = OrderBook::with_demo_orders();
        let order = Order::from_session(&session, &catalog, now()).unwrap();
        let id = order.id.clone();
        book.insert(order);

        let listed: Vec<&str> = book
            .for_reservation("ABS123")
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(listed, vec![id.as_str(), "ORD-DEMO01"]);
    }
}
