// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use crate::{
    content::Catalog,
    error::SelectionError,
    models::booking::{BookingInfo, BookingRoom},
    pricing::PricingSummary,
    selection::{RoomSelection, Stay},
};

/// The selections of a whole reservation, one independent [`RoomSelection`] per booked room
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    booking: BookingInfo,
    selections: HashMap<String, RoomSelection>,
    active_room: String,
}

impl BookingSession {
    pub fn new(booking: BookingInfo) -> Result<Self, SelectionError> {
        let first = booking.rooms.first().ok_or(SelectionError::EmptyBooking)?;
        let active_room = first.id.clone();

        let selections = booking
            .rooms
            .iter()
            .map(|room| (room.id.clone(), RoomSelection::new(Stay::new(&booking, room))))
            .collect();

        Ok(Self {
            booking,
            selections,
            active_room,
        })
    }

    pub fn booking(&self) -> &BookingInfo {
        &self.booking
    }

    pub fn is_multi_room(&self) -> bool {
        self.booking.is_multi_room()
    }

    pub fn active_room_id(&self) -> &str {
        &self.active_room
    }

    pub fn active_room(&self) -> Option<&BookingRoom> {
        self.booking.room(&self.active_room)
    }

    /// Makes another room the one being edited, the others keep their selections untouched
    pub fn switch_room(&mut self, room_id: &str) -> Result<(), SelectionError> {
        if !self.selections.contains_key(room_id) {
            return Err(SelectionError::UnknownRoom(room_id.to_string()));
        }
        tracing::debug!("switching to booking room {room_id}");
        self.active_room = room_id.to_string();
        Ok(())
    }

    pub fn selection(&self) -> Option<&RoomSelection> {
        self.selections.get(&self.active_room)
    }

    pub fn selection_mut(&mut self) -> Option<&mut RoomSelection> {
        self.selections.get_mut(&self.active_room)
    }

    pub fn room_selection(&self, room_id: &str) -> Option<&RoomSelection> {
        self.selections.get(room_id)
    }

    /// Pricing summaries of every room, in booking order
    pub fn summaries(&self, catalog: &Catalog) -> Vec<(&BookingRoom, PricingSummary)> {
        self.booking
            .rooms
            .iter()
            .filter_map(|room| {
                self.selections
                    .get(&room.id)
                    .map(|selection| (room, selection.summary(catalog)))
            })
            .collect()
    }

    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.summaries(catalog)
            .iter()
            .map(|(_, summary)| summary.total())
            .sum()
    }

    /// Whether anything at all would end up in an order
    pub fn has_items(&self, catalog: &Catalog) -> bool {
        self.summaries(catalog).iter().any(|(_, s)| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock, pricing::ItemRef, selection::OfferChange};
    use pretty_assertions::assert_eq;

    fn multi_session() -> BookingSession {
        BookingSession::new(mock::booking(mock::DEMO_MULTI_RESERVATION_CODE).unwrap()).unwrap()
    }

    #[test]
    fn switching_rooms_preserves_each_selection() {
        let catalog = Catalog::mock("en");
        let mut session = multi_session();
        let parking = catalog.offer("parking").unwrap();
        let suite = catalog.room("family-suite").unwrap();

        assert_eq!(session.active_room_id(), "room-1");
        let first = session.selection_mut().unwrap();
        first.book_offer(parking).unwrap();

        session.switch_room("room-2").unwrap();
        assert!(!session.selection().unwrap().is_offer_booked("parking"));
        session.selection_mut().unwrap().select_room(suite);

        session.switch_room("room-1").unwrap();
        let first = session.selection().unwrap();
        assert!(first.is_offer_booked("parking"));
        assert_eq!(first.selected_room(), None);
        assert_eq!(
            session.room_selection("room-2").unwrap().selected_room(),
            Some("family-suite")
        );

        // parking: 15 × 3 nights, suite: 70 × 3 nights
        assert_eq!(session.total(&catalog), 45.0 + 210.0);
    }

    #[test]
    fn each_room_is_priced_with_its_own_guests() {
        let catalog = Catalog::mock("en");
        let mut session = multi_session();
        let spa = catalog.offer("spa-circuit").unwrap();
        let check_in = session.booking().check_in;

        for room in ["room-1", "room-2"] {
            session.switch_room(room).unwrap();
            let selection = session.selection_mut().unwrap();
            selection
                .update_offer(spa, OfferChange::Date(Some(check_in)))
                .unwrap();
            selection.book_offer(spa).unwrap();
        }

        let totals: Vec<f64> = session
            .summaries(&catalog)
            .iter()
            .map(|(_, s)| s.total())
            .collect();
        assert_eq!(totals, vec![70.0, 105.0]);
    }

    #[test]
    fn removing_in_one_room_leaves_the_other_alone() {
        let catalog = Catalog::mock("en");
        let mut session = multi_session();
        let late = catalog.offer("late-checkout").unwrap();

        for room in ["room-1", "room-2"] {
            session.switch_room(room).unwrap();
            session.selection_mut().unwrap().book_offer(late).unwrap();
        }

        session
            .selection_mut()
            .unwrap()
            .remove_item(&ItemRef::Offer("late-checkout".to_string()), &catalog.rules)
            .unwrap();

        assert!(!session.room_selection("room-2").unwrap().is_offer_booked("late-checkout"));
        assert!(session.room_selection("room-1").unwrap().is_offer_booked("late-checkout"));
    }

    #[test]
    fn unknown_rooms_and_empty_bookings_are_rejected() {
        let mut session = multi_session();
        assert_eq!(
            session.switch_room("room-9"),
            Err(SelectionError::UnknownRoom("room-9".to_string()))
        );
        assert_eq!(session.active_room_id(), "room-1");

        let mut booking = mock::booking(mock::DEMO_RESERVATION_CODE).unwrap();
        booking.rooms.clear();
        assert_eq!(BookingSession::new(booking), Err(SelectionError::EmptyBooking));
    }

    #[test]
    fn empty_sessions_have_no_items() {
        let catalog = Catalog::mock("en");
        let session = multi_session();
        assert!(!session.has_items(&catalog));
        assert_eq!(session.total(&catalog), 0.0);
    }
}
