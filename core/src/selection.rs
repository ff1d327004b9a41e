// SPDX-License-Identifier: GPL-3.0-only

//! Selection state of one booking room.
//!
//! The room carousel, the customization picker, the offers picker and the pricing panel all
//! read from (and write to) a single [`RoomSelection`]. The pricing panel never owns data: it is
//! rebuilt through [`RoomSelection::summary`], and removing an item there goes through
//! [`RoomSelection::remove_item`] so the source control goes back to its unselected state.

use std::collections::BTreeMap;

use abs_utils::date::nights_between;
use chrono::NaiveDate;

use crate::{
    compatibility,
    content::Catalog,
    error::SelectionError,
    models::{
        booking::{BookingInfo, BookingRoom},
        compatibility_rule::CompatibilityRule,
        customization::CustomizationOption,
        offer::{OfferSelection, OfferType},
        room_option::RoomOption,
    },
    pricing::{ItemRef, PricingSummary, PricingSummaryItem},
};

/// The stay a selection is priced against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl Stay {
    pub fn new(booking: &BookingInfo, room: &BookingRoom) -> Self {
        Self {
            check_in: booking.check_in,
            check_out: booking.check_out,
            guests: room.guests(),
        }
    }

    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }

    /// Whether the guest is in the hotel on the night of `date`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.check_in && date < self.check_out
    }
}

/// A change made through the controls of an offer card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferChange {
    Quantity(u32),
    Persons(u32),
    Nights(u32),
    Date(Option<NaiveDate>),
    /// Adds or removes a night of a per night offer
    ToggleDate(NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomSelection {
    stay: Stay,
    room: Option<String>,
    /// Selected customizations, in selection order
    customizations: Vec<String>,
    /// Offers whose card has been touched, booked or not
    offers: BTreeMap<String, OfferSelection>,
}

impl RoomSelection {
    pub fn new(stay: Stay) -> Self {
        Self {
            stay,
            room: None,
            customizations: Vec::new(),
            offers: BTreeMap::new(),
        }
    }

    pub fn stay(&self) -> &Stay {
        &self.stay
    }

    // ROOM CAROUSEL

    pub fn selected_room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn select_room(&mut self, room: &RoomOption) {
        tracing::debug!("room {} selected", room.id);
        self.room = Some(room.id.clone());
    }

    pub fn clear_room(&mut self) {
        self.room = None;
    }

    // CUSTOMIZATIONS

    pub fn selected_customizations(&self) -> &[String] {
        &self.customizations
    }

    pub fn is_customization_selected(&self, id: &str) -> bool {
        self.customizations.iter().any(|c| c == id)
    }

    /// Selects or deselects an option. Selecting replaces the other options of the same
    /// category and the excluded ones, deselecting also drops the options that required it.
    /// Returns the ids that got deselected as a side effect.
    pub fn toggle_customization(
        &mut self,
        option: &CustomizationOption,
        options: &[CustomizationOption],
        rules: &[CompatibilityRule],
    ) -> Result<Vec<String>, SelectionError> {
        if self.is_customization_selected(&option.id) {
            return Ok(self.remove_customization(&option.id, rules));
        }

        if let Some(missing) =
            compatibility::missing_requirement(&option.id, &self.customizations, rules)
        {
            return Err(SelectionError::Requires {
                option: option.id.clone(),
                missing: missing.to_string(),
            });
        }

        let same_category: Vec<String> = self
            .customizations
            .iter()
            .filter(|selected| {
                options
                    .iter()
                    .any(|o| &o.id == *selected && o.category == option.category)
            })
            .cloned()
            .collect();
        let excluded = compatibility::excluded_by(&option.id, rules);

        let mut dropped = Vec::new();
        for id in same_category
            .iter()
            .map(String::as_str)
            .chain(excluded.into_iter())
        {
            if self.is_customization_selected(id) {
                dropped.extend(self.remove_customization(id, rules));
            }
        }

        tracing::debug!("customization {} selected", option.id);
        self.customizations.push(option.id.clone());
        Ok(dropped)
    }

    /// Deselects `id` and every option depending on it, returns what was removed
    pub fn remove_customization(&mut self, id: &str, rules: &[CompatibilityRule]) -> Vec<String> {
        if !self.is_customization_selected(id) {
            return Vec::new();
        }

        let mut removed = vec![id.to_string()];
        removed.extend(compatibility::dependents_of(id, &self.customizations, rules));
        self.customizations.retain(|c| !removed.contains(c));
        removed
    }

    // SPECIAL OFFERS

    /// Current values of an offer card, the defaults of the stay when untouched
    pub fn offer_selection(&self, id: &str) -> OfferSelection {
        self.offers
            .get(id)
            .cloned()
            .unwrap_or_else(|| OfferSelection::for_stay(self.stay.guests, self.stay.nights()))
    }

    pub fn is_offer_booked(&self, id: &str) -> bool {
        self.offers.get(id).is_some_and(OfferSelection::is_booked)
    }

    /// Applies a control change. Any change clears the booked flag,
    /// a zero quantity resets the card.
    pub fn update_offer(
        &mut self,
        offer: &OfferType,
        change: OfferChange,
    ) -> Result<(), SelectionError> {
        if change == OfferChange::Quantity(0) {
            self.cancel_offer(&offer.id);
            return Ok(());
        }

        let mut selection = self.offer_selection(&offer.id);
        match change {
            OfferChange::Quantity(quantity) => {
                selection.quantity = offer.max_quantity.map_or(quantity, |max| quantity.min(max));
            }
            OfferChange::Persons(persons) => {
                selection.persons = persons.clamp(1, self.stay.guests.max(1));
            }
            OfferChange::Nights(nights) => {
                selection.nights = nights.clamp(1, self.stay.nights().max(1));
            }
            OfferChange::Date(date) => {
                if let Some(date) = date {
                    self.check_date(date)?;
                }
                selection.date = date;
            }
            OfferChange::ToggleDate(date) => {
                self.check_date(date)?;
                if let Some(index) = selection.dates.iter().position(|d| *d == date) {
                    selection.dates.remove(index);
                } else {
                    selection.dates.push(date);
                    selection.dates.sort();
                }
                if !selection.dates.is_empty() {
                    selection.nights = u32::try_from(selection.dates.len()).unwrap_or(u32::MAX);
                }
            }
        }

        selection.booked = false;
        self.offers.insert(offer.id.clone(), selection);
        Ok(())
    }

    /// "Book Now": validates the card and adds the offer to the pricing panel
    pub fn book_offer(&mut self, offer: &OfferType) -> Result<(), SelectionError> {
        let mut selection = self.offer_selection(&offer.id);

        if selection.quantity == 0 {
            return Err(SelectionError::NothingSelected);
        }
        if offer.requires_date {
            let has_date = if offer.uses_multiple_dates() {
                !selection.dates.is_empty()
            } else {
                selection.date.is_some()
            };
            if !has_date {
                return Err(SelectionError::MissingDate(offer.id.clone()));
            }
        }
        for date in selection.date.iter().chain(selection.dates.iter()) {
            self.check_date(*date)?;
        }

        tracing::debug!("offer {} booked", offer.id);
        selection.booked = true;
        self.offers.insert(offer.id.clone(), selection);
        Ok(())
    }

    /// Back to the untouched "Book Now" state
    pub fn cancel_offer(&mut self, id: &str) {
        self.offers.remove(id);
    }

    // PRICING PANEL

    /// Removes an item from the pricing panel, resetting the control it came from
    pub fn remove_item(
        &mut self,
        item: &ItemRef,
        rules: &[CompatibilityRule],
    ) -> Result<(), SelectionError> {
        match item {
            ItemRef::Room(id) => {
                if self.room.as_deref() != Some(id) {
                    return Err(SelectionError::UnknownItem(id.clone()));
                }
                self.clear_room();
            }
            ItemRef::Customization(id) => {
                if self.remove_customization(id, rules).is_empty() {
                    return Err(SelectionError::UnknownItem(id.clone()));
                }
            }
            ItemRef::Offer(id) => {
                if !self.is_offer_booked(id) {
                    return Err(SelectionError::UnknownItem(id.clone()));
                }
                self.cancel_offer(id);
            }
        }
        tracing::debug!("{item:?} removed from the pricing panel");
        Ok(())
    }

    /// Rebuilds the pricing panel. Ids missing from the catalog are skipped.
    pub fn summary(&self, catalog: &Catalog) -> PricingSummary {
        let persons = self.stay.guests;
        let nights = self.stay.nights();
        let mut items = Vec::new();

        if let Some(room) = self.room.as_deref().and_then(|id| catalog.room(id)) {
            items.push(PricingSummaryItem::room(room, persons, nights));
        }

        items.extend(
            self.customizations
                .iter()
                .filter_map(|id| catalog.customization(id))
                .map(|option| PricingSummaryItem::customization(option, persons, nights)),
        );

        // Offers follow the catalog order, like the cards
        items.extend(catalog.offers.iter().filter_map(|offer| {
            self.offers
                .get(&offer.id)
                .filter(|s| s.is_booked())
                .map(|selection| PricingSummaryItem::offer(offer, selection))
        }));

        PricingSummary { items }
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), SelectionError> {
        if self.stay.contains(date) {
            Ok(())
        } else {
            Err(SelectionError::DateOutsideStay(date))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock, pricing::PricingUnit};
    use pretty_assertions::assert_eq;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
    }

    /// 2 guests, 4 nights
    fn selection() -> RoomSelection {
        RoomSelection::new(Stay {
            check_in: date(1),
            check_out: date(5),
            guests: 2,
        })
    }

    fn offer(id: &str, unit: PricingUnit) -> OfferType {
        OfferType {
            id: id.to_string(),
            title: id.to_string(),
            price: 100.0,
            unit,
            ..Default::default()
        }
    }

    fn catalog_with(offers: Vec<OfferType>) -> Catalog {
        Catalog {
            offers,
            ..Catalog::mock("en")
        }
    }

    #[test]
    fn booked_offers_reach_the_pricing_panel() {
        let per_stay = offer("per-stay", PricingUnit::PerStay);
        let per_person = offer("per-person", PricingUnit::PerPerson);
        let per_night = offer("per-night", PricingUnit::PerNight);
        let catalog = catalog_with(vec![per_stay.clone(), per_person.clone(), per_night.clone()]);

        let mut selection = RoomSelection::new(Stay {
            check_in: date(1),
            check_out: date(5),
            guests: 3,
        });
        selection.book_offer(&per_stay).unwrap();
        selection.book_offer(&per_person).unwrap();
        selection.book_offer(&per_night).unwrap();

        let summary = selection.summary(&catalog);
        let totals: Vec<f64> = summary.items.iter().map(|i| i.total).collect();
        assert_eq!(totals, vec![100.0, 300.0, 400.0]);
        assert_eq!(summary.total(), 800.0);
    }

    #[test]
    fn untouched_or_unbooked_offers_are_not_priced() {
        let spa = offer("spa", PricingUnit::PerStay);
        let catalog = catalog_with(vec![spa.clone()]);
        let mut selection = selection();

        selection.update_offer(&spa, OfferChange::Quantity(2)).unwrap();
        assert!(!selection.is_offer_booked("spa"));
        assert!(selection.summary(&catalog).is_empty());
    }

    #[test]
    fn changing_a_field_clears_the_booked_flag() {
        let spa = offer("spa", PricingUnit::PerPerson);
        let catalog = catalog_with(vec![spa.clone()]);
        let mut selection = selection();

        selection.book_offer(&spa).unwrap();
        assert!(selection.is_offer_booked("spa"));

        selection.update_offer(&spa, OfferChange::Persons(1)).unwrap();
        assert!(!selection.is_offer_booked("spa"));
        assert!(selection.summary(&catalog).is_empty());
        assert_eq!(selection.offer_selection("spa").persons, 1);

        selection.book_offer(&spa).unwrap();
        assert_eq!(selection.summary(&catalog).total(), 100.0);
    }

    #[test]
    fn removing_from_the_panel_resets_the_offer_card() {
        let spa = offer("spa", PricingUnit::PerStay);
        let catalog = catalog_with(vec![spa.clone()]);
        let mut selection = selection();

        selection.update_offer(&spa, OfferChange::Quantity(3)).unwrap();
        selection.book_offer(&spa).unwrap();
        let item = selection.summary(&catalog).items[0].item.clone();

        selection.remove_item(&item, &[]).unwrap();

        assert!(!selection.is_offer_booked("spa"));
        assert_eq!(selection.offer_selection("spa"), OfferSelection::for_stay(2, 4));
        assert!(selection.summary(&catalog).is_empty());
        assert_eq!(
            selection.remove_item(&item, &[]),
            Err(SelectionError::UnknownItem("spa".to_string()))
        );
    }

    #[test]
    fn removing_from_the_panel_resets_room_and_customizations() {
        let catalog = Catalog::mock("en");
        let mut selection = selection();
        let room = catalog.room("deluxe-sea").unwrap();
        let sea = catalog.customization("view-sea").unwrap();

        selection.select_room(room);
        selection
            .toggle_customization(sea, &catalog.customizations, &catalog.rules)
            .unwrap();
        let summary = selection.summary(&catalog);
        // 45 × 4 nights + 25 × 4 nights
        assert_eq!(summary.total(), 280.0);

        selection
            .remove_item(&ItemRef::Room("deluxe-sea".to_string()), &catalog.rules)
            .unwrap();
        selection
            .remove_item(&ItemRef::Customization("view-sea".to_string()), &catalog.rules)
            .unwrap();

        assert_eq!(selection.selected_room(), None);
        assert!(!selection.is_customization_selected("view-sea"));
        assert!(selection.summary(&catalog).is_empty());
    }

    #[test]
    fn quantity_is_bounded_and_zero_resets() {
        let dinner = OfferType {
            max_quantity: Some(2),
            ..offer("dinner", PricingUnit::PerStay)
        };
        let mut selection = selection();

        selection.update_offer(&dinner, OfferChange::Quantity(5)).unwrap();
        assert_eq!(selection.offer_selection("dinner").quantity, 2);

        selection.book_offer(&dinner).unwrap();
        selection.update_offer(&dinner, OfferChange::Quantity(0)).unwrap();
        assert!(!selection.is_offer_booked("dinner"));
        assert_eq!(selection.offer_selection("dinner").quantity, 1);
    }

    #[test]
    fn dated_offers_need_a_date_inside_the_stay() {
        let dinner = OfferType {
            requires_date: true,
            ..offer("dinner", PricingUnit::PerStay)
        };
        let mut selection = selection();

        assert_eq!(
            selection.book_offer(&dinner),
            Err(SelectionError::MissingDate("dinner".to_string()))
        );
        assert_eq!(
            selection.update_offer(&dinner, OfferChange::Date(Some(date(5)))),
            Err(SelectionError::DateOutsideStay(date(5)))
        );

        selection
            .update_offer(&dinner, OfferChange::Date(Some(date(2))))
            .unwrap();
        selection.book_offer(&dinner).unwrap();
        assert!(selection.is_offer_booked("dinner"));
    }

    #[test]
    fn picked_nights_drive_per_night_offers() {
        let breakfast = OfferType {
            requires_date: true,
            ..offer("breakfast", PricingUnit::PerNight)
        };
        let catalog = catalog_with(vec![breakfast.clone()]);
        let mut selection = selection();

        selection
            .update_offer(&breakfast, OfferChange::ToggleDate(date(3)))
            .unwrap();
        selection
            .update_offer(&breakfast, OfferChange::ToggleDate(date(1)))
            .unwrap();
        assert_eq!(selection.offer_selection("breakfast").dates, vec![date(1), date(3)]);

        selection.book_offer(&breakfast).unwrap();
        assert_eq!(selection.summary(&catalog).total(), 200.0);

        selection
            .update_offer(&breakfast, OfferChange::ToggleDate(date(3)))
            .unwrap();
        assert!(!selection.is_offer_booked("breakfast"));
        assert_eq!(selection.offer_selection("breakfast").nights, 1);
    }

    #[test]
    fn same_category_customizations_replace_each_other() {
        let catalog = Catalog::mock("en");
        let mut selection = selection();
        let king = catalog.customization("bed-king").unwrap();
        let twin = catalog.customization("bed-twin").unwrap();

        selection
            .toggle_customization(king, &catalog.customizations, &catalog.rules)
            .unwrap();
        let dropped = selection
            .toggle_customization(twin, &catalog.customizations, &catalog.rules)
            .unwrap();

        assert_eq!(dropped, vec!["bed-king".to_string()]);
        assert_eq!(selection.selected_customizations(), ["bed-twin".to_string()]);

        // toggling again deselects
        selection
            .toggle_customization(twin, &catalog.customizations, &catalog.rules)
            .unwrap();
        assert!(selection.selected_customizations().is_empty());
    }

    #[test]
    fn compatibility_rules_are_enforced() {
        let catalog = Catalog::mock("en");
        let mut selection = selection();
        let get = |id: &str| catalog.customization(id).unwrap();

        assert_eq!(
            selection.toggle_customization(
                get("terrace-setup"),
                &catalog.customizations,
                &catalog.rules,
            ),
            Err(SelectionError::Requires {
                option: "terrace-setup".to_string(),
                missing: "view-sea".to_string(),
            })
        );

        selection
            .toggle_customization(get("view-sea"), &catalog.customizations, &catalog.rules)
            .unwrap();
        selection
            .toggle_customization(get("terrace-setup"), &catalog.customizations, &catalog.rules)
            .unwrap();

        // switching the view drops the terrace setup that needed the sea view
        let dropped = selection
            .toggle_customization(get("view-city"), &catalog.customizations, &catalog.rules)
            .unwrap();
        assert_eq!(
            dropped,
            vec!["view-sea".to_string(), "terrace-setup".to_string()]
        );

        selection
            .toggle_customization(get("bed-twin"), &catalog.customizations, &catalog.rules)
            .unwrap();
        let dropped = selection
            .toggle_customization(get("baby-crib"), &catalog.customizations, &catalog.rules)
            .unwrap();
        assert_eq!(dropped, vec!["bed-twin".to_string()]);
        assert_eq!(
            selection.selected_customizations(),
            ["view-city".to_string(), "baby-crib".to_string()]
        );
    }

    #[test]
    fn demo_catalog_prices() {
        let catalog = Catalog::mock("en");
        let booking = mock::booking(mock::DEMO_RESERVATION_CODE).unwrap();
        let mut selection = RoomSelection::new(Stay::new(&booking, &booking.rooms[0]));

        let spa = catalog.offer("spa-circuit").unwrap();
        selection
            .update_offer(spa, OfferChange::Date(Some(booking.check_in)))
            .unwrap();
        selection.book_offer(spa).unwrap();

        // 35 × 2 guests
        assert_eq!(selection.summary(&catalog).offers_total(), 70.0);
    }
}
