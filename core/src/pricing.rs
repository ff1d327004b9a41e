// SPDX-License-Identifier: GPL-3.0-only

//! Derived prices. Nothing here is stored, summaries are rebuilt from the selections every time
//! something changes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::{
    customization::CustomizationOption,
    offer::{OfferSelection, OfferType},
    room_option::RoomOption,
};

/// What the unit price of an item is charged for
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingUnit {
    #[default]
    PerStay,
    PerPerson,
    PerNight,
}

impl fmt::Display for PricingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingUnit::PerStay => write!(f, "perStay"),
            PricingUnit::PerPerson => write!(f, "perPerson"),
            PricingUnit::PerNight => write!(f, "perNight"),
        }
    }
}

impl FromStr for PricingUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "perstay" => Ok(PricingUnit::PerStay),
            "perperson" => Ok(PricingUnit::PerPerson),
            "pernight" => Ok(PricingUnit::PerNight),
            _ => Err(format!("unknown pricing unit '{s}'")),
        }
    }
}

/// `price × quantity`, multiplied by persons or nights depending on the unit
pub fn line_total(
    unit_price: f64,
    unit: PricingUnit,
    quantity: u32,
    persons: u32,
    nights: u32,
) -> f64 {
    let base = unit_price * f64::from(quantity);
    match unit {
        PricingUnit::PerStay => base,
        PricingUnit::PerPerson => base * f64::from(persons),
        PricingUnit::PerNight => base * f64::from(nights),
    }
}

/// Identifies the control an item of the pricing panel comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ItemRef {
    Room(String),
    Customization(String),
    Offer(String),
}

impl ItemRef {
    pub fn id(&self) -> &str {
        match self {
            ItemRef::Room(id) | ItemRef::Customization(id) | ItemRef::Offer(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummaryItem {
    pub item: ItemRef,
    pub title: String,
    pub unit_price: f64,
    pub unit: PricingUnit,
    pub quantity: u32,
    pub persons: u32,
    pub nights: u32,
    pub total: f64,
}

impl PricingSummaryItem {
    fn new(
        item: ItemRef,
        title: &str,
        unit_price: f64,
        unit: PricingUnit,
        quantity: u32,
        persons: u32,
        nights: u32,
    ) -> Self {
        Self {
            item,
            title: title.to_string(),
            unit_price,
            unit,
            quantity,
            persons,
            nights,
            total: line_total(unit_price, unit, quantity, persons, nights),
        }
    }

    /// Room upgrades are charged per night
    pub fn room(room: &RoomOption, persons: u32, nights: u32) -> Self {
        Self::new(
            ItemRef::Room(room.id.clone()),
            &room.title,
            room.price,
            PricingUnit::PerNight,
            1,
            persons,
            nights,
        )
    }

    pub fn customization(option: &CustomizationOption, persons: u32, nights: u32) -> Self {
        Self::new(
            ItemRef::Customization(option.id.clone()),
            &option.title,
            option.price,
            option.unit,
            1,
            persons,
            nights,
        )
    }

    pub fn offer(offer: &OfferType, selection: &OfferSelection) -> Self {
        Self::new(
            ItemRef::Offer(offer.id.clone()),
            &offer.title,
            offer.price,
            offer.unit,
            selection.quantity,
            selection.persons,
            selection.nights,
        )
    }
}

/// The pricing panel content of one booking room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub items: Vec<PricingSummaryItem>,
}

impl PricingSummary {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }

    pub fn room_total(&self) -> f64 {
        self.subtotal(|i| matches!(i, ItemRef::Room(_)))
    }

    pub fn customizations_total(&self) -> f64 {
        self.subtotal(|i| matches!(i, ItemRef::Customization(_)))
    }

    pub fn offers_total(&self) -> f64 {
        self.subtotal(|i| matches!(i, ItemRef::Offer(_)))
    }

    pub fn find(&self, item: &ItemRef) -> Option<&PricingSummaryItem> {
        self.items.iter().find(|i| &i.item == item)
    }

    fn subtotal(&self, filter: impl Fn(&ItemRef) -> bool) -> f64 {
        self.items
            .iter()
            .filter(|i| filter(&i.item))
            .map(|i| i.total)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offer(unit: PricingUnit) -> OfferType {
        OfferType {
            id: "spa".to_string(),
            title: "Spa".to_string(),
            price: 100.0,
            unit,
            ..Default::default()
        }
    }

    fn selection(quantity: u32, persons: u32, nights: u32) -> OfferSelection {
        OfferSelection {
            quantity,
            persons,
            nights,
            ..Default::default()
        }
    }

    #[test]
    fn totals_follow_the_pricing_unit() {
        let per_stay = PricingSummaryItem::offer(&offer(PricingUnit::PerStay), &selection(1, 3, 4));
        let per_person =
            PricingSummaryItem::offer(&offer(PricingUnit::PerPerson), &selection(1, 3, 4));
        let per_night =
            PricingSummaryItem::offer(&offer(PricingUnit::PerNight), &selection(1, 3, 4));

        assert_eq!(per_stay.total, 100.0);
        assert_eq!(per_person.total, 300.0);
        assert_eq!(per_night.total, 400.0);
    }

    #[test]
    fn quantity_multiplies_every_unit() {
        assert_eq!(line_total(25.0, PricingUnit::PerStay, 2, 1, 1), 50.0);
        assert_eq!(line_total(25.0, PricingUnit::PerPerson, 2, 2, 1), 100.0);
        assert_eq!(line_total(25.0, PricingUnit::PerNight, 2, 1, 3), 150.0);
        assert_eq!(line_total(25.0, PricingUnit::PerNight, 0, 1, 3), 0.0);
    }

    #[test]
    fn parses_backend_units() {
        assert_eq!("perStay".parse::<PricingUnit>(), Ok(PricingUnit::PerStay));
        assert_eq!("per_person".parse::<PricingUnit>(), Ok(PricingUnit::PerPerson));
        assert_eq!("PER-NIGHT".parse::<PricingUnit>(), Ok(PricingUnit::PerNight));
        assert!("weekly".parse::<PricingUnit>().is_err());
        assert_eq!(PricingUnit::PerNight.to_string(), "perNight");
    }

    #[test]
    fn subtotals_by_kind() {
        let room = RoomOption {
            id: "deluxe".to_string(),
            title: "Deluxe".to_string(),
            price: 40.0,
            ..Default::default()
        };
        let summary = PricingSummary {
            items: vec![
                PricingSummaryItem::room(&room, 2, 3),
                PricingSummaryItem::offer(&offer(PricingUnit::PerStay), &selection(2, 2, 3)),
            ],
        };

        assert_eq!(summary.room_total(), 120.0);
        assert_eq!(summary.offers_total(), 200.0);
        assert_eq!(summary.customizations_total(), 0.0);
        assert_eq!(summary.total(), 320.0);
        assert!(summary.find(&ItemRef::Offer("spa".to_string())).is_some());
        assert!(summary.find(&ItemRef::Customization("spa".to_string())).is_none());
    }
}
