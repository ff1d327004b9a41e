// SPDX-License-Identifier: GPL-3.0-only

//! Sample content, used whenever the backend is missing, failing or empty.

use chrono::NaiveDate;

use crate::{
    models::{
        booking::{BookingInfo, BookingRoom},
        compatibility_rule::CompatibilityRule,
        customization::CustomizationOption,
        offer::{OfferSelection, OfferType},
        room_option::RoomOption,
        section::{SectionConfig, SectionKind},
        translation::Translations,
    },
    order::{Order, OrderItem, OrderRoom, OrderStatus},
    pricing::{PricingSummaryItem, PricingUnit},
};

pub const DEMO_RESERVATION_CODE: &str = "ABS123";
pub const DEMO_MULTI_RESERVATION_CODE: &str = "MULTI456";
pub const DEMO_EMAIL: &str = "guest@example.com";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn rooms() -> Vec<RoomOption> {
    vec![
        RoomOption {
            id: "superior".to_string(),
            title: "Superior Room".to_string(),
            description: "Bright room with a work desk and rain shower.".to_string(),
            price: 20.0,
            images: strings(&["rooms/superior-1.jpg", "rooms/superior-2.jpg"]),
            amenities: strings(&["Wi-Fi", "Rain shower", "Coffee machine"]),
            size_m2: Some(28),
            max_guests: Some(2),
        },
        RoomOption {
            id: "deluxe-sea".to_string(),
            title: "Deluxe Sea View".to_string(),
            description: "Spacious room facing the sea with a private balcony.".to_string(),
            price: 45.0,
            images: strings(&["rooms/deluxe-1.jpg", "rooms/deluxe-2.jpg", "rooms/deluxe-3.jpg"]),
            amenities: strings(&["Wi-Fi", "Balcony", "Sea view", "Minibar"]),
            size_m2: Some(35),
            max_guests: Some(3),
        },
        RoomOption {
            id: "family-suite".to_string(),
            title: "Family Suite".to_string(),
            description: "Two connected bedrooms and a living area.".to_string(),
            price: 70.0,
            images: strings(&["rooms/family-1.jpg"]),
            amenities: strings(&["Wi-Fi", "Living room", "Two bathrooms", "Kids welcome pack"]),
            size_m2: Some(55),
            max_guests: Some(5),
        },
        RoomOption {
            id: "junior-suite".to_string(),
            title: "Junior Suite".to_string(),
            description: "Open plan suite with a freestanding bathtub.".to_string(),
            price: 95.0,
            images: strings(&["rooms/junior-1.jpg", "rooms/junior-2.jpg"]),
            amenities: strings(&["Wi-Fi", "Bathtub", "Nespresso", "Bathrobes"]),
            size_m2: Some(48),
            max_guests: Some(2),
        },
    ]
}

fn customization(
    id: &str,
    category: &str,
    title: &str,
    price: f64,
    unit: PricingUnit,
) -> CustomizationOption {
    CustomizationOption {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: String::new(),
        price,
        unit,
        icon: None,
    }
}

pub fn customizations() -> Vec<CustomizationOption> {
    vec![
        customization("bed-king", "bed", "King size bed", 0.0, PricingUnit::PerStay),
        customization("bed-twin", "bed", "Twin beds", 0.0, PricingUnit::PerStay),
        customization("view-city", "view", "City view", 0.0, PricingUnit::PerNight),
        customization("view-sea", "view", "Sea view", 25.0, PricingUnit::PerNight),
        customization("floor-high", "floor", "High floor", 10.0, PricingUnit::PerNight),
        customization("floor-low", "floor", "Low floor", 0.0, PricingUnit::PerNight),
        customization("pillow-menu", "comfort", "Pillow menu", 8.0, PricingUnit::PerStay),
        customization("baby-crib", "family", "Baby crib", 0.0, PricingUnit::PerStay),
        customization(
            "terrace-setup",
            "terrace",
            "Terrace sunset setup",
            30.0,
            PricingUnit::PerStay,
        ),
    ]
}

pub fn compatibility_rules() -> Vec<CompatibilityRule> {
    vec![
        CompatibilityRule::excludes("baby-crib", "bed-twin"),
        CompatibilityRule::requires("terrace-setup", "view-sea"),
    ]
}

pub fn offers() -> Vec<OfferType> {
    vec![
        OfferType {
            id: "spa-circuit".to_string(),
            title: "Spa circuit".to_string(),
            description: "Two hours of thermal circuit.".to_string(),
            price: 35.0,
            unit: PricingUnit::PerPerson,
            max_quantity: Some(4),
            requires_date: true,
            image: Some("offers/spa.jpg".to_string()),
        },
        OfferType {
            id: "romantic-dinner".to_string(),
            title: "Romantic dinner".to_string(),
            description: "Tasting menu with wine pairing.".to_string(),
            price: 120.0,
            unit: PricingUnit::PerStay,
            max_quantity: Some(2),
            requires_date: true,
            image: Some("offers/dinner.jpg".to_string()),
        },
        OfferType {
            id: "breakfast".to_string(),
            title: "Breakfast buffet".to_string(),
            description: "Served from 7:00 to 11:00.".to_string(),
            price: 18.0,
            unit: PricingUnit::PerNight,
            max_quantity: Some(6),
            requires_date: false,
            image: Some("offers/breakfast.jpg".to_string()),
        },
        OfferType {
            id: "parking".to_string(),
            title: "Private parking".to_string(),
            description: "Covered parking space.".to_string(),
            price: 15.0,
            unit: PricingUnit::PerNight,
            max_quantity: Some(2),
            requires_date: false,
            image: None,
        },
        OfferType {
            id: "late-checkout".to_string(),
            title: "Late checkout".to_string(),
            description: "Keep the room until 16:00.".to_string(),
            price: 40.0,
            unit: PricingUnit::PerStay,
            max_quantity: Some(1),
            requires_date: false,
            image: None,
        },
    ]
}

pub fn sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            section: SectionKind::Rooms,
            enabled: true,
            sort_order: 1,
            title_key: "rooms.title".to_string(),
        },
        SectionConfig {
            section: SectionKind::Customizations,
            enabled: true,
            sort_order: 2,
            title_key: "customizations.title".to_string(),
        },
        SectionConfig {
            section: SectionKind::Offers,
            enabled: true,
            sort_order: 3,
            title_key: "offers.title".to_string(),
        },
    ]
}

pub fn translations(locale: &str) -> Translations {
    let entries: &[(&str, &str)] = if locale.to_ascii_lowercase().starts_with("es") {
        &[
            ("rooms.title", "Elige tu habitación"),
            ("customizations.title", "Personaliza tu habitación"),
            ("offers.title", "Ofertas especiales"),
        ]
    } else {
        &[
            ("rooms.title", "Choose your room"),
            ("customizations.title", "Customize your room"),
            ("offers.title", "Special offers"),
        ]
    };

    Translations::new(
        locale,
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())),
    )
}

pub fn bookings() -> Vec<BookingInfo> {
    vec![
        BookingInfo {
            reservation_code: DEMO_RESERVATION_CODE.to_string(),
            guest_name: "Alex Morgan".to_string(),
            guest_email: DEMO_EMAIL.to_string(),
            check_in: date(2026, 7, 1),
            check_out: date(2026, 7, 5),
            rooms: vec![BookingRoom {
                id: "room-1".to_string(),
                room_type_id: "standard".to_string(),
                room_name: "Standard Double".to_string(),
                adults: 2,
                children: 0,
            }],
        },
        BookingInfo {
            reservation_code: DEMO_MULTI_RESERVATION_CODE.to_string(),
            guest_name: "Sam Rivera".to_string(),
            guest_email: "family@example.com".to_string(),
            check_in: date(2026, 8, 10),
            check_out: date(2026, 8, 13),
            rooms: vec![
                BookingRoom {
                    id: "room-1".to_string(),
                    room_type_id: "standard".to_string(),
                    room_name: "Standard Double".to_string(),
                    adults: 2,
                    children: 0,
                },
                BookingRoom {
                    id: "room-2".to_string(),
                    room_type_id: "standard-triple".to_string(),
                    room_name: "Standard Triple".to_string(),
                    adults: 2,
                    children: 1,
                },
            ],
        },
    ]
}

pub fn booking(reservation_code: &str) -> Option<BookingInfo> {
    bookings()
        .into_iter()
        .find(|b| b.reservation_code.eq_ignore_ascii_case(reservation_code.trim()))
}

pub fn orders() -> Vec<Order> {
    let offers = offers();
    let spa = offers.iter().find(|o| o.id == "spa-circuit");
    let parking = offers.iter().find(|o| o.id == "parking");

    let mut items = Vec::new();
    if let Some(spa) = spa {
        let selection = OfferSelection {
            date: Some(date(2026, 7, 2)),
            booked: true,
            ..OfferSelection::for_stay(2, 4)
        };
        items.push(OrderItem {
            item: PricingSummaryItem::offer(spa, &selection),
            status: OrderStatus::Confirmed,
        });
    }
    if let Some(parking) = parking {
        let selection = OfferSelection {
            booked: true,
            ..OfferSelection::for_stay(2, 4)
        };
        items.push(OrderItem {
            item: PricingSummaryItem::offer(parking, &selection),
            status: OrderStatus::Pending,
        });
    }

    vec![Order::new(
        "ORD-DEMO01".to_string(),
        DEMO_RESERVATION_CODE.to_string(),
        DEMO_EMAIL.to_string(),
        date(2026, 6, 1).and_hms_opt(10, 30, 0).unwrap_or_default(),
        vec![OrderRoom {
            booking_room_id: "room-1".to_string(),
            room_name: "Standard Double".to_string(),
            items,
        }],
    )]
}
