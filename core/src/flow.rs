// SPDX-License-Identifier: GPL-3.0-only

use crate::models::section::{SectionConfig, SectionKind};

/// A page of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStep {
    RoomSelection,
    Customization,
    SpecialOffers,
    Summary,
}

impl From<SectionKind> for BookingStep {
    fn from(section: SectionKind) -> Self {
        match section {
            SectionKind::Rooms => BookingStep::RoomSelection,
            SectionKind::Customizations => BookingStep::Customization,
            SectionKind::Offers => BookingStep::SpecialOffers,
        }
    }
}

/// Enabled sections in their configured order, always ending with the summary.
/// With no configuration at all every section is shown.
pub fn steps(sections: &[SectionConfig]) -> Vec<BookingStep> {
    let mut steps: Vec<BookingStep> = if sections.is_empty() {
        vec![
            BookingStep::RoomSelection,
            BookingStep::Customization,
            BookingStep::SpecialOffers,
        ]
    } else {
        let mut enabled: Vec<&SectionConfig> = sections.iter().filter(|s| s.enabled).collect();
        enabled.sort_by_key(|s| s.sort_order);
        let mut steps: Vec<BookingStep> = Vec::new();
        for step in enabled.into_iter().map(|s| BookingStep::from(s.section)) {
            if !steps.contains(&step) {
                steps.push(step);
            }
        }
        steps
    };
    steps.push(BookingStep::Summary);
    steps
}

pub fn next(current: BookingStep, steps: &[BookingStep]) -> Option<BookingStep> {
    let index = steps.iter().position(|s| *s == current)?;
    steps.get(index + 1).copied()
}

pub fn previous(current: BookingStep, steps: &[BookingStep]) -> Option<BookingStep> {
    let index = steps.iter().position(|s| *s == current)?;
    index.checked_sub(1).and_then(|i| steps.get(i)).copied()
}
