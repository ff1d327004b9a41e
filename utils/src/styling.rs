// SPDX-License-Identifier: GPL-3.0-only

pub const GLOBAL_SPACING: f32 = 6.;
pub const GLOBAL_BUTTON_HEIGHT: f32 = 40.;
pub const TEXT_SIZE: f32 = 16.;
pub const SMALL_TEXT_SIZE: f32 = 13.;
pub const TITLE_TEXT_SIZE: f32 = 25.;
pub const SUBTITLE_TEXT_SIZE: f32 = 20.;
pub const CARD_WIDTH: f32 = 260.;
pub const PRICING_PANEL_WIDTH: f32 = 340.;
