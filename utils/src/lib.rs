// SPDX-License-Identifier: GPL-3.0-only

pub mod currency;
pub mod date;
pub mod pagination;
pub mod styling;
pub mod text;
