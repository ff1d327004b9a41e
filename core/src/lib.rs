// SPDX-License-Identifier: GPL-3.0-only

pub mod auth;
pub mod compatibility;
pub mod config;
pub mod content;
pub mod database;
pub mod error;
pub mod flow;
pub mod mock;
pub mod models;
pub mod order;
pub mod pricing;
pub mod routes;
pub mod selection;
pub mod session;

pub use error::{Error, Result};
