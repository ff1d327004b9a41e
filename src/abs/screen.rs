// SPDX-License-Identifier: GPL-3.0-only

pub mod booking;
pub mod login;
pub mod order;
pub mod prebooking;

pub use booking::Booking;
pub use login::Login;
pub use order::OrderPage;
pub use prebooking::PreBooking;

pub enum Screen {
    PreBooking(PreBooking),
    Booking(Booking),
    Login(Login),
    Order(OrderPage),
}
