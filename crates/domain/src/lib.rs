//! # pgdesk-domain
//!
//! Pure domain model for the pgdesk paid-guest accommodation console.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates
//! - Define **Guests** (people staying in the property)
//! - Define **Rooms** (inventory with type, rent and occupancy)
//! - Define **Bookings** (a guest occupying a room for a period)
//! - Define **Payments** (money received against a booking)
//! - Define **Maintenance requests** (room issues and their lifecycle)
//! - Closed enumerations for every status / type / method field
//! - Client-side validation of creation forms and display formatting
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The REST backend is reached through ports defined in the `app` crate.

pub mod choice;
pub mod error;
pub mod id;
pub mod money;
pub mod text;
pub mod time;

pub mod booking;
pub mod guest;
pub mod maintenance;
pub mod payment;
pub mod room;
