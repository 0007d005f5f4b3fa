//! Typed surface of the hotel API, one module per resource.
//!
//! Every function goes through the authenticated pipeline in [`crate::client`]
//! and deserializes the response envelope into an explicit type - a payload
//! that does not match its schema is rejected as an error rather than coerced
//! into something that looks empty.

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod checkout;
pub mod custom_food_requests;
pub mod dining;
pub mod food_orders;
pub mod rooms;
pub mod settings;
