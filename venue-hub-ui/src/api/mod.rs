//! API Access
//!
//! HTTP calls to the bookings service.

pub mod client;

pub use client::{fetch_user_status, get_api_base, GlooHistoryClient};
