//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP client for the remote booking API.

pub mod booking_api_client;

// Re-export main types for convenience
pub use booking_api_client::{BookingApi, BookingApiClient};
