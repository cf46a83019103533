//! Billing API access for the browser front-end.

pub mod client;

pub use client::{fetch_bill, Bill, ClientSettings};
