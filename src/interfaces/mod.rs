//! Delivery adapters

pub mod http;
