//! Shop module: carts, checkout and order status updates.
//!
//! Cart records and orders are always stamped with the verified
//! caller's identity; nothing identity-shaped is ever taken from a
//! request body.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ShopService;
