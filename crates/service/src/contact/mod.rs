//! Contact module: public message intake, admin-only listing.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ContactService;
