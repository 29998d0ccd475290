//! Catalog module: admin-curated services with attached image
//! descriptors. Same three-layer layout as `auth`.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CatalogService;
