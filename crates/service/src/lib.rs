//! Service layer: the authorization and workflow-consistency core.
//! - `auth` carries the token service, the request guard and account flows.
//! - `catalog`, `shop`, `review` and `contact` carry the domain workflows.
//! - Every module follows the same three-layer layout (domain, repository,
//!   service); repositories ship an in-memory mock next to the SeaORM one.

pub mod errors;
pub mod auth;
pub mod catalog;
pub mod shop;
pub mod review;
pub mod contact;
